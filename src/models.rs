//! Keys identifying corpus entries and the assets loaded for them.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Base64izeError, Result};

/// Extension shared by every corpus asset.
pub const SVG_EXTENSION: &str = ".svg";

fn filename_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^([0-9a-f]+)(?:-(.*?))?\.svg$").expect("invalid filename regex"))
}

/// Reject variant labels that would escape a corpus directory when joined into a path.
///
/// `character` only labels the error.
pub fn validate_variant(character: &str, variant: &str) -> Result<()> {
  if variant.contains(['/', '\\', '\0']) {
    return Err(Base64izeError::invalid_character(character, variant));
  }
  Ok(())
}

/// A character and optional variant naming one entry of the corpus.
///
/// Keys order by code point first and variant second, which is the order used for
/// deterministic exports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetKey {
  character: char,
  variant: String,
}

impl AssetKey {
  /// Create a key for `character`; an empty `variant` means the base rendering.
  pub fn new(character: char, variant: impl Into<String>) -> Self {
    Self {
      character,
      variant: variant.into(),
    }
  }

  /// Build a key from unvalidated user input.
  ///
  /// `character` must hold exactly one code point and `variant` must pass
  /// [`validate_variant`]. A missing variant is treated the same as an empty one.
  pub fn from_input(character: &str, variant: Option<&str>) -> Result<Self> {
    let variant = variant.unwrap_or_default();
    validate_variant(character, variant)?;
    let mut chars = character.chars();
    match (chars.next(), chars.next()) {
      (Some(single), None) => Ok(Self::new(single, variant)),
      _ => Err(Base64izeError::invalid_character(character, variant)),
    }
  }

  /// Decode a corpus filename such as `05b57-Kaisho.svg` back into a key.
  ///
  /// The leading run of lowercase hex digits is the code point. It must be followed
  /// either by `.svg` or by a `-` separator; everything after the separator, up to the
  /// `.svg` suffix, is the variant, so variants may themselves contain `-`. Any other
  /// shape (uppercase hex, no hex run, text glued to the hex) is rejected.
  /// Whether the key exists in the corpus is not checked here.
  pub fn parse_filename(name: &str) -> Result<Self> {
    let invalid = || Base64izeError::InvalidFilename {
      name: name.to_string(),
    };

    let caps = filename_pattern().captures(name).ok_or_else(invalid)?;
    let hex = caps.get(1).map_or("", |m| m.as_str());
    let variant = caps.get(2).map_or("", |m| m.as_str());

    let code_point = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    let character = char::from_u32(code_point).ok_or_else(invalid)?;
    Ok(Self::new(character, variant))
  }

  /// The requested character.
  pub fn character(&self) -> char {
    self.character
  }

  /// The variant label, empty for the base rendering.
  pub fn variant(&self) -> &str {
    &self.variant
  }

  /// Returns `true` when the key names a stylistic variant rather than the base entry.
  pub fn is_variant(&self) -> bool {
    !self.variant.is_empty()
  }

  /// Filename used to look the key up in the corpus, e.g. `06f22.svg`.
  pub fn ascii_name(&self) -> String {
    let code = format!("{:05x}", u32::from(self.character));
    self.with_variant(&code)
  }

  /// Human facing filename using the glyph itself, e.g. `漢.svg`. Never used for lookup.
  pub fn display_name(&self) -> String {
    self.with_variant(self.character.encode_utf8(&mut [0; 4]))
  }

  fn with_variant(&self, stem: &str) -> String {
    if self.variant.is_empty() {
      format!("{stem}{SVG_EXTENSION}")
    } else {
      format!("{stem}-{}{SVG_EXTENSION}", self.variant)
    }
  }
}

impl fmt::Display for AssetKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.variant.is_empty() {
      write!(f, "{}", self.character)
    } else {
      write!(f, "{} ({})", self.character, self.variant)
    }
  }
}

/// Raw SVG document loaded for a key.
///
/// The text is a snapshot of the backing file at load time and is never refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
  key: AssetKey,
  svg: String,
}

impl Asset {
  /// Bind loaded document text to its key.
  pub fn new(key: AssetKey, svg: String) -> Self {
    Self { key, svg }
  }

  /// Key the asset was loaded for.
  pub fn key(&self) -> &AssetKey {
    &self.key
  }

  /// Full document text as stored in the corpus.
  pub fn svg(&self) -> &str {
    &self.svg
  }

  /// Split the asset into its key and document text.
  pub fn into_parts(self) -> (AssetKey, String) {
    (self.key, self.svg)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ascii_name_pads_code_point_to_five_hex_digits() {
    assert_eq!(AssetKey::new('漢', "").ascii_name(), "06f22.svg");
    assert_eq!(AssetKey::new('a', "").ascii_name(), "00061.svg");
    assert_eq!(AssetKey::new('字', "Kaisho").ascii_name(), "05b57-Kaisho.svg");
  }

  #[test]
  fn ascii_name_grows_past_five_digits_for_high_planes() {
    assert_eq!(AssetKey::new('\u{10ffff}', "").ascii_name(), "10ffff.svg");
  }

  #[test]
  fn display_name_uses_the_glyph() {
    assert_eq!(AssetKey::new('漢', "").display_name(), "漢.svg");
    assert_eq!(AssetKey::new('字', "Kaisho").display_name(), "字-Kaisho.svg");
  }

  #[test]
  fn parses_base_and_variant_filenames() {
    assert_eq!(
      AssetKey::parse_filename("00061.svg").unwrap(),
      AssetKey::new('a', "")
    );
    assert_eq!(
      AssetKey::parse_filename("05b57-Kaisho.svg").unwrap(),
      AssetKey::new('字', "Kaisho")
    );
  }

  #[test]
  fn first_dash_after_hex_run_separates_the_variant() {
    let key = AssetKey::parse_filename("05b57-Kaisho-Vt2.svg").unwrap();
    assert_eq!(key.character(), '字');
    assert_eq!(key.variant(), "Kaisho-Vt2");
  }

  #[test]
  fn filename_round_trips_through_ascii_name() {
    let keys = [
      AssetKey::new('a', ""),
      AssetKey::new('漢', ""),
      AssetKey::new('字', "Kaisho"),
      AssetKey::new('字', "Kaisho-Vt2"),
      AssetKey::new('𠀋', "Hz"),
    ];
    for key in keys {
      assert_eq!(AssetKey::parse_filename(&key.ascii_name()).unwrap(), key);
    }
  }

  #[test]
  fn rejects_names_without_a_code_point() {
    assert!(matches!(
      AssetKey::parse_filename("-Kaisho.svg"),
      Err(Base64izeError::InvalidFilename { .. })
    ));
    assert!(AssetKey::parse_filename("README.md").is_err());
    assert!(AssetKey::parse_filename("0d800.svg").is_err());
  }

  #[test]
  fn rejects_text_glued_to_the_hex_run() {
    for name in ["06F22.svg", "data.svg", "0061x.svg"] {
      assert!(
        matches!(
          AssetKey::parse_filename(name),
          Err(Base64izeError::InvalidFilename { .. })
        ),
        "{name} should not parse"
      );
    }
  }

  #[test]
  fn names_without_dash_have_no_variant() {
    let key = AssetKey::parse_filename("0fa1f.svg").unwrap();
    assert_eq!(key, AssetKey::new('\u{fa1f}', ""));
    assert!(!key.is_variant());
  }

  #[test]
  fn from_input_rejects_variants_with_path_separators() {
    for variant in ["../secret", "a/b", "a\\b"] {
      let err = AssetKey::from_input("字", Some(variant)).unwrap_err();
      assert!(err.is_invalid_character());
    }
    assert!(AssetKey::from_input("字", Some("Kaisho-Vt2")).is_ok());
  }

  #[test]
  fn from_input_requires_a_single_code_point() {
    assert_eq!(
      AssetKey::from_input("漢", None).unwrap(),
      AssetKey::new('漢', "")
    );

    match AssetKey::from_input("漢字", Some("Kaisho")) {
      Err(Base64izeError::InvalidCharacter { character, variant }) => {
        assert_eq!(character, "漢字");
        assert_eq!(variant, "Kaisho");
      }
      other => panic!("unexpected result: {other:?}"),
    }
    assert!(AssetKey::from_input("", None).unwrap_err().is_invalid_character());
  }

  #[test]
  fn keys_sort_by_code_point_then_variant() {
    let mut keys = vec![
      AssetKey::new('字', "Kaisho"),
      AssetKey::new('漢', ""),
      AssetKey::new('字', ""),
      AssetKey::new('a', ""),
    ];
    keys.sort();
    assert_eq!(keys, vec![
      AssetKey::new('a', ""),
      AssetKey::new('字', ""),
      AssetKey::new('字', "Kaisho"),
      AssetKey::new('漢', ""),
    ]);
  }
}

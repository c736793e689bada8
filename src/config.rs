//! Project configuration file and validated run settings.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Base64izeError, ConfigSourceError, Result};
use crate::export::{ExportOptions, FailurePolicy};
use crate::models::{AssetKey, validate_variant};

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kanjibase64.config.json";

/// Optional on-disk defaults for the command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Directory holding the KanjiVG corpus files.
  pub corpus_dir: String,
  /// Destination of bulk exports.
  pub export_file: String,
  /// Strip stroke numbers unless overridden.
  pub remove_numbers: bool,
  /// Variant to try before the base rendering; empty for none.
  pub preferred_variant: String,
  /// Include variant entries in bulk exports.
  pub include_variants: bool,
  /// Sort bulk exports by code point and variant.
  pub sort_export: bool,
  /// Behaviour when a single export entry fails.
  pub failure_policy: FailurePolicy,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      corpus_dir: "data/kanjivg/kanji".into(),
      export_file: "kanji_base64.csv".into(),
      remove_numbers: false,
      preferred_variant: String::new(),
      include_variants: false,
      sort_export: true,
      failure_policy: FailurePolicy::Abort,
    }
  }
}

impl ProjectConfig {
  /// Load [`DEFAULT_CONFIG_FILE`] from `dir`, falling back to defaults when it is absent.
  pub fn discover(dir: &Path) -> Result<Self> {
    Self::load_from_path(dir.join(DEFAULT_CONFIG_FILE))
  }

  /// Load configuration from a specific JSON file.
  ///
  /// A missing file yields the defaults; a file that cannot be read or parsed is an error.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let config_error = |source: ConfigSourceError| Base64izeError::Config {
      path: path.to_path_buf(),
      source,
    };

    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
      Err(err) => return Err(config_error(err.into())),
    };
    serde_json::from_str(&contents).map_err(|err| config_error(err.into()))
  }

  /// Corpus directory resolved against `base`.
  pub fn corpus_path(&self, base: &Path) -> PathBuf {
    base.join(&self.corpus_dir)
  }

  /// Export destination resolved against `base`.
  pub fn export_path(&self, base: &Path) -> PathBuf {
    base.join(&self.export_file)
  }

  /// Export options described by this configuration.
  pub fn export_options(&self) -> ExportOptions {
    ExportOptions {
      ignore_variants: !self.include_variants,
      sort: self.sort_export,
      failure_policy: self.failure_policy,
    }
  }
}

/// Settings for a conversion run, validated once when built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSettings {
  /// Strip `<text>` stroke numbers before encoding.
  pub remove_numbers: bool,
  /// Variant to try first; empty means the base rendering only.
  pub preferred_variant: String,
  /// Character requested for single-item conversion.
  pub character: Option<char>,
}

impl ConversionSettings {
  /// Validate raw settings.
  ///
  /// `character`, when given, must be exactly one code point, otherwise
  /// [`Base64izeError::InvalidCharacter`] is returned. The same error is returned for a
  /// preferred variant containing a path separator.
  pub fn new(
    remove_numbers: bool,
    preferred_variant: Option<String>,
    character: Option<&str>,
  ) -> Result<Self> {
    let preferred_variant = preferred_variant.unwrap_or_default();
    validate_variant(character.unwrap_or_default(), &preferred_variant)?;
    let character = character
      .map(|value| AssetKey::from_input(value, Some(preferred_variant.as_str())))
      .transpose()?
      .map(|key| key.character());

    Ok(Self {
      remove_numbers,
      preferred_variant,
      character,
    })
  }
}

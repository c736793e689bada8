//! Textual SVG transforms applied before encoding.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn svg_element_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?s)<svg\b.*</svg>").expect("invalid svg element regex"))
}

fn text_element_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?s)<text\b.*?</text>").expect("invalid text element regex"))
}

/// Return the `<svg>...</svg>` element of a raw document, dropping the XML prolog,
/// doctype and anything else around it.
///
/// The match starts at the first `<svg` tag and runs to the last `</svg>`, so nested
/// `<svg>` elements stay intact. Returns `None` when the document has no root element.
pub fn extract_svg_fragment(document: &str) -> Option<&str> {
  svg_element_pattern().find(document).map(|m| m.as_str())
}

/// Remove every `<text>...</text>` element, which in the corpus only carries stroke numbers.
///
/// Each element is removed from its opening tag to the nearest closing tag. All other
/// markup is left untouched.
pub fn remove_stroke_numbers(fragment: &str) -> Cow<'_, str> {
  text_element_pattern().replace_all(fragment, "")
}

#[cfg(test)]
mod tests {
  use super::*;

  const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.0//EN" "http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd" [
<!ATTLIST g
xmlns:kvg CDATA #FIXED "http://kanjivg.tagaini.net"
kvg:element CDATA #IMPLIED >
]>
<!-- Copyright (C) 2009/2010/2011 Ulrich Apel. -->
<svg xmlns="http://www.w3.org/2000/svg" width="109" height="109" viewBox="0 0 109 109">
<g id="kvg:StrokePaths_00061" style="fill:none;stroke:#000000;stroke-width:3;">
	<path id="kvg:00061-s1" d="M46.75,37.25c3.5-2.25,22.5-5,25.5,1"/>
</g>
<g id="kvg:StrokeNumbers_00061" style="font-size:8;fill:#808080">
	<text transform="matrix(1 0 0 1 38.50 36.50)">1</text>
	<text transform="matrix(1 0 0 1 60.50 60.50)">2</text>
</g>
</svg>
"#;

  #[test]
  fn extracts_svg_element_without_prolog() {
    let fragment = extract_svg_fragment(DOCUMENT).unwrap();
    assert!(fragment.starts_with("<svg xmlns="));
    assert!(fragment.ends_with("</svg>"));
    assert!(!fragment.contains("<?xml"));
    assert!(!fragment.contains("Copyright"));
  }

  #[test]
  fn extraction_spans_multiple_lines() {
    let fragment = extract_svg_fragment("junk<svg>\n<g/>\n</svg>\ntrailer").unwrap();
    assert_eq!(fragment, "<svg>\n<g/>\n</svg>");
  }

  #[test]
  fn keeps_nested_svg_elements() {
    let document = "<svg><svg id=\"inner\"></svg><path/></svg>";
    assert_eq!(extract_svg_fragment(document), Some(document));
  }

  #[test]
  fn documents_without_svg_root_yield_nothing() {
    assert_eq!(extract_svg_fragment("<html></html>"), None);
    assert_eq!(extract_svg_fragment("<svg unterminated"), None);
    assert_eq!(extract_svg_fragment("<svgfont></svg>"), None);
  }

  #[test]
  fn strips_every_text_element() {
    let stripped = remove_stroke_numbers("<svg><g><text>1</text><text>2</text></g></svg>");
    assert_eq!(stripped, "<svg><g></g></svg>");
  }

  #[test]
  fn strips_text_elements_with_attributes_only() {
    let fragment = extract_svg_fragment(DOCUMENT).unwrap();
    let stripped = remove_stroke_numbers(fragment);
    assert!(!stripped.contains("<text"));
    assert!(stripped.contains(r#"<path id="kvg:00061-s1""#));
    assert!(stripped.contains(r#"<g id="kvg:StrokeNumbers_00061""#));
  }

  #[test]
  fn leaves_fragments_without_numbers_unchanged() {
    let fragment = "<svg><path d=\"M0,0\"/></svg>";
    assert!(matches!(remove_stroke_numbers(fragment), Cow::Borrowed(_)));
  }
}

//! CSV output for bulk exports.

use std::io::{self, Write};

use serde::Deserialize;

use crate::models::AssetKey;

/// Byte-order mark written at the start of every export.
pub const UTF8_BOM: &str = "\u{feff}";

/// What to do when one entry fails during a bulk export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
  /// Stop at the first failure. Rows written so far stay in the truncated file.
  #[default]
  Abort,
  /// Log the failure, leave the row out and carry on.
  Skip,
}

/// Options controlling which entries an export covers and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
  /// Export only base entries, leaving out every variant.
  pub ignore_variants: bool,
  /// Sort keys by code point then variant instead of keeping the store order.
  pub sort: bool,
  /// Behaviour when a single entry fails.
  pub failure_policy: FailurePolicy,
}

impl Default for ExportOptions {
  fn default() -> Self {
    Self {
      ignore_variants: true,
      sort: true,
      failure_policy: FailurePolicy::Abort,
    }
  }
}

/// Summary of a finished export.
#[derive(Debug, Default)]
pub struct ExportReport {
  /// Number of data rows written.
  pub rows: usize,
  /// Entries left out under [`FailurePolicy::Skip`], with the rendered failure.
  pub skipped: Vec<(AssetKey, String)>,
}

/// Writes `(glyph, base64)` rows in comma separated form.
pub struct CsvWriter<W: Write> {
  inner: W,
}

impl<W: Write> CsvWriter<W> {
  /// Start an export on `inner`, writing the byte-order mark immediately.
  pub fn new(mut inner: W) -> io::Result<Self> {
    inner.write_all(UTF8_BOM.as_bytes())?;
    Ok(Self { inner })
  }

  /// Append one row.
  pub fn write_row(&mut self, character: char, encoded: &str) -> io::Result<()> {
    let mut glyph = [0; 4];
    let glyph = character.encode_utf8(&mut glyph);
    write_field(&mut self.inner, glyph)?;
    self.inner.write_all(b",")?;
    write_field(&mut self.inner, encoded)?;
    self.inner.write_all(b"\r\n")
  }

  /// Flush buffered rows and hand back the underlying writer.
  pub fn finish(mut self) -> io::Result<W> {
    self.inner.flush()?;
    Ok(self.inner)
  }
}

fn write_field<W: Write>(out: &mut W, field: &str) -> io::Result<()> {
  if field.contains([',', '"', '\r', '\n']) {
    write!(out, "\"{}\"", field.replace('"', "\"\""))
  } else {
    out.write_all(field.as_bytes())
  }
}

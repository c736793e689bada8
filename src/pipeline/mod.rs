//! Conversion of corpus assets into Base64 SVG text.
//!
//! Each conversion extracts the `<svg>` element from the stored document, optionally
//! strips the stroke numbers and encodes the result. [`ConversionPipeline`] drives this
//! for single characters and for whole-corpus CSV exports.

mod encode;
mod svg;

pub use encode::encode_base64;
pub use svg::{extract_svg_fragment, remove_stroke_numbers};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::ConversionSettings;
use crate::error::{Base64izeError, Result};
use crate::export::{CsvWriter, ExportOptions, ExportReport, FailurePolicy};
use crate::models::{Asset, AssetKey};
use crate::resolver::AssetResolver;
use crate::store::AssetStore;

/// Convert an already loaded asset.
pub fn convert_asset(asset: &Asset, remove_numbers: bool) -> Result<String> {
  let fragment =
    extract_svg_fragment(asset.svg()).ok_or_else(|| Base64izeError::MissingSvg {
      name: asset.key().ascii_name(),
    })?;

  if remove_numbers {
    Ok(encode_base64(&remove_stroke_numbers(fragment)))
  } else {
    Ok(encode_base64(fragment))
  }
}

/// Resolver plus validated settings, ready to convert characters.
#[derive(Debug, Clone)]
pub struct ConversionPipeline<S> {
  resolver: AssetResolver<S>,
  settings: ConversionSettings,
}

impl<S: AssetStore> ConversionPipeline<S> {
  /// Build a pipeline around `resolver`.
  pub fn new(resolver: AssetResolver<S>, settings: ConversionSettings) -> Self {
    Self { resolver, settings }
  }

  /// Settings the pipeline was built with.
  pub fn settings(&self) -> &ConversionSettings {
    &self.settings
  }

  /// Borrow the underlying resolver.
  pub fn resolver(&self) -> &AssetResolver<S> {
    &self.resolver
  }

  /// Resolve `character` in `variant` and return its Base64 SVG.
  ///
  /// Missing characters and assets without an `<svg>` element are returned as errors.
  pub fn convert_one(&self, character: char, variant: &str, remove_numbers: bool) -> Result<String> {
    let asset = self.resolver.resolve(character, Some(variant))?;
    convert_asset(&asset, remove_numbers)
  }

  /// Convert `character` using the configured settings.
  ///
  /// The preferred variant is tried first. If the corpus has no such variant the base
  /// rendering is used instead; any other failure is returned immediately. The key that
  /// was actually converted is returned with the encoding.
  pub fn convert_character(&self, character: char) -> Result<(AssetKey, String)> {
    let remove_numbers = self.settings.remove_numbers;
    let preferred = self.settings.preferred_variant.as_str();

    if !preferred.is_empty() {
      match self.resolver.resolve(character, Some(preferred)) {
        Ok(asset) => {
          let encoded = convert_asset(&asset, remove_numbers)?;
          return Ok((asset.into_parts().0, encoded));
        }
        Err(err) if err.is_invalid_character() => {
          debug!(%character, variant = preferred, "preferred variant missing, using base entry");
        }
        Err(err) => return Err(err),
      }
    }

    let asset = self.resolver.resolve(character, None)?;
    let encoded = convert_asset(&asset, remove_numbers)?;
    Ok((asset.into_parts().0, encoded))
  }

  /// Convert the character named in the settings.
  pub fn convert_requested(&self) -> Result<(AssetKey, String)> {
    let character = self.settings.character.ok_or(Base64izeError::MissingCharacter)?;
    self.convert_character(character)
  }

  /// Export every corpus entry to a CSV file at `path`, replacing any previous export.
  ///
  /// The destination is truncated before the first entry is converted, so an aborted
  /// run leaves only the rows written before the failure.
  pub fn export_all(&self, path: &Path, options: &ExportOptions) -> Result<ExportReport> {
    let export_error = |source| Base64izeError::Export {
      path: path.to_path_buf(),
      source,
    };

    info!(path = %path.display(), "exporting corpus");
    let file = File::create(path).map_err(export_error)?;
    let (report, _) = self.export_to_writer(BufWriter::new(file), options, path)?;
    info!(
      path = %path.display(),
      rows = report.rows,
      skipped = report.skipped.len(),
      "export finished"
    );
    Ok(report)
  }

  /// Export every corpus entry as CSV rows into `writer`.
  ///
  /// `destination` only labels write failures. Returns the report together with the
  /// flushed writer.
  pub fn export_to_writer<W: Write>(
    &self,
    writer: W,
    options: &ExportOptions,
    destination: &Path,
  ) -> Result<(ExportReport, W)> {
    let export_error = |source| Base64izeError::Export {
      path: destination.to_path_buf(),
      source,
    };

    let mut keys = self.resolver.enumerate_keys(options.ignore_variants)?;
    if options.sort {
      keys.sort();
    }

    let mut csv = CsvWriter::new(writer).map_err(export_error)?;
    let mut report = ExportReport::default();

    for key in keys {
      let converted = self
        .resolver
        .resolve_key(key.clone())
        .and_then(|asset| convert_asset(&asset, self.settings.remove_numbers));

      match converted {
        Ok(encoded) => {
          csv
            .write_row(key.character(), &encoded)
            .map_err(export_error)?;
          report.rows += 1;
          debug!(%key, "exported row");
        }
        Err(err) if options.failure_policy == FailurePolicy::Skip => {
          warn!(%key, error = %err, "skipping corpus entry");
          report.skipped.push((key, err.to_string()));
        }
        Err(err) => return Err(err),
      }
    }

    let writer = csv.finish().map_err(export_error)?;
    Ok((report, writer))
  }
}

//! Error type shared by the resolver, the conversion pipeline and the export writer.

use std::io;
use std::path::PathBuf;

/// Errors raised while resolving, converting or exporting corpus assets.
#[derive(Debug, thiserror::Error)]
pub enum Base64izeError {
  /// The requested character/variant pair has no backing asset, or the character
  /// is not a single code point.
  #[error("no stroke data for character {character:?} (variant {variant:?})")]
  InvalidCharacter {
    /// Character exactly as it was requested.
    character: String,
    /// Requested variant, empty when none was given.
    variant: String,
  },

  /// The asset loaded for a key does not contain an `<svg>` element.
  #[error("asset {name} does not contain an <svg> element")]
  MissingSvg {
    /// Corpus filename of the offending asset.
    name: String,
  },

  /// A corpus filename could not be decoded back into a character and variant.
  #[error("cannot derive a character from corpus filename {name:?}")]
  InvalidFilename {
    /// Filename that failed to parse.
    name: String,
  },

  /// The backing store failed for a reason other than a missing asset.
  #[error("failed to read {name} from the corpus: {source}")]
  Storage {
    /// Asset name or corpus location being accessed.
    name: String,
    /// Underlying I/O failure.
    #[source]
    source: io::Error,
  },

  /// Writing the bulk export failed.
  #[error("failed to write export {}: {source}", path.display())]
  Export {
    /// Destination file of the export.
    path: PathBuf,
    /// Underlying I/O failure.
    #[source]
    source: io::Error,
  },

  /// The project configuration file exists but could not be used.
  #[error("failed to load configuration {}: {source}", path.display())]
  Config {
    /// Configuration file path.
    path: PathBuf,
    /// Read or parse failure.
    #[source]
    source: ConfigSourceError,
  },

  /// Single-item conversion was requested without a character.
  #[error("no character was requested")]
  MissingCharacter,
}

/// Underlying cause of a [`Base64izeError::Config`] failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigSourceError {
  /// The file could not be read.
  #[error(transparent)]
  Io(#[from] io::Error),
  /// The file is not valid configuration JSON.
  #[error(transparent)]
  Parse(#[from] serde_json::Error),
}

impl Base64izeError {
  /// Build an [`Base64izeError::InvalidCharacter`] from borrowed parts.
  pub fn invalid_character(character: impl Into<String>, variant: impl Into<String>) -> Self {
    Self::InvalidCharacter {
      character: character.into(),
      variant: variant.into(),
    }
  }

  /// Returns `true` when the error means "no such character/variant in the corpus".
  pub fn is_invalid_character(&self) -> bool {
    matches!(self, Self::InvalidCharacter { .. })
  }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Base64izeError>;

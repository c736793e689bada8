//! Corpus stored as a flat directory of SVG files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Base64izeError, Result};
use crate::store::{AssetStore, Lookup};

/// Filesystem corpus rooted at a directory such as `kanjivg/kanji`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
  root: PathBuf,
}

impl DirectoryStore {
  /// Serve assets from the files directly inside `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Directory the store reads from.
  pub fn root(&self) -> &Path {
    &self.root
  }
}

impl AssetStore for DirectoryStore {
  fn fetch(&self, name: &str) -> Result<Lookup> {
    if name.contains(['/', '\\']) {
      return Ok(Lookup::NotFound);
    }
    let path = self.root.join(name);
    match fs::read_to_string(&path) {
      Ok(text) => Ok(Lookup::Found(text)),
      Err(err) if err.kind() == ErrorKind::NotFound => Ok(Lookup::NotFound),
      Err(err) => Err(Base64izeError::Storage {
        name: path.display().to_string(),
        source: err,
      }),
    }
  }

  fn list(&self) -> Result<Vec<String>> {
    let storage_error = |source| Base64izeError::Storage {
      name: self.root.display().to_string(),
      source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(&self.root).map_err(storage_error)? {
      let entry = entry.map_err(storage_error)?;
      let file_name = entry.file_name();

      // Follows symlinks so linked corpus files are listed like regular ones.
      match fs::metadata(entry.path()) {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => continue,
        Err(err) if err.kind() == ErrorKind::NotFound => {
          warn!(name = %file_name.to_string_lossy(), "skipping dangling corpus link");
          continue;
        }
        Err(err) => return Err(storage_error(err)),
      }

      let Some(name) = file_name.to_str() else {
        warn!(name = %file_name.to_string_lossy(), "skipping non UTF-8 corpus filename");
        continue;
      };
      if name.starts_with('.') {
        continue;
      }
      names.push(name.to_string());
    }

    Ok(names)
  }
}

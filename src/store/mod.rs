//! Backing stores holding the stroke-order corpus.
//!
//! A store is a read-only key-value collection keyed by corpus filename. Lookups
//! report a missing asset as [`Lookup::NotFound`] so callers never have to inspect
//! I/O error kinds; every other failure is an error.

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Outcome of fetching a single asset by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
  /// The asset exists; holds its full document text.
  Found(String),
  /// No asset is stored under the requested name.
  NotFound,
}

impl Lookup {
  /// Convert into an `Option`, discarding the distinction from errors.
  pub fn into_option(self) -> Option<String> {
    match self {
      Self::Found(text) => Some(text),
      Self::NotFound => None,
    }
  }
}

/// Read-only corpus of SVG documents keyed by filename.
pub trait AssetStore {
  /// Fetch the document stored under exactly `name`.
  ///
  /// Returns `Ok(Lookup::NotFound)` when the name is absent and `Err` for any other
  /// storage failure.
  fn fetch(&self, name: &str) -> Result<Lookup>;

  /// List every filename in the store. Order is implementation defined.
  fn list(&self) -> Result<Vec<String>>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
  fn fetch(&self, name: &str) -> Result<Lookup> {
    (**self).fetch(name)
  }

  fn list(&self) -> Result<Vec<String>> {
    (**self).list()
  }
}

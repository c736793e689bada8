//! In-memory corpus for fixtures and embedding.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::store::{AssetStore, Lookup};

/// Corpus held entirely in memory. Listing returns names in sorted order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  assets: BTreeMap<String, String>,
}

impl MemoryStore {
  /// Create an empty store.
  pub fn new() -> Self {
    Self::default()
  }

  /// Add or replace the document stored under `name`.
  pub fn insert(&mut self, name: impl Into<String>, svg: impl Into<String>) -> &mut Self {
    self.assets.insert(name.into(), svg.into());
    self
  }

  /// Number of stored documents.
  pub fn len(&self) -> usize {
    self.assets.len()
  }

  /// Returns `true` if the store holds no documents.
  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }
}

impl<N, S> FromIterator<(N, S)> for MemoryStore
where
  N: Into<String>,
  S: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
    Self {
      assets: iter
        .into_iter()
        .map(|(name, svg)| (name.into(), svg.into()))
        .collect(),
    }
  }
}

impl AssetStore for MemoryStore {
  fn fetch(&self, name: &str) -> Result<Lookup> {
    Ok(match self.assets.get(name) {
      Some(svg) => Lookup::Found(svg.clone()),
      None => Lookup::NotFound,
    })
  }

  fn list(&self) -> Result<Vec<String>> {
    Ok(self.assets.keys().cloned().collect())
  }
}

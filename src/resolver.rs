//! Resolve characters to corpus assets and enumerate the corpus.

use tracing::{debug, warn};

use crate::error::{Base64izeError, Result};
use crate::models::{Asset, AssetKey};
use crate::store::{AssetStore, Lookup};

/// Looks up stroke-order assets in a backing store.
///
/// Every resolution reads the store again; nothing is cached.
#[derive(Debug, Clone)]
pub struct AssetResolver<S> {
  store: S,
}

impl<S: AssetStore> AssetResolver<S> {
  /// Create a resolver reading from `store`.
  pub fn new(store: S) -> Self {
    Self { store }
  }

  /// Borrow the backing store.
  pub fn store(&self) -> &S {
    &self.store
  }

  /// Load the asset for `character`, optionally in a named `variant`.
  ///
  /// `None` and `Some("")` both request the base rendering.
  pub fn resolve(&self, character: char, variant: Option<&str>) -> Result<Asset> {
    self.resolve_key(AssetKey::new(character, variant.unwrap_or_default()))
  }

  /// Load the asset for an already constructed key.
  ///
  /// Fails with [`Base64izeError::InvalidCharacter`] when the store has no file under
  /// the key's ASCII name. Other storage failures are returned as they are.
  pub fn resolve_key(&self, key: AssetKey) -> Result<Asset> {
    let name = key.ascii_name();
    match self.store.fetch(&name)? {
      Lookup::Found(svg) => {
        debug!(%name, bytes = svg.len(), "resolved corpus asset");
        Ok(Asset::new(key, svg))
      }
      Lookup::NotFound => Err(Base64izeError::invalid_character(
        key.character().to_string(),
        key.variant(),
      )),
    }
  }

  /// Decode a key for every filename in the store.
  ///
  /// With `ignore_variants` set, any filename containing `-` is skipped so only base
  /// entries remain. Keys keep the store's listing order and are not deduplicated.
  /// Names that are not corpus filenames are skipped with a warning.
  pub fn enumerate_keys(&self, ignore_variants: bool) -> Result<Vec<AssetKey>> {
    let mut keys = Vec::new();
    for name in self.store.list()? {
      if ignore_variants && name.contains('-') {
        continue;
      }
      match AssetKey::parse_filename(&name) {
        Ok(key) => keys.push(key),
        Err(err) => warn!(%name, error = %err, "skipping unrecognised corpus file"),
      }
    }
    Ok(keys)
  }

  /// Load every asset in the store, following [`AssetResolver::enumerate_keys`].
  pub fn enumerate_all(&self, ignore_variants: bool) -> Result<Vec<Asset>> {
    self
      .enumerate_keys(ignore_variants)?
      .into_iter()
      .map(|key| self.resolve_key(key))
      .collect()
  }
}

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod resolver;
pub mod store;

pub use config::{ConversionSettings, ProjectConfig};
pub use error::{Base64izeError, Result};
pub use export::{ExportOptions, ExportReport, FailurePolicy};
pub use models::{Asset, AssetKey};
pub use pipeline::ConversionPipeline;
pub use resolver::AssetResolver;
pub use store::{AssetStore, DirectoryStore, Lookup, MemoryStore};

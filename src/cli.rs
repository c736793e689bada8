use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Debug, Parser)]
#[command(
  name = "kanji-base64izer",
  about = "Output a Base64 encoding of KanjiVG stroke-order SVGs",
  version
)]
#[command(group(ArgGroup::new("mode").required(true).args(["character", "export"])))]
pub struct Cli {
  /// Character to convert
  #[arg(long)]
  pub character: Option<String>,

  /// Export every base character in the corpus to a CSV file
  #[arg(long, value_name = "PATH", num_args = 0..=1)]
  pub export: Option<Option<PathBuf>>,

  /// Remove the stroke numbers from the SVG element
  #[arg(long, overrides_with = "keep_numbers")]
  pub remove_numbers: bool,

  /// Keep the stroke numbers even when the configuration removes them
  #[arg(long, overrides_with = "remove_numbers")]
  pub keep_numbers: bool,

  /// If there is a variant of the requested character, pick that instead
  #[arg(long, value_name = "VARIANT")]
  pub preferred_variant: Option<String>,

  /// Include variant entries in the export
  #[arg(long, requires = "export")]
  pub include_variants: bool,

  /// Skip entries that fail to convert instead of aborting the export
  #[arg(long, requires = "export")]
  pub skip_failures: bool,

  /// Print the character filename alongside the encoding
  #[arg(long, requires = "character")]
  pub display_name: bool,

  /// Directory holding the KanjiVG SVG files
  #[arg(long, value_name = "DIR")]
  pub corpus: Option<PathBuf>,

  /// Configuration file to use instead of kanjibase64.config.json
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Log progress to stderr
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Whether to strip stroke numbers, given the configured default.
  pub fn strip_numbers(&self, configured: bool) -> bool {
    if self.keep_numbers {
      false
    } else {
      self.remove_numbers || configured
    }
  }
}

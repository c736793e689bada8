use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kanji_base64izer::{
  AssetResolver, ConversionPipeline, ConversionSettings, DirectoryStore, FailurePolicy,
  ProjectConfig,
};

mod cli;

fn main() -> Result<()> {
  let cli = cli::Cli::parse();
  init_logging(cli.verbose);
  run(cli)
}

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn run(cli: cli::Cli) -> Result<()> {
  let cwd = env::current_dir().context("failed to determine the working directory")?;
  let config = match &cli.config {
    Some(path) => ProjectConfig::load_from_path(path)?,
    None => ProjectConfig::discover(&cwd)?,
  };

  let preferred_variant = cli
    .preferred_variant
    .clone()
    .or_else(|| Some(config.preferred_variant.clone()));
  let settings = ConversionSettings::new(
    cli.strip_numbers(config.remove_numbers),
    preferred_variant,
    cli.character.as_deref(),
  )?;

  let corpus = cli
    .corpus
    .clone()
    .unwrap_or_else(|| config.corpus_path(&cwd));
  let resolver = AssetResolver::new(DirectoryStore::new(corpus));
  let pipeline = ConversionPipeline::new(resolver, settings);

  if let Some(destination) = &cli.export {
    let path = destination
      .clone()
      .unwrap_or_else(|| config.export_path(&cwd));
    let mut options = config.export_options();
    options.ignore_variants &= !cli.include_variants;
    if cli.skip_failures {
      options.failure_policy = FailurePolicy::Skip;
    }

    let report = pipeline
      .export_all(&path, &options)
      .with_context(|| format!("export to {} failed", path.display()))?;
    for (key, reason) in &report.skipped {
      eprintln!("skipped {key}: {reason}");
    }
    eprintln!("wrote {} rows to {}", report.rows, path.display());
    return Ok(());
  }

  let (key, encoded) = pipeline.convert_requested()?;
  let mut stdout = io::stdout().lock();
  if cli.display_name {
    writeln!(stdout, "{}\t{encoded}", key.display_name())?;
  } else {
    writeln!(stdout, "{encoded}")?;
  }
  Ok(())
}

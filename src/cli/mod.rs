// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates everything else to Layer 2.
//
// Two commands are supported:
//   1. `split`   — load a corpus and print partition sizes
//   2. `batches` — walk one partition and print each batch
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BatchesArgs, Commands, CorpusArgs, SplitArgs};

use crate::application::split_use_case::{LoaderConfig, SplitUseCase};
use crate::domain::partition::PartitionName;
use crate::infra::config_store::{load_config_file, ConfigStore};

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "corpus-split",
    version,
    about = "Clean a text corpus, split it into train/validation/test and serve batches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching handler. Only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args)   => run_split(args),
            Commands::Batches(args) => run_batches(args),
        }
    }
}

/// Use --config when given, otherwise the flags
fn resolve_config(corpus: &CorpusArgs, from_flags: LoaderConfig) -> Result<LoaderConfig> {
    match &corpus.config {
        Some(path) => {
            tracing::info!("Using loader config from '{}'", path);
            load_config_file(path)
        }
        None => Ok(from_flags),
    }
}

/// Handles the `split` subcommand.
fn run_split(args: SplitArgs) -> Result<()> {
    let cfg = resolve_config(&args.corpus, LoaderConfig::from(&args))?;
    let use_case = SplitUseCase::new(cfg);
    let summary = use_case.execute()?;

    println!("Lines read:    {}", summary.lines_read);
    println!("Lines dropped: {}", summary.lines_dropped);
    println!("Train:         {}", summary.train);
    println!("Validation:    {}", summary.validation);
    println!("Test:          {}", summary.test);

    if let Some(dir) = &args.save_config {
        let path = ConfigStore::new(dir).save(use_case.config())?;
        println!("Config saved to {}", path.display());
    }
    Ok(())
}

/// Handles the `batches` subcommand.
/// Each batch goes to stdout as one JSON object per line.
fn run_batches(args: BatchesArgs) -> Result<()> {
    let partition: PartitionName = args.partition.parse()?;

    let mut cfg = resolve_config(&args.corpus, LoaderConfig::from(&args))?;
    // Batch size always comes from the command line
    cfg.batch_size = args.batch_size;

    let served = SplitUseCase::new(cfg).for_each_batch(partition, args.epochs, |epoch, batch| {
        let json = serde_json::to_string(batch)?;
        println!("{{\"epoch\":{epoch},\"count\":{},\"batch\":{json}}}", batch.count());
        Ok(())
    })?;

    tracing::info!("Served {} batches from '{}'", served, partition);
    Ok(())
}

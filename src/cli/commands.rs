// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `split` and `batches`
// and all their configurable flags.
//
// Both share the same corpus flags (CorpusArgs). Passing
// --config loads a saved LoaderConfig instead of using them.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::split_use_case::LoaderConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a corpus and print train/validation/test sizes
    Split(SplitArgs),

    /// Print every batch of one partition as JSON lines
    Batches(BatchesArgs),
}

/// Flags describing the corpus and how to split it.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Text file, or directory of text files, to load
    #[arg(long, default_value = "data")]
    pub source: String,

    /// Extension of the files to read when --source is a directory
    #[arg(long, default_value = "txt")]
    pub extension: String,

    /// Fraction of lines for the training partition
    #[arg(long, default_value_t = 0.8)]
    pub train: f64,

    /// Fraction of lines for the validation partition
    #[arg(long, default_value_t = 0.1)]
    pub val: f64,

    /// Fraction of lines for the test partition
    #[arg(long, default_value_t = 0.1)]
    pub test: f64,

    /// Keep the file order instead of shuffling before the split
    #[arg(long)]
    pub no_shuffle: bool,

    /// Seed for the shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Do not lowercase lines while cleaning
    #[arg(long)]
    pub keep_case: bool,

    /// Read all of the above from a saved loader_config.json instead
    #[arg(long)]
    pub config: Option<String>,
}

impl CorpusArgs {
    /// Build a LoaderConfig from flags, with the given batch size
    pub fn to_config(&self, batch_size: usize) -> LoaderConfig {
        LoaderConfig {
            source:      self.source.clone(),
            extension:   self.extension.clone(),
            train_ratio: self.train,
            val_ratio:   self.val,
            test_ratio:  self.test,
            shuffle:     !self.no_shuffle,
            seed:        self.seed,
            lowercase:   !self.keep_case,
            batch_size,
        }
    }
}

/// All arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Directory to save the effective loader_config.json into
    #[arg(long)]
    pub save_config: Option<String>,
}

/// All arguments for the `batches` command
#[derive(Args, Debug)]
pub struct BatchesArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Partition to walk: train, val (validation) or test
    #[arg(long, default_value = "train")]
    pub partition: String,

    /// Maximum number of lines per batch
    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    /// Number of full passes over the partition
    #[arg(long, default_value_t = 1)]
    pub epochs: usize,
}

/// Convert CLI SplitArgs into the application-layer LoaderConfig.
/// The application layer never sees clap types.
impl From<&SplitArgs> for LoaderConfig {
    fn from(a: &SplitArgs) -> Self {
        a.corpus.to_config(LoaderConfig::default().batch_size)
    }
}

impl From<&BatchesArgs> for LoaderConfig {
    fn from(a: &BatchesArgs) -> Self {
        a.corpus.to_config(a.batch_size)
    }
}

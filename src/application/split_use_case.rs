// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Builds a file-backed DataLoader from a LoaderConfig and runs
// the pipeline:
//
//   Step 1: Validate the configured ratios
//   Step 2: Build source, cleaner and splitter    (Layer 4 - data)
//   Step 3: Load, clean and split the corpus      (Layer 4 - data)
//   Step 4: Report sizes, or walk one partition
//           batch by batch for the requested epochs
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    cleaner::BasicLineCleaner,
    loader::{FileDataLoader, LoadStats},
    source::{FileRecordSource, DEFAULT_EXTENSION},
    splitter::{RatioSplitter, DEFAULT_SEED},
};
use crate::domain::{batch::Batch, partition::PartitionName, ratios::SplitRatios};

// ─── Loader Configuration ────────────────────────────────────────────────────
// Everything needed to reproduce a split.
// Serialisable so it can be saved next to a run and reloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub source:      String,
    pub extension:   String,
    pub train_ratio: f64,
    pub val_ratio:   f64,
    pub test_ratio:  f64,
    pub shuffle:     bool,
    pub seed:        u64,
    pub lowercase:   bool,
    pub batch_size:  usize,
}

impl LoaderConfig {
    /// The configured ratios, validated
    pub fn ratios(&self) -> crate::error::Result<SplitRatios> {
        SplitRatios::new(self.train_ratio, self.val_ratio, self.test_ratio)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        let ratios = SplitRatios::default();
        Self {
            source:      "data".to_string(),
            extension:   DEFAULT_EXTENSION.to_string(),
            train_ratio: ratios.train(),
            val_ratio:   ratios.validation(),
            test_ratio:  ratios.test(),
            shuffle:     true,
            seed:        DEFAULT_SEED,
            lowercase:   true,
            batch_size:  32,
        }
    }
}

/// Partition sizes and read counts of one load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub lines_read:    usize,
    pub lines_dropped: usize,
    pub train:         usize,
    pub validation:    usize,
    pub test:          usize,
}

impl SplitSummary {
    fn from_loader(loader: &FileDataLoader, stats: LoadStats) -> Self {
        Self {
            lines_read:    stats.lines_read,
            lines_dropped: stats.lines_dropped,
            train:         loader.train_size(),
            validation:    loader.validation_size(),
            test:          loader.test_size(),
        }
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: LoaderConfig,
}

impl SplitUseCase {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Wire up a loader for the configured source
    pub fn build_loader(&self) -> FileDataLoader {
        let cfg = &self.config;

        FileDataLoader::new()
            .with_data_source(FileRecordSource::with_extension(&cfg.extension), &cfg.source)
            .with_data_cleaner(BasicLineCleaner::with_lowercase(cfg.lowercase))
            .with_data_splitter(RatioSplitter::new(cfg.seed).with_shuffle(cfg.shuffle))
    }

    /// Build a loader and load the corpus into it
    pub fn load(&self) -> Result<(FileDataLoader, SplitSummary)> {
        let cfg = &self.config;

        // ── Step 1: Validate ratios before touching the disk ─────────────────
        let ratios = cfg.ratios()?;

        // ── Steps 2-3: Build and load ────────────────────────────────────────
        let mut loader = self.build_loader();
        let stats = loader
            .load_data(ratios.train(), ratios.validation(), ratios.test())
            .with_context(|| format!("Failed to load corpus from '{}'", cfg.source))?;

        let summary = SplitSummary::from_loader(&loader, stats);
        Ok((loader, summary))
    }

    /// Load the corpus and report partition sizes
    pub fn execute(&self) -> Result<SplitSummary> {
        let (_, summary) = self.load()?;
        Ok(summary)
    }

    /// Load the corpus, then hand every batch of `partition` to
    /// `on_batch`, once per epoch. The cursor is reset between
    /// epochs so each epoch replays the same order.
    ///
    /// Returns the number of batches served.
    pub fn for_each_batch<F>(
        &self,
        partition: PartitionName,
        epochs: usize,
        mut on_batch: F,
    ) -> Result<usize>
    where
        F: FnMut(usize, &Batch) -> Result<()>,
    {
        let batch_size = self.config.batch_size;
        anyhow::ensure!(batch_size > 0, "batch_size must be at least 1");

        let (mut loader, _) = self.load()?;
        let mut served = 0usize;

        for epoch in 1..=epochs {
            loader.reset_partition_cursor(partition.as_str())?;

            while let Some(batch) = loader.next_batch(partition, batch_size) {
                on_batch(epoch, &batch)?;
                served += 1;
            }

            tracing::debug!("Epoch {} of '{}' done", epoch, partition);
        }

        Ok(served)
    }
}

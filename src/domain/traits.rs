// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The loader is generic over three roles. Each trait carries
// exactly the operations the loader needs from that role:
//
//   RecordSource      → sequential raw lines, possibly across files
//   LineCleaner       → one raw line in, one cleaned line out
//   PartitionSplitter → one ordered corpus in, three partitions out
//
// Implementations in this crate:
//   - FileRecordSource  (data/source.rs)
//   - BasicLineCleaner  (data/cleaner.rs)
//   - RatioSplitter     (data/splitter.rs)
//
// A database- or network-backed source only has to implement
// RecordSource; DataLoader does not change.

use crate::domain::ratios::SplitRatios;
use crate::error::Result;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// A forward-only stream of raw lines.
///
/// State machine:
///   Closed → open() → Reading(file 0) → ... → Reading(file k) → Exhausted
///   reset() from any opened state goes back to Reading(file 0)
///   close() from any state goes to Closed
pub trait RecordSource {
    /// Resolve `identifier` and acquire a handle on its first input.
    fn open(&mut self, identifier: &str) -> Result<()>;

    /// Next raw line, or `Ok(None)` once every input is exhausted.
    fn read_next(&mut self) -> Result<Option<String>>;

    /// Discard progress and start again from the first input.
    fn reset(&mut self) -> Result<()>;

    /// Release any open handle. Calling it twice is harmless.
    fn close(&mut self);
}

// ─── LineCleaner ──────────────────────────────────────────────────────────────
/// Stateless per-line normalisation.
///
/// Returning an empty string means "drop this line".
pub trait LineCleaner {
    fn clean_line(&self, raw: &str) -> String;
}

// ─── PartitionSplitter ────────────────────────────────────────────────────────
/// The three ordered, disjoint slices produced by a split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOutput {
    pub train: Vec<String>,
    pub validation: Vec<String>,
    pub test: Vec<String>,
}

impl SplitOutput {
    /// Total number of lines across all three slices
    pub fn total(&self) -> usize {
        self.train.len() + self.validation.len() + self.test.len()
    }
}

/// Divides a cleaned corpus into train/validation/test.
///
/// Takes `&mut self` because a shuffling splitter advances its
/// own random generator on every call.
pub trait PartitionSplitter {
    fn split(&mut self, lines: Vec<String>, ratios: SplitRatios) -> Result<SplitOutput>;
}

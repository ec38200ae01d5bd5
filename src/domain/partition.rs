// ============================================================
// Layer 3 — Partitions and Cursors
// ============================================================
// A loaded corpus is divided into three named partitions.
// Each partition is an ordered list of cleaned lines that never
// changes after load, plus a cursor marking the next unread line.
//
// Cursor rules:
//   - starts at 0
//   - only moves forward, by exactly the size of each batch served
//   - never exceeds the partition length
//   - goes back to 0 only on an explicit reset
//
// So batches from one pass never overlap and together cover
// the partition exactly once, in order.

use std::fmt;
use std::str::FromStr;

use crate::domain::batch::Batch;
use crate::error::LoaderError;

// ─── PartitionName ────────────────────────────────────────────────────────────
/// One of the three subsets of a loaded corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionName {
    Train,
    Validation,
    Test,
}

impl PartitionName {
    pub const ALL: [PartitionName; 3] = [
        PartitionName::Train,
        PartitionName::Validation,
        PartitionName::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionName::Train => "train",
            PartitionName::Validation => "validation",
            PartitionName::Test => "test",
        }
    }
}

impl fmt::Display for PartitionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive. "val" is accepted as a short form of "validation".
impl FromStr for PartitionName {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "train" => Ok(PartitionName::Train),
            "val" | "validation" => Ok(PartitionName::Validation),
            "test" => Ok(PartitionName::Test),
            _ => Err(LoaderError::UnknownPartition {
                name: s.to_string(),
            }),
        }
    }
}

// ─── Partition ────────────────────────────────────────────────────────────────
/// Lines of one partition plus its read cursor.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    lines: Vec<String>,
    cursor: usize,
}

impl Partition {
    /// Wrap a freshly split slice with its cursor at 0
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Lines not yet served in the current pass
    pub fn remaining(&self) -> usize {
        self.lines.len() - self.cursor
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Serve the next `batch_size` lines and advance the cursor.
    ///
    /// Returns None once the cursor has reached the end. That is
    /// different from `Some` of an empty batch, which only happens
    /// when `batch_size` is 0 and leaves the cursor where it is.
    pub fn next_batch(&mut self, batch_size: usize) -> Option<Batch> {
        if self.cursor >= self.lines.len() {
            return None;
        }

        let size = batch_size.min(self.remaining());
        let end = self.cursor + size;

        // Copy out so the caller owns an independent snapshot
        let slice = self.lines[self.cursor..end].to_vec();
        self.cursor = end;

        Some(Batch::new(slice))
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn partition(items: &[&str]) -> Partition {
        Partition::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_parses_names_and_aliases() {
        assert_eq!("train".parse::<PartitionName>().unwrap(), PartitionName::Train);
        assert_eq!("VAL".parse::<PartitionName>().unwrap(), PartitionName::Validation);
        assert_eq!(
            "Validation".parse::<PartitionName>().unwrap(),
            PartitionName::Validation
        );
        assert_eq!("test".parse::<PartitionName>().unwrap(), PartitionName::Test);
    }

    #[test]
    fn test_rejects_unknown_name() {
        let err = "dev".parse::<PartitionName>().unwrap_err();
        assert!(matches!(err, LoaderError::UnknownPartition { name } if name == "dev"));
    }

    #[test]
    fn test_batches_cover_partition_once() {
        let mut p = partition(&["a", "b", "c"]);

        let first = p.next_batch(2).unwrap();
        assert_eq!(first.lines(), &["a", "b"]);

        let second = p.next_batch(2).unwrap();
        assert_eq!(second.lines(), &["c"]);

        assert!(p.next_batch(2).is_none());
        assert_eq!(p.cursor(), 3);
    }

    #[test]
    fn test_zero_batch_size_is_empty_batch_not_end() {
        let mut p = partition(&["a"]);
        let batch = p.next_batch(0).unwrap();
        assert!(batch.is_empty());
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn test_empty_partition_has_no_data() {
        let mut p = Partition::default();
        assert!(p.next_batch(4).is_none());
    }

    #[test]
    fn test_reset_replays_first_batch() {
        let mut p = partition(&["a", "b", "c"]);
        let before = p.next_batch(2).unwrap();
        p.next_batch(2);
        p.reset();
        assert_eq!(p.next_batch(2).unwrap(), before);
    }
}

// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from raw text files to in-memory batches.
//
// The pipeline flows in this order:
//
//   .txt file(s)
//       │
//       ▼
//   FileRecordSource  → streams raw lines, chaining across files
//       │
//       ▼
//   BasicLineCleaner  → trims, lowercases, strips punctuation
//       │
//       ▼
//   RatioSplitter     → seeded shuffle, then train/val/test slices
//       │
//       ▼
//   DataLoader        → owns the partitions, serves batches
//
// Each step implements one trait from domain/traits.rs, so any
// of them can be swapped without touching the loader.

/// Streams raw lines from a file or a directory of files
pub mod source;

/// Normalises a single raw line
pub mod cleaner;

/// Shuffles and splits lines into train/validation/test
pub mod splitter;

/// Composes the three above and serves batches
pub mod loader;

pub use cleaner::BasicLineCleaner;
pub use loader::{DataLoader, FileDataLoader, LoadStats};
pub use source::FileRecordSource;
pub use splitter::RatioSplitter;

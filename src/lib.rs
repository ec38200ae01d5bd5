//! Load a plain-text corpus, clean every line, split it into
//! train/validation/test partitions and serve fixed-size,
//! cursor-tracked batches from each partition.
//!
//! ```no_run
//! use corpus_split::data::{BasicLineCleaner, FileDataLoader, FileRecordSource, RatioSplitter};
//!
//! let mut loader = FileDataLoader::new()
//!     .with_data_source(FileRecordSource::new(), "data/corpus")
//!     .with_data_cleaner(BasicLineCleaner::new())
//!     .with_data_splitter(RatioSplitter::new(42));
//!
//! loader.load_data(0.8, 0.1, 0.1)?;
//! while let Some(batch) = loader.get_next_batch("train", 32)? {
//!     println!("{} lines", batch.count());
//! }
//! # Ok::<(), corpus_split::error::LoaderError>(())
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

pub use data::{BasicLineCleaner, DataLoader, FileDataLoader, FileRecordSource, RatioSplitter};
pub use domain::{
    batch::Batch,
    partition::PartitionName,
    ratios::SplitRatios,
    traits::{LineCleaner, PartitionSplitter, RecordSource, SplitOutput},
};
pub use error::{ErrorKind, LoaderError, Result};

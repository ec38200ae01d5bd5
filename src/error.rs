// ============================================================
// Error Taxonomy
// ============================================================
// Every failure the pipeline can produce maps to one ErrorKind.
// Each variant carries the offending input (path, ratios,
// partition name) so the caller can report it directly.
//
// The data and domain layers return this typed error.
// The application and CLI layers wrap it with anyhow.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Coarse classification of a `LoaderError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    NotFound,
    InvalidRatio,
    UnknownPartition,
    Io,
    InvalidBatch,
}

/// Errors that can occur while loading, splitting or batching a corpus
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A required collaborator was not set before use
    #[error("Loader is not configured: {missing} is not set")]
    Configuration {
        /// Name of the missing dependency
        missing: &'static str,
    },

    /// The source identifier resolves to neither a file nor a directory
    #[error("File or directory not found: {}", path.display())]
    NotFound {
        /// Offending path
        path: PathBuf,
    },

    /// The directory exists but holds no file with the expected extension
    #[error("No .{extension} files found in '{}'", dir.display())]
    NoMatchingFiles {
        /// Directory that was scanned
        dir: PathBuf,
        /// Extension filter that was applied
        extension: String,
    },

    /// The ratio triple is out of range or does not sum to 1.0
    #[error("Invalid split ratios ({train}, {validation}, {test}): each must be in [0, 1] and they must sum to 1.0")]
    InvalidRatio {
        train: f64,
        validation: f64,
        test: f64,
    },

    /// Partition key outside {train, val, validation, test}
    #[error("Unknown partition: '{name}'")]
    UnknownPartition {
        /// The key that was rejected
        name: String,
    },

    /// Read failure while streaming a source file
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Labels supplied for a batch do not line up with its lines
    #[error("Batch has {lines} lines but {labels} labels")]
    LabelCountMismatch { lines: usize, labels: usize },
}

impl LoaderError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoaderError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LoaderError::Configuration { .. } => ErrorKind::Configuration,
            LoaderError::NotFound { .. } | LoaderError::NoMatchingFiles { .. } => {
                ErrorKind::NotFound
            }
            LoaderError::InvalidRatio { .. } => ErrorKind::InvalidRatio,
            LoaderError::UnknownPartition { .. } => ErrorKind::UnknownPartition,
            LoaderError::Io { .. } => ErrorKind::Io,
            LoaderError::LabelCountMismatch { .. } => ErrorKind::InvalidBatch,
        }
    }
}

// ============================================================
// Layer 4 — File Record Source
// ============================================================
// Reads raw lines from a single text file or from every
// matching file in a directory, one line at a time.
//
// Directory handling:
//   - only regular files whose extension matches (default "txt")
//   - not recursive
//   - sorted by path so multi-file corpora load in the same
//     order on every machine
//
// Only one file handle is ever open. When the current file
// runs out, its handle is dropped before the next file is
// opened, so the stream chains across files transparently.
//
// Line terminators ("\n" or "\r\n") are stripped. A line that
// is not valid UTF-8 surfaces as an I/O error.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::domain::traits::RecordSource;
use crate::error::{LoaderError, Result};

/// Extension used when none is configured
pub const DEFAULT_EXTENSION: &str = "txt";

/// Where the source is in its read cycle
#[derive(Debug)]
enum SourceState {
    /// No handle held
    Closed,
    /// Reading `files[index]`
    Reading {
        index: usize,
        reader: BufReader<File>,
    },
    /// Every file has been read to the end
    Exhausted,
}

/// Implements RecordSource over local text files.
#[derive(Debug)]
pub struct FileRecordSource {
    /// Extension filter applied when opening a directory
    extension: String,

    /// Files resolved by the last successful open(), in read order
    files: Vec<PathBuf>,

    state: SourceState,
}

impl FileRecordSource {
    pub fn new() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }

    /// Use a different extension filter for directories.
    /// A leading dot is ignored, so "txt" and ".txt" are the same.
    pub fn with_extension(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            files: Vec::new(),
            state: SourceState::Closed,
        }
    }

    /// Files that will be read, in order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Index of the file currently being read, if any
    pub fn current_file_index(&self) -> Option<usize> {
        match self.state {
            SourceState::Reading { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Expand `identifier` into the ordered list of files to read
    fn resolve(&self, identifier: &str) -> Result<Vec<PathBuf>> {
        let path = Path::new(identifier);

        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }

        if !path.is_dir() {
            return Err(LoaderError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| LoaderError::io(path, e))? {
            let entry = entry.map_err(|e| LoaderError::io(path, e))?;
            let candidate = entry.path();

            let matches = candidate.extension().and_then(|e| e.to_str())
                == Some(self.extension.as_str());
            if matches && candidate.is_file() {
                files.push(candidate);
            }
        }

        if files.is_empty() {
            return Err(LoaderError::NoMatchingFiles {
                dir: path.to_path_buf(),
                extension: self.extension.clone(),
            });
        }

        files.sort();
        Ok(files)
    }

    /// Open `files[index]`, or mark the source exhausted past the end
    fn open_file(&mut self, index: usize) -> Result<()> {
        let Some(path) = self.files.get(index) else {
            self.state = SourceState::Exhausted;
            return Ok(());
        };

        let file = File::open(path).map_err(|e| LoaderError::io(path, e))?;
        tracing::debug!("Opened '{}' ({}/{})", path.display(), index + 1, self.files.len());

        self.state = SourceState::Reading {
            index,
            reader: BufReader::new(file),
        };
        Ok(())
    }
}

impl Default for FileRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for FileRecordSource {
    fn open(&mut self, identifier: &str) -> Result<()> {
        self.close();
        self.files.clear();
        self.files = self.resolve(identifier)?;

        tracing::debug!(
            "Resolved '{}' to {} file(s)",
            identifier,
            self.files.len()
        );

        self.open_file(0)
    }

    fn read_next(&mut self) -> Result<Option<String>> {
        loop {
            let (index, reader) = match &mut self.state {
                SourceState::Reading { index, reader } => (*index, reader),
                SourceState::Closed | SourceState::Exhausted => return Ok(None),
            };

            let mut line = String::new();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| LoaderError::io(&self.files[index], e))?;

            if read > 0 {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                return Ok(Some(line));
            }

            // End of this file: drop its handle before moving on
            self.state = SourceState::Closed;
            tracing::debug!("Finished '{}'", self.files[index].display());
            self.open_file(index + 1)?;
        }
    }

    fn reset(&mut self) -> Result<()> {
        if self.files.is_empty() {
            return Err(LoaderError::Configuration {
                missing: "source identifier (open() was never called)",
            });
        }
        self.close();
        self.open_file(0)
    }

    fn close(&mut self) {
        self.state = SourceState::Closed;
    }
}

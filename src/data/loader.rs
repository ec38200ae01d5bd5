// ============================================================
// Layer 4 — Data Loader (orchestrator)
// ============================================================
// Ties a RecordSource, a LineCleaner and a PartitionSplitter
// together and serves cursor-tracked batches per partition.
//
// load_data():
//   1. Check that all three collaborators are set
//   2. Open the source at the configured location
//   3. Read every raw line, clean it, drop empties
//   4. Close the source (on failure too)
//   5. Split the cleaned corpus
//   6. Only now replace the three partitions and zero the cursors
//
// If anything in 2-5 fails, the previously loaded partitions
// and their cursors are left exactly as they were.
//
// get_next_batch() only touches the in-memory partitions.
// The source is never revisited after load_data() returns.
//
// The whole cleaned corpus is held in memory. Cursors are plain
// fields, so sharing a loader across threads needs a Mutex
// around it.

use crate::domain::{
    batch::Batch,
    partition::{Partition, PartitionName},
    ratios::SplitRatios,
    traits::{LineCleaner, PartitionSplitter, RecordSource, SplitOutput},
};
use crate::error::{LoaderError, Result};

use super::{cleaner::BasicLineCleaner, source::FileRecordSource, splitter::RatioSplitter};

/// The file-backed loader used by the CLI
pub type FileDataLoader = DataLoader<FileRecordSource, BasicLineCleaner, RatioSplitter>;

/// Counts gathered while reading a corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Raw lines pulled from the source
    pub lines_read: usize,
    /// Lines that cleaned to empty and were dropped
    pub lines_dropped: usize,
}

/// Orchestrates source → cleaner → splitter and owns the partitions.
#[derive(Debug)]
pub struct DataLoader<S, C, P> {
    source: Option<S>,
    location: Option<String>,
    cleaner: Option<C>,
    splitter: Option<P>,

    train: Partition,
    validation: Partition,
    test: Partition,
}

impl<S, C, P> DataLoader<S, C, P>
where
    S: RecordSource,
    C: LineCleaner,
    P: PartitionSplitter,
{
    /// An unconfigured loader with empty partitions
    pub fn new() -> Self {
        Self {
            source: None,
            location: None,
            cleaner: None,
            splitter: None,
            train: Partition::default(),
            validation: Partition::default(),
            test: Partition::default(),
        }
    }

    /// Set the source and the identifier it will be opened with
    pub fn set_data_source(&mut self, source: S, location: impl Into<String>) {
        self.source = Some(source);
        self.location = Some(location.into());
    }

    pub fn set_data_cleaner(&mut self, cleaner: C) {
        self.cleaner = Some(cleaner);
    }

    pub fn set_data_splitter(&mut self, splitter: P) {
        self.splitter = Some(splitter);
    }

    pub fn with_data_source(mut self, source: S, location: impl Into<String>) -> Self {
        self.set_data_source(source, location);
        self
    }

    pub fn with_data_cleaner(mut self, cleaner: C) -> Self {
        self.set_data_cleaner(cleaner);
        self
    }

    pub fn with_data_splitter(mut self, splitter: P) -> Self {
        self.set_data_splitter(splitter);
        self
    }

    /// Read, clean and split the whole corpus.
    ///
    /// Ratios are validated before the source is touched.
    pub fn load_data(&mut self, train: f64, validation: f64, test: f64) -> Result<LoadStats> {
        let (Some(source), Some(location)) = (self.source.as_mut(), self.location.as_deref())
        else {
            return Err(LoaderError::Configuration {
                missing: "data source",
            });
        };
        let Some(cleaner) = self.cleaner.as_ref() else {
            return Err(LoaderError::Configuration {
                missing: "data cleaner",
            });
        };
        let Some(splitter) = self.splitter.as_mut() else {
            return Err(LoaderError::Configuration {
                missing: "data splitter",
            });
        };

        let ratios = SplitRatios::new(train, validation, test)?;

        tracing::info!("Loading corpus from '{}'", location);

        source.open(location)?;
        let read = read_cleaned(source, cleaner);
        source.close();
        let (cleaned, stats) = read?;

        if cleaned.is_empty() {
            tracing::warn!(
                "'{}' produced no usable lines ({} read, all dropped)",
                location,
                stats.lines_read
            );
        }

        let split = splitter.split(cleaned, ratios)?;
        self.replace_partitions(split);

        tracing::info!(
            "Loaded {} lines ({} dropped): {} train, {} validation, {} test",
            stats.lines_read,
            stats.lines_dropped,
            self.train.len(),
            self.validation.len(),
            self.test.len()
        );

        Ok(stats)
    }

    /// Next batch of the partition named `partition`.
    ///
    /// `Ok(None)` means the partition has been fully served
    /// since load or the last cursor reset.
    pub fn get_next_batch(&mut self, partition: &str, batch_size: usize) -> Result<Option<Batch>> {
        let name: PartitionName = partition.parse()?;
        Ok(self.next_batch(name, batch_size))
    }

    /// Typed form of `get_next_batch`
    pub fn next_batch(&mut self, partition: PartitionName, batch_size: usize) -> Option<Batch> {
        self.partition_mut(partition).next_batch(batch_size)
    }

    /// Rewind one partition so the next batch starts from its first line
    pub fn reset_partition_cursor(&mut self, partition: &str) -> Result<()> {
        let name: PartitionName = partition.parse()?;
        self.partition_mut(name).reset();
        Ok(())
    }

    pub fn reset_all_cursors(&mut self) {
        for name in PartitionName::ALL {
            self.partition_mut(name).reset();
        }
    }
}

impl<S, C, P> DataLoader<S, C, P> {
    pub fn train_size(&self) -> usize {
        self.train.len()
    }

    pub fn validation_size(&self) -> usize {
        self.validation.len()
    }

    pub fn test_size(&self) -> usize {
        self.test.len()
    }

    pub fn size(&self, partition: PartitionName) -> usize {
        self.partition(partition).len()
    }

    /// Lines not yet served from `partition` in the current pass
    pub fn remaining(&self, partition: PartitionName) -> usize {
        self.partition(partition).remaining()
    }

    pub fn partition(&self, partition: PartitionName) -> &Partition {
        match partition {
            PartitionName::Train => &self.train,
            PartitionName::Validation => &self.validation,
            PartitionName::Test => &self.test,
        }
    }

    fn partition_mut(&mut self, partition: PartitionName) -> &mut Partition {
        match partition {
            PartitionName::Train => &mut self.train,
            PartitionName::Validation => &mut self.validation,
            PartitionName::Test => &mut self.test,
        }
    }

    /// Swap in all three partitions at once, cursors at 0
    fn replace_partitions(&mut self, split: SplitOutput) {
        self.train = Partition::new(split.train);
        self.validation = Partition::new(split.validation);
        self.test = Partition::new(split.test);
    }
}

impl<S, C, P> Default for DataLoader<S, C, P>
where
    S: RecordSource,
    C: LineCleaner,
    P: PartitionSplitter,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Drain `source`, cleaning each line and dropping empties
fn read_cleaned<S: RecordSource, C: LineCleaner>(
    source: &mut S,
    cleaner: &C,
) -> Result<(Vec<String>, LoadStats)> {
    let mut cleaned = Vec::new();
    let mut stats = LoadStats::default();

    while let Some(raw) = source.read_next()? {
        stats.lines_read += 1;

        let line = cleaner.clean_line(&raw);
        if line.trim().is_empty() {
            stats.lines_dropped += 1;
            continue;
        }
        cleaned.push(line);
    }

    Ok((cleaned, stats))
}

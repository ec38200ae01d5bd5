// ============================================================
// Layer 4 — Train/Validation/Test Splitter
// ============================================================
// Optionally shuffles the cleaned corpus, then cuts it into
// three contiguous slices: train, validation, test.
//
// Shuffling:
//   One Fisher-Yates pass driven by a generator the splitter
//   owns, seeded at construction. For i in 0..n, swap item i
//   with a uniformly chosen index in [i, n). The same seed on
//   the same input always gives the same permutation.
//
//   The generator is never shared with the rest of the process,
//   so one splitter's results do not depend on what else ran.
//   It does advance between calls: a second split on the same
//   splitter draws a fresh permutation, while a new splitter
//   with the same seed replays the first one.
//
// Sizes come from SplitRatios::counts, so the test slice takes
// the rounding remainder and nothing is lost or duplicated.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::{
    ratios::SplitRatios,
    traits::{PartitionSplitter, SplitOutput},
};
use crate::error::Result;

/// Seed used by `RatioSplitter::default()`
pub const DEFAULT_SEED: u64 = 42;

/// Splits by ratio, shuffling first unless told not to.
#[derive(Debug, Clone)]
pub struct RatioSplitter {
    shuffle: bool,
    seed: u64,
    rng: StdRng,
}

impl RatioSplitter {
    /// A shuffling splitter with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            shuffle: true,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A splitter that keeps input order
    pub fn sequential() -> Self {
        Self::new(DEFAULT_SEED).with_shuffle(false)
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn shuffles(&self) -> bool {
        self.shuffle
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validate raw ratios and split in one call
    pub fn split_by(
        &mut self,
        lines: Vec<String>,
        train: f64,
        validation: f64,
        test: f64,
    ) -> Result<SplitOutput> {
        let ratios = SplitRatios::new(train, validation, test)?;
        self.split(lines, ratios)
    }

    fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        let n = items.len();
        for i in 0..n {
            let j = self.rng.gen_range(i..n);
            items.swap(i, j);
        }
    }
}

impl Default for RatioSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl PartitionSplitter for RatioSplitter {
    fn split(&mut self, mut lines: Vec<String>, ratios: SplitRatios) -> Result<SplitOutput> {
        if self.shuffle {
            self.shuffle_in_place(&mut lines);
        }

        let (train_count, val_count, test_count) = ratios.counts(lines.len());

        // split_off(n) keeps [0..n) in place and returns [n..)
        let mut validation = lines.split_off(train_count);
        let test = validation.split_off(val_count);
        let train = lines;

        tracing::debug!(
            "Split {} lines: {} train, {} validation, {} test (shuffle: {})",
            train_count + val_count + test_count,
            train.len(),
            validation.len(),
            test.len(),
            self.shuffle,
        );

        Ok(SplitOutput {
            train,
            validation,
            test,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoaderError;

    fn corpus(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("line{i:03}")).collect()
    }

    fn concat(out: &SplitOutput) -> Vec<String> {
        out.train
            .iter()
            .chain(&out.validation)
            .chain(&out.test)
            .cloned()
            .collect()
    }

    #[test]
    fn test_rejects_ratios_that_do_not_sum_to_one() {
        let mut s = RatioSplitter::default();
        let err = s.split_by(corpus(3), 0.5, 0.3, 0.3).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidRatio { .. }));
    }

    #[test]
    fn test_sequential_split_keeps_order() {
        let mut s = RatioSplitter::sequential();
        let data: Vec<String> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let out = s.split_by(data.clone(), 0.5, 0.33, 0.17).unwrap();

        assert_eq!(out.train, vec!["A", "B", "C"]);
        assert_eq!(out.validation, vec!["D"]);
        assert_eq!(out.test, vec!["E", "F"]);
        assert_eq!(concat(&out), data);
    }

    #[test]
    fn test_shuffled_split_preserves_every_line() {
        let mut s = RatioSplitter::new(42);
        let data = corpus(50);

        let out = s.split_by(data.clone(), 0.7, 0.2, 0.1).unwrap();
        assert_eq!(out.train.len(), 35);
        assert_eq!(out.validation.len(), 10);
        assert_eq!(out.test.len(), 5);

        let mut combined = concat(&out);
        combined.sort();
        assert_eq!(combined, data);
    }

    #[test]
    fn test_same_seed_gives_same_partitions() {
        let a = RatioSplitter::new(2023).split_by(corpus(40), 0.6, 0.2, 0.2).unwrap();
        let b = RatioSplitter::new(2023).split_by(corpus(40), 0.6, 0.2, 0.2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_changes_order() {
        let data = corpus(40);
        let out = RatioSplitter::new(7).split_by(data.clone(), 1.0, 0.0, 0.0).unwrap();
        assert_ne!(out.train, data);
    }

    #[test]
    fn test_sizes_sum_to_input_for_many_lengths() {
        let mut s = RatioSplitter::new(1);
        for n in 0..30 {
            let out = s.split_by(corpus(n), 0.45, 0.35, 0.2).unwrap();
            assert_eq!(out.total(), n);
        }
    }

    #[test]
    fn test_empty_corpus_splits_to_empty_partitions() {
        let out = RatioSplitter::default().split_by(Vec::new(), 0.8, 0.1, 0.1).unwrap();
        assert_eq!(out, SplitOutput::default());
    }
}

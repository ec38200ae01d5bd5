// ============================================================
// Layer 3 — Split Ratios
// ============================================================
// The target fraction of the cleaned corpus for each partition.
//
// A triple is valid when:
//   - every ratio is a finite number in [0, 1]
//   - the three sum to 1.0 within RATIO_TOLERANCE
//
// Partition sizes for n lines:
//   train = floor(n * train)
//   val   = floor(n * validation)
//   test  = n - train - val      (absorbs the rounding remainder)

use serde::{Deserialize, Serialize};

use crate::error::{LoaderError, Result};

/// Allowed distance between the ratio sum and 1.0
pub const RATIO_TOLERANCE: f64 = 1e-4;

/// A validated (train, validation, test) ratio triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatios {
    train: f64,
    validation: f64,
    test: f64,
}

impl SplitRatios {
    pub fn new(train: f64, validation: f64, test: f64) -> Result<Self> {
        let in_range = |r: f64| r.is_finite() && (0.0..=1.0).contains(&r);
        let sum = train + validation + test;

        if !(in_range(train) && in_range(validation) && in_range(test))
            || (sum - 1.0).abs() > RATIO_TOLERANCE
        {
            return Err(LoaderError::InvalidRatio {
                train,
                validation,
                test,
            });
        }

        Ok(Self {
            train,
            validation,
            test,
        })
    }

    pub fn train(&self) -> f64 {
        self.train
    }

    pub fn validation(&self) -> f64 {
        self.validation
    }

    pub fn test(&self) -> f64 {
        self.test
    }

    /// Sizes of (train, validation, test) for a corpus of `total` lines.
    /// Always sums to exactly `total`.
    pub fn counts(&self, total: usize) -> (usize, usize, usize) {
        // A sum slightly above 1.0 is tolerated, so clamp the floors
        let train = ((total as f64 * self.train).floor() as usize).min(total);
        let val = ((total as f64 * self.validation).floor() as usize).min(total - train);
        (train, val, total - train - val)
    }
}

/// The 80/10/10 split used when nothing else is configured
impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.8,
            validation: 0.1,
            test: 0.1,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_sum_within_tolerance() {
        assert!(SplitRatios::new(0.6, 0.2, 0.2).is_ok());
        assert!(SplitRatios::new(0.5, 0.33, 0.17).is_ok());
        assert!(SplitRatios::new(1.0, 0.0, 0.0).is_ok());
        assert!(SplitRatios::new(0.33333, 0.33333, 0.33334).is_ok());
        assert!(SplitRatios::new(0.8, 0.1, 0.10005).is_ok());
    }

    #[test]
    fn test_rejects_sum_outside_tolerance() {
        let err = SplitRatios::new(0.5, 0.3, 0.3).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidRatio { .. }));
        assert!(SplitRatios::new(0.8, 0.1, 0.0998).is_err());
        assert!(SplitRatios::new(0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_and_nan() {
        assert!(SplitRatios::new(1.5, -0.5, 0.0).is_err());
        assert!(SplitRatios::new(f64::NAN, 0.5, 0.5).is_err());
    }

    #[test]
    fn test_counts_floor_and_test_absorbs_remainder() {
        let r = SplitRatios::new(0.6, 0.2, 0.2).unwrap();
        assert_eq!(r.counts(5), (3, 1, 1));

        let r = SplitRatios::new(0.5, 0.33, 0.17).unwrap();
        assert_eq!(r.counts(6), (3, 1, 2));

        let r = SplitRatios::new(0.7, 0.2, 0.1).unwrap();
        assert_eq!(r.counts(0), (0, 0, 0));
    }

    #[test]
    fn test_counts_always_sum_to_total() {
        let r = SplitRatios::new(0.50005, 0.49995, 0.0001).unwrap();
        for total in [0usize, 1, 7, 99, 1000, 123_457] {
            let (a, b, c) = r.counts(total);
            assert_eq!(a + b + c, total);
        }
    }
}

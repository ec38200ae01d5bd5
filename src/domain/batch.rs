// ============================================================
// Layer 3 — Batch Domain Type
// ============================================================
// The only artifact the loader hands to a downstream consumer
// (a training loop, a tokeniser, ...).
//
// A Batch owns its lines. It is a snapshot copied out of the
// loader's partition, so a caller mutating or consuming it can
// never disturb the loader's internal state.
//
// Labels are optional. Pure text pipelines leave them as None;
// supervised pipelines attach one integer per line.

use serde::{Deserialize, Serialize};

use crate::error::{LoaderError, Result};

/// An ordered group of cleaned lines, optionally with labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Cleaned lines in partition order
    lines: Vec<String>,

    /// One label per line, or None for unlabelled text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<i32>>,
}

impl Batch {
    /// Create an unlabelled batch
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            labels: None,
        }
    }

    /// Create a labelled batch.
    /// Fails if `labels` is not exactly as long as `lines`.
    pub fn with_labels(lines: Vec<String>, labels: Vec<i32>) -> Result<Self> {
        if lines.len() != labels.len() {
            return Err(LoaderError::LabelCountMismatch {
                lines: lines.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            lines,
            labels: Some(labels),
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn labels(&self) -> Option<&[i32]> {
        self.labels.as_deref()
    }

    /// Number of lines in this batch
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take ownership of the lines, dropping any labels
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unlabelled_batch_has_no_labels() {
        let batch = Batch::new(lines(&["alpha", "beta"]));
        assert_eq!(batch.count(), 2);
        assert!(batch.labels().is_none());
    }

    #[test]
    fn test_labels_must_match_line_count() {
        let err = Batch::with_labels(lines(&["alpha", "beta"]), vec![1]).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::LabelCountMismatch { lines: 2, labels: 1 }
        ));

        let batch = Batch::with_labels(lines(&["alpha", "beta"]), vec![0, 1]).unwrap();
        assert_eq!(batch.labels(), Some(&[0, 1][..]));
    }

    #[test]
    fn test_unlabelled_batch_serialises_without_labels_field() {
        let batch = Batch::new(lines(&["gamma"]));
        let json = serde_json::to_string(&batch).unwrap();
        assert_eq!(json, r#"{"lines":["gamma"]}"#);
    }
}

// ============================================================
// Layer 4 — Line Cleaner
// ============================================================
// Normalises one raw line before it enters a partition.
//
// Cleaning steps (applied in order):
//   1. Trim leading/trailing whitespace
//   2. Lowercase (optional, on by default)
//   3. Remove every character that is neither a word character
//      nor whitespace, e.g. punctuation and symbols
//   4. Trim again, since step 3 can expose edge whitespace
//      ("hello !" → "hello ")
//
// The final trim keeps cleaning idempotent: cleaning an already
// clean line returns it unchanged.
//
// A line that ends up empty is the drop signal. The loader
// never puts it in a partition.
//
// The cleaner holds only its lowercase flag and a shared
// compiled pattern, so it is safe to call from any thread.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::traits::LineCleaner;

lazy_static! {
    /// Anything outside {word characters, whitespace}
    static ref PUNCTUATION_RE: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Trim, optionally lowercase, and strip punctuation.
#[derive(Debug, Clone, Copy)]
pub struct BasicLineCleaner {
    lowercase: bool,
}

impl BasicLineCleaner {
    /// Create a cleaner that lowercases
    pub fn new() -> Self {
        Self { lowercase: true }
    }

    /// Create a cleaner that keeps the original case
    pub fn preserving_case() -> Self {
        Self { lowercase: false }
    }

    pub fn with_lowercase(lowercase: bool) -> Self {
        Self { lowercase }
    }

    pub fn lowercases(&self) -> bool {
        self.lowercase
    }
}

impl Default for BasicLineCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCleaner for BasicLineCleaner {
    fn clean_line(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let folded = if self.lowercase {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };

        PUNCTUATION_RE.replace_all(&folded, "").trim().to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_lowercases_and_strips_punctuation() {
        let c = BasicLineCleaner::new();
        assert_eq!(c.clean_line(" Hello world! "), "hello world");
        assert_eq!(c.clean_line("SOME PUNCT!!!"), "some punct");
        assert_eq!(c.clean_line("NoChange"), "nochange");
        assert_eq!(c.clean_line("   Gamma   "), "gamma");
    }

    #[test]
    fn test_respects_lowercase_setting() {
        assert_eq!(
            BasicLineCleaner::preserving_case().clean_line("SOME TEXT!!"),
            "SOME TEXT"
        );
        assert_eq!(
            BasicLineCleaner::with_lowercase(true).clean_line("SOME TEXT!!"),
            "some text"
        );
    }

    #[test]
    fn test_blank_lines_become_drop_signal() {
        let c = BasicLineCleaner::new();
        assert_eq!(c.clean_line(""), "");
        assert_eq!(c.clean_line("   \t "), "");
        assert_eq!(c.clean_line("  ?!.,  "), "");
    }

    #[test]
    fn test_keeps_digits_underscores_and_unicode_letters() {
        let c = BasicLineCleaner::new();
        assert_eq!(c.clean_line("Line_1: café, 42%"), "line_1 café 42");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let c = BasicLineCleaner::new();
        for raw in ["Hello !", "  Mixed CASE, text.  ", "!leading", "tab\tinside!", "Ünïcödé?"] {
            let once = c.clean_line(raw);
            assert_eq!(c.clean_line(&once), once, "not idempotent for {raw:?}");
        }
    }
}

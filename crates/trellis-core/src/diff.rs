//! Per-cell diff classification
//!
//! Pure and order-independent: each cell index is classified from its own
//! previous/current token pair alone. The initial step never carries diff
//! marks. The muted tag for sentinel tokens is orthogonal to the change
//! classification and composes with it.

use crate::track::{EOT_SENTINEL, NEWLINE_SENTINEL};

/// Visual state transition for one cell between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellChange {
    /// No content at this position.
    Empty,
    /// Content at this position disappeared since the previous step.
    Removed,
    /// Content at this position differs from the previous step.
    Changed,
    #[default]
    Unchanged,
}

/// Full classification for one cell: change kind plus the sentinel tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellClass {
    pub change: CellChange,
    /// True for end-of-text sentinels and literal newline escapes.
    pub muted: bool,
}

/// Classify one cell position. `previous`/`current` are token-or-absent;
/// absent normalizes to the empty string.
pub fn classify(previous: Option<&str>, current: Option<&str>, is_initial_step: bool) -> CellClass {
    let display = current.unwrap_or("");
    let prev_display = previous.unwrap_or("");

    let change = if display.is_empty() {
        if !is_initial_step && !prev_display.is_empty() {
            CellChange::Removed
        } else {
            CellChange::Empty
        }
    } else if !is_initial_step && prev_display != display {
        CellChange::Changed
    } else {
        CellChange::Unchanged
    };

    CellClass {
        change,
        muted: display == EOT_SENTINEL || display == NEWLINE_SENTINEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_token_unchanged() {
        let c = classify(Some("a"), Some("a"), false);
        assert_eq!(c.change, CellChange::Unchanged);
        assert!(!c.muted);
    }

    #[test]
    fn test_token_to_empty_is_removed() {
        assert_eq!(classify(Some("a"), Some(""), false).change, CellChange::Removed);
        assert_eq!(classify(Some("a"), None, false).change, CellChange::Removed);
    }

    #[test]
    fn test_different_token_is_changed() {
        assert_eq!(classify(Some("a"), Some("b"), false).change, CellChange::Changed);
        // Appearing from absent also counts as a change
        assert_eq!(classify(None, Some("b"), false).change, CellChange::Changed);
    }

    #[test]
    fn test_initial_step_suppresses_all_marks() {
        assert_eq!(classify(Some("a"), Some("b"), true).change, CellChange::Unchanged);
        assert_eq!(classify(Some("a"), Some(""), true).change, CellChange::Empty);
        assert_eq!(classify(None, Some("x"), true).change, CellChange::Unchanged);
    }

    #[test]
    fn test_empty_to_empty_stays_empty() {
        assert_eq!(classify(None, None, false).change, CellChange::Empty);
        assert_eq!(classify(Some(""), Some(""), false).change, CellChange::Empty);
    }

    #[test]
    fn test_sentinels_are_muted_and_compose() {
        let eot = classify(Some("a"), Some(EOT_SENTINEL), false);
        assert!(eot.muted);
        assert_eq!(eot.change, CellChange::Changed);

        let newline = classify(Some(NEWLINE_SENTINEL), Some(NEWLINE_SENTINEL), false);
        assert!(newline.muted);
        assert_eq!(newline.change, CellChange::Unchanged);
    }
}

//! Completion detection
//!
//! Records, per track, the first step at which the track's row equaled its
//! final row. The recorded "done step" is never overwritten, but the badge is
//! a live display flag: it hides whenever the current row differs from the
//! final row and re-shows (with the original done step) when equality is
//! re-observed at a later step.

use std::collections::HashMap;

use crate::track::Track;

/// Per-track memo of the first observed done step.
#[derive(Debug, Clone, Default)]
pub struct CompletionMemo {
    done: HashMap<String, usize>,
}

impl CompletionMemo {
    /// Forget everything; called at the start of every load.
    pub fn reset(&mut self) {
        self.done.clear();
    }

    /// Evaluate a track at the given step.
    ///
    /// Returns the done step to display, or `None` when the badge is hidden.
    /// A zero-row track never completes and loses any stale entry.
    pub fn evaluate(&mut self, track: &Track, step: usize) -> Option<usize> {
        let Some(final_row) = track.final_row() else {
            self.done.remove(&track.id);
            return None;
        };

        if track.row_at(step) == final_row {
            let recorded = *self.done.entry(track.id.clone()).or_insert(step);
            Some(recorded)
        } else {
            // Entry is retained; only visibility changes
            None
        }
    }
}

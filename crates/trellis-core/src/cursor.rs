//! Playback cursor and timer state machine
//!
//! The cursor is the single source of truth for the current step. Its bounds
//! are derived from all loaded tracks: `last_step = max(0, max(rows.len()) - 1)`.
//! Playback has exactly two states, Stopped and Playing; the tick interval is
//! sanitized so a bad configured value can never stall the timer.

/// Tick interval used when the configured value is unusable.
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Playback state machine. Initial state is Stopped; a fresh load resets to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// The shared step cursor, clamped to the loaded track set's bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackCursor {
    step: usize,
    last_step: usize,
}

impl PlaybackCursor {
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn last_step(&self) -> usize {
        self.last_step
    }

    /// Recompute bounds from the loaded row counts, clamping the current step.
    pub fn set_bounds(&mut self, row_counts: impl Iterator<Item = usize>) {
        self.last_step = row_counts
            .map(|len| len.saturating_sub(1))
            .max()
            .unwrap_or(0);
        self.step = self.step.min(self.last_step);
    }

    /// Reset to the initial position, keeping bounds.
    pub fn rewind(&mut self) {
        self.step = 0;
    }

    /// Clamp `n` into `[0, last_step]`. Always succeeds.
    pub fn set_step(&mut self, n: usize) {
        self.step = n.min(self.last_step);
    }

    /// Advance one step. Returns `true` when the cursor was already at the
    /// last step, i.e. playback should stop.
    pub fn advance(&mut self) -> bool {
        if self.step >= self.last_step {
            self.step = self.last_step;
            true
        } else {
            self.step += 1;
            false
        }
    }

    /// Step back one step; no-op at step 0.
    pub fn retreat(&mut self) {
        self.step = self.step.saturating_sub(1);
    }
}

/// Map raw step input (e.g. from a scrubber) to a usable index.
/// Non-finite values read as 0.
pub fn sanitize_step(raw: f64) -> usize {
    if raw.is_finite() && raw > 0.0 {
        raw as usize
    } else {
        0
    }
}

/// Map a configured tick interval to usable milliseconds.
/// Non-finite or non-positive values fall back to the default.
pub fn sanitize_interval(raw_ms: f64) -> u64 {
    if raw_ms.is_finite() && raw_ms > 0.0 {
        raw_ms as u64
    } else {
        DEFAULT_INTERVAL_MS
    }
}

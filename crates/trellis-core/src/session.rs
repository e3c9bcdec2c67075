//! Render scheduler and session state
//!
//! One `Session` owns everything mutable: the track set, the step cursor and
//! playback state, the completion memo, and the per-track render frames. The
//! host surface reads frames; it is never read back.
//!
//! Two render modes. A full rebuild runs once per load and allocates each
//! track's fixed-capacity frame. An incremental refresh runs on every step
//! change and on every settled resize, rewriting badge, cell classifications,
//! and visible-row counts in place without reallocating cells.

use crate::complete::CompletionMemo;
use crate::cursor::{sanitize_interval, PlaybackCursor, PlaybackState};
use crate::diff::{classify, CellClass};
use crate::error::LoadError;
use crate::layout::{visible_rows, GridPlan};
use crate::track::Track;

/// Resize signals within this window collapse into one refresh.
pub const RESIZE_DEBOUNCE_MS: u64 = 120;

/// A fully loaded track set, installed wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedSet {
    pub question: Option<String>,
    pub tracks: Vec<Track>,
}

/// One render cell: display text plus its classification.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub text: String,
    pub class: CellClass,
}

/// Per-track render state, allocated once per load.
#[derive(Debug, Clone)]
pub struct TrackFrame {
    pub title: String,
    /// Done step to display, or `None` while the badge is hidden.
    pub done_step: Option<usize>,
    pub plan: GridPlan,
    /// Grid rows currently shown; rows beyond stay allocated but hidden.
    pub visible_rows: usize,
    /// Fixed-capacity cell buffer of `plan.total_cells` entries.
    /// Empty for placeholder frames.
    pub cells: Vec<Cell>,
    /// True for a zero-row track, rendered as a "no data" placeholder.
    pub placeholder: bool,
}

impl TrackFrame {
    fn allocate(track: &Track) -> Self {
        let plan = GridPlan::for_track(track);
        let placeholder = track.is_empty();
        Self {
            title: track.title.clone(),
            done_step: None,
            plan,
            visible_rows: 1,
            cells: if placeholder {
                Vec::new()
            } else {
                vec![Cell::default(); plan.total_cells]
            },
            placeholder,
        }
    }
}

/// The session controller: single owner of all playback and render state.
#[derive(Debug, Default)]
pub struct Session {
    tracks: Vec<Track>,
    question: Option<String>,
    cursor: PlaybackCursor,
    playback: PlaybackState,
    interval_ms: u64,
    memo: CompletionMemo,
    frames: Vec<TrackFrame>,
    resize_generation: u64,
    load_in_flight: bool,
    load_error: Option<LoadError>,
}

impl Session {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: sanitize_interval(interval_ms),
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────

    /// Start a load. Overlapping loads are serialized by ignoring the second:
    /// returns `false` (and logs) when one is already in flight.
    ///
    /// Cursor, memo, and playback reset here, before the new set resolves.
    pub fn begin_load(&mut self) -> bool {
        if self.load_in_flight {
            log::warn!("[LOAD] Load already in flight, ignoring request");
            return false;
        }
        self.load_in_flight = true;
        self.playback = PlaybackState::Stopped;
        self.cursor = PlaybackCursor::default();
        self.memo.reset();
        true
    }

    /// Install a load result, replacing the whole prior set atomically.
    pub fn finish_load(&mut self, result: Result<LoadedSet, LoadError>) {
        self.load_in_flight = false;
        match result {
            Ok(set) => {
                log::info!("[LOAD] Installing {} track(s)", set.tracks.len());
                self.question = set.question;
                self.tracks = set.tracks;
                self.load_error = None;
                self.cursor = PlaybackCursor::default();
                self.cursor.set_bounds(self.tracks.iter().map(|t| t.rows.len()));
                self.rebuild();
            }
            Err(e) => {
                log::error!("[LOAD] Load failed: {}", e);
                self.question = None;
                self.tracks.clear();
                self.frames.clear();
                self.cursor = PlaybackCursor::default();
                self.load_error = Some(e);
            }
        }
    }

    // ─────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────

    /// Full rebuild: allocate every track's fixed-capacity frame, then refresh.
    fn rebuild(&mut self) {
        self.frames = self.tracks.iter().map(TrackFrame::allocate).collect();
        self.refresh();
    }

    /// Incremental refresh: rewrite badge, cell classes, and visible-row
    /// counts for the current step. Cell buffers are updated in place.
    fn refresh(&mut self) {
        let step = self.cursor.step();
        let is_initial = step == 0;

        for (track, frame) in self.tracks.iter().zip(self.frames.iter_mut()) {
            frame.done_step = self.memo.evaluate(track, step);
            if frame.placeholder {
                continue;
            }

            let current = track.row_at(step);
            let previous = if is_initial { &[][..] } else { track.row_at(step - 1) };
            frame.visible_rows = visible_rows(current.len(), previous.len());

            for (idx, cell) in frame.cells.iter_mut().enumerate() {
                let cur = current.get(idx).map(String::as_str);
                let prev = previous.get(idx).map(String::as_str);
                cell.class = classify(prev, cur, is_initial);
                cell.text.clear();
                cell.text.push_str(cur.unwrap_or(""));
            }
        }
    }

    // ─────────────────────────────────────────────────
    // Transport
    // ─────────────────────────────────────────────────

    /// Jump to a step, clamped into bounds. Always succeeds.
    pub fn set_step(&mut self, n: usize) {
        self.cursor.set_step(n);
        self.refresh();
    }

    /// Advance one step. At the last step this clamps and stops playback.
    pub fn step_next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        if self.cursor.advance() {
            self.playback = PlaybackState::Stopped;
        }
        self.refresh();
    }

    /// Step back one step; no-op at step 0 or with zero tracks.
    pub fn step_previous(&mut self) {
        if self.tracks.is_empty() || self.cursor.step() == 0 {
            return;
        }
        self.cursor.retreat();
        self.refresh();
    }

    /// Enter Playing; no-op when already playing or with zero tracks.
    pub fn start(&mut self) {
        if self.playback == PlaybackState::Playing || self.tracks.is_empty() {
            return;
        }
        self.playback = PlaybackState::Playing;
    }

    /// Enter Stopped; no-op when already stopped.
    pub fn stop(&mut self) {
        self.playback = PlaybackState::Stopped;
    }

    pub fn toggle_play(&mut self) {
        match self.playback {
            PlaybackState::Playing => self.stop(),
            PlaybackState::Stopped => self.start(),
        }
    }

    /// Change the tick interval. The step is untouched; the player derives
    /// its timer from `(is_playing, interval_ms)`, so a change while playing
    /// tears down the old timer and starts a fresh one in the same update.
    pub fn set_interval(&mut self, raw_ms: f64) {
        self.interval_ms = sanitize_interval(raw_ms);
    }

    // ─────────────────────────────────────────────────
    // Resize debounce
    // ─────────────────────────────────────────────────

    /// Record a resize signal. Returns the new generation; the caller
    /// schedules a delayed settle carrying it. A later signal bumps the
    /// generation, invalidating every earlier pending settle.
    pub fn resize_signalled(&mut self) -> u64 {
        self.resize_generation += 1;
        self.resize_generation
    }

    /// Act on a settled resize. Stale generations are discarded. The refresh
    /// re-evaluates layout at the current step; playback state is untouched.
    pub fn resize_settled(&mut self, generation: u64) -> bool {
        if generation != self.resize_generation {
            return false;
        }
        self.refresh();
        true
    }

    // ─────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────

    pub fn step(&self) -> usize {
        self.cursor.step()
    }

    pub fn last_step(&self) -> usize {
        self.cursor.last_step()
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn is_loading(&self) -> bool {
        self.load_in_flight
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn frames(&self) -> &[TrackFrame] {
        &self.frames
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::CellChange;

    fn track(id: &str, rows: &[&[&str]]) -> Track {
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|t| t.to_string()).collect())
            .collect();
        Track::new(id, id.to_uppercase(), rows)
    }

    fn track_of_len(id: &str, len: usize) -> Track {
        let rows: Vec<Vec<String>> = (0..len).map(|i| vec![format!("w{i}")]).collect();
        Track::new(id, id.to_uppercase(), rows)
    }

    fn session_with(tracks: Vec<Track>) -> Session {
        let mut s = Session::new(500.0);
        assert!(s.begin_load());
        s.finish_load(Ok(LoadedSet {
            question: None,
            tracks,
        }));
        s
    }

    #[test]
    fn test_step_bounds_hold_under_any_sequence() {
        let mut s = session_with(vec![track_of_len("a", 3), track_of_len("b", 5)]);
        assert_eq!(s.last_step(), 4);

        s.set_step(99);
        assert_eq!(s.step(), 4);
        s.step_previous();
        s.step_previous();
        s.set_step(0);
        s.step_previous();
        assert_eq!(s.step(), 0);
        for _ in 0..20 {
            s.step_next();
        }
        assert_eq!(s.step(), 4);
    }

    #[test]
    fn test_step_next_reaches_end_and_stops_playback() {
        let mut s = session_with(vec![track_of_len("a", 3), track_of_len("b", 5)]);
        s.start();
        assert!(s.is_playing());
        for _ in 0..4 {
            s.step_next();
            assert!(s.is_playing());
        }
        assert_eq!(s.step(), 4);
        // Already at the last step: clamps and stops
        s.step_next();
        assert_eq!(s.step(), 4);
        assert!(!s.is_playing());
    }

    #[test]
    fn test_transport_noops_with_zero_tracks() {
        let mut s = Session::new(500.0);
        s.step_next();
        s.step_previous();
        s.start();
        assert_eq!(s.step(), 0);
        assert!(!s.is_playing());
    }

    #[test]
    fn test_zero_length_track_set_bounds() {
        let mut s = session_with(vec![track_of_len("a", 0), track_of_len("b", 7)]);
        assert_eq!(s.last_step(), 6);
        assert!(s.frames()[0].placeholder);
        assert!(s.frames()[0].cells.is_empty());
        s.set_step(6);
        assert!(s.frames()[0].placeholder);
        assert_eq!(s.frames()[0].done_step, None);
    }

    #[test]
    fn test_completion_badge_flicker_is_preserved() {
        let mut s = session_with(vec![track("a", &[&["a"], &["b"], &["a"]])]);
        assert_eq!(s.frames()[0].done_step, Some(0));
        s.set_step(1);
        assert_eq!(s.frames()[0].done_step, None);
        s.set_step(2);
        assert_eq!(s.frames()[0].done_step, Some(0));
    }

    #[test]
    fn test_refresh_never_reallocates_cells() {
        let mut s = session_with(vec![track("a", &[&["a", "b"], &["c"], &["c", "d", "e"]])]);
        let before = s.frames()[0].cells.as_ptr();
        let len = s.frames()[0].cells.len();
        s.set_step(2);
        s.step_previous();
        s.step_next();
        assert_eq!(s.frames()[0].cells.as_ptr(), before);
        assert_eq!(s.frames()[0].cells.len(), len);
    }

    #[test]
    fn test_refresh_classifies_cells_for_current_step() {
        let mut s = session_with(vec![track("a", &[&["a", "b"], &["a", "", "x"]])]);
        // Initial step: no diff marks anywhere
        assert!(s.frames()[0]
            .cells
            .iter()
            .all(|c| matches!(c.class.change, CellChange::Unchanged | CellChange::Empty)));

        s.step_next();
        let cells = &s.frames()[0].cells;
        assert_eq!(cells[0].class.change, CellChange::Unchanged);
        assert_eq!(cells[1].class.change, CellChange::Removed);
        assert_eq!(cells[2].class.change, CellChange::Changed);
        assert_eq!(cells[2].text, "x");
        assert_eq!(cells[3].class.change, CellChange::Empty);
    }

    #[test]
    fn test_visible_rows_follow_step() {
        let wide: Vec<&str> = (0..33).map(|_| "t").collect();
        let mut s = session_with(vec![track("a", &[&["x"], &wide, &["y"]])]);
        assert_eq!(s.frames()[0].plan.total_cells, 33);
        assert_eq!(s.frames()[0].plan.total_rows, 3);
        assert_eq!(s.frames()[0].visible_rows, 1);
        s.step_next();
        assert_eq!(s.frames()[0].visible_rows, 3);
        s.step_next();
        // Previous row still spans three grid rows
        assert_eq!(s.frames()[0].visible_rows, 3);
    }

    #[test]
    fn test_resize_burst_settles_once_with_last_state() {
        let mut s = session_with(vec![track_of_len("a", 5)]);
        let g1 = s.resize_signalled();
        let g2 = s.resize_signalled();
        let g3 = s.resize_signalled();
        assert!(!s.resize_settled(g1));
        assert!(!s.resize_settled(g2));
        assert!(s.resize_settled(g3));
        // Settling does not move the cursor or start playback
        assert_eq!(s.step(), 0);
        assert!(!s.is_playing());
    }

    #[test]
    fn test_overlapping_load_is_ignored() {
        let mut s = Session::new(500.0);
        assert!(s.begin_load());
        assert!(!s.begin_load());
        s.finish_load(Ok(LoadedSet::default()));
        assert!(s.begin_load());
    }

    #[test]
    fn test_load_resets_cursor_memo_and_playback() {
        let mut s = session_with(vec![track("a", &[&["a"], &["b"], &["a"]])]);
        s.set_step(2);
        s.start();
        assert!(s.begin_load());
        assert!(!s.is_playing());
        s.finish_load(Ok(LoadedSet {
            question: None,
            tracks: vec![track("a", &[&["b"], &["a"]])],
        }));
        assert_eq!(s.step(), 0);
        // Fresh memo: done step is re-discovered, not carried over
        s.set_step(1);
        assert_eq!(s.frames()[0].done_step, Some(1));
    }

    #[test]
    fn test_failed_load_clears_everything() {
        let mut s = session_with(vec![track_of_len("a", 4)]);
        assert!(s.begin_load());
        s.finish_load(Err(LoadError::NoValidEntries));
        assert!(!s.has_tracks());
        assert!(s.frames().is_empty());
        assert_eq!(s.last_step(), 0);
        assert_eq!(s.load_error(), Some(&LoadError::NoValidEntries));
    }

    #[test]
    fn test_interval_sanitized_and_changeable_mid_play() {
        let mut s = session_with(vec![track_of_len("a", 5)]);
        assert_eq!(Session::new(-1.0).interval_ms(), 500);
        s.start();
        s.set_step(2);
        s.set_interval(125.0);
        assert_eq!(s.interval_ms(), 125);
        assert!(s.is_playing());
        assert_eq!(s.step(), 2);
    }
}

//! Grid layout sizing
//!
//! Column count is a fixed constant shared by all tracks. Each track gets a
//! grid over-allocated once to its maximum-ever row length; per step, only a
//! prefix of the rows is visible and the rest stay allocated but hidden, so
//! stepping never rebuilds the grid.

use crate::track::Track;

/// Fixed column count for every track grid.
pub const GRID_COLUMNS: usize = 16;

/// Fixed-capacity grid dimensions, computed once per track at first render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    /// Allocated cell count: `max(GRID_COLUMNS, longest row)`.
    pub total_cells: usize,
    /// Allocated row count: `ceil(total_cells / GRID_COLUMNS)`.
    pub total_rows: usize,
}

impl GridPlan {
    pub fn for_track(track: &Track) -> Self {
        let total_cells = track.max_row_len().max(GRID_COLUMNS);
        Self {
            total_cells,
            total_rows: total_cells.div_ceil(GRID_COLUMNS),
        }
    }
}

/// Grid rows actually shown for a step, from the current and previous row
/// lengths: `ceil(max(current, previous, 1) / GRID_COLUMNS)`. The previous
/// row participates so removed cells stay on screen for one step.
pub fn visible_rows(current_len: usize, previous_len: usize) -> usize {
    current_len.max(previous_len).max(1).div_ceil(GRID_COLUMNS)
}

//! Application messages for trellis-player
//!
//! All message types that can be dispatched in the trellis-player application.

use std::sync::Arc;

use trellis_core::{LoadError, LoadedSet};

/// Completed track-set load, wrapped for cheap cloning through iced.
#[derive(Debug, Clone)]
pub struct TrackSetLoadedMsg(pub Arc<Result<LoadedSet, LoadError>>);

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Playback timer tick
    Tick,
    /// Play/pause toggle
    TogglePlay,
    /// Step forward one step
    StepForward,
    /// Step back one step
    StepBack,
    /// Jump to a step (from the scrubber)
    SetStep(f64),
    /// Change the tick interval in milliseconds
    SetInterval(f64),
    /// (Re)load the track set from the configured manifest
    Reload,
    /// Background track-set load completed
    TrackSetLoaded(TrackSetLoadedMsg),
    /// Window resize signal; starts or resets the debounce window
    WindowResized,
    /// Debounce window elapsed for the given resize generation
    ResizeSettled(u64),
}

//! Trellis Core - playback engine for token-track grid animation
//!
//! Everything the player binary needs that is not iced-specific lives here:
//! the track model, the global step cursor and playback state machine, the
//! completion memo, the per-cell diff classifier, the grid layout sizer, and
//! the render scheduler (`Session`).

pub mod complete;
pub mod cursor;
pub mod diff;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod session;
pub mod track;

pub use error::LoadError;
pub use session::{LoadedSet, Session};
pub use track::{Row, Token, Track};

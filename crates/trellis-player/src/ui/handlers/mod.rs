//! Message handlers for trellis-player
//!
//! Each module handles one family of messages; `app::update` dispatches here.

pub mod loading;
pub mod resize;
pub mod tick;
pub mod transport;

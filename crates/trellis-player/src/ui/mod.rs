//! UI module for Trellis
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! Uses a message-passing architecture over a single `Session` owner.

pub mod app;
pub mod handlers;
pub mod message;
pub mod theme;
pub mod track_view;

pub use app::TrellisApp;

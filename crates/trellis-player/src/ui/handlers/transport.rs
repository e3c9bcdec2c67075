//! Transport control handlers
//!
//! Play/pause, manual stepping, scrubbing, and speed changes. Each maps 1:1
//! onto a session operation; the session enforces all the guards (zero
//! tracks, bounds, idempotent terminal behavior).

use iced::Task;

use trellis_core::cursor::sanitize_step;

use crate::ui::app::TrellisApp;
use crate::ui::message::Message;

pub fn handle_toggle_play(app: &mut TrellisApp) -> Task<Message> {
    app.session.toggle_play();
    Task::none()
}

pub fn handle_step_forward(app: &mut TrellisApp) -> Task<Message> {
    app.session.step_next();
    Task::none()
}

pub fn handle_step_back(app: &mut TrellisApp) -> Task<Message> {
    app.session.step_previous();
    Task::none()
}

pub fn handle_set_step(app: &mut TrellisApp, raw: f64) -> Task<Message> {
    app.session.set_step(sanitize_step(raw));
    Task::none()
}

/// Change the tick interval. While playing, the subscription is keyed on the
/// interval, so iced drops the old timer and starts the new one in this same
/// update; no stale tick can fire in between.
pub fn handle_set_interval(app: &mut TrellisApp, raw_ms: f64) -> Task<Message> {
    app.session.set_interval(raw_ms);
    Task::none()
}

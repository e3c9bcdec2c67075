//! Resize debounce handlers
//!
//! Cancel-and-reschedule: every resize signal bumps the session's generation
//! and schedules a settle for itself. Only the settle whose generation is
//! still current triggers the layout refresh, so a burst collapses into one
//! re-render using the state at the last signal. A settled resize never
//! touches the cursor or playback state.

use std::time::Duration;

use iced::Task;

use trellis_core::session::RESIZE_DEBOUNCE_MS;

use crate::ui::app::TrellisApp;
use crate::ui::message::Message;

pub fn handle_resized(app: &mut TrellisApp) -> Task<Message> {
    let generation = app.session.resize_signalled();
    Task::perform(
        tokio::time::sleep(Duration::from_millis(RESIZE_DEBOUNCE_MS)),
        move |_| Message::ResizeSettled(generation),
    )
}

pub fn handle_resize_settled(app: &mut TrellisApp, generation: u64) -> Task<Message> {
    if app.session.resize_settled(generation) {
        log::debug!("[RESIZE] Re-rendered at generation {}", generation);
    }
    Task::none()
}

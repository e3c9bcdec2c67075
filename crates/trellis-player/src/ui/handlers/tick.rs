//! Playback tick handler
//!
//! Each tick advances the shared cursor by one step. Reaching the last step
//! flips the session to Stopped, which also tears down the tick subscription.

use iced::Task;

use crate::ui::app::TrellisApp;
use crate::ui::message::Message;

pub fn handle(app: &mut TrellisApp) -> Task<Message> {
    app.session.step_next();
    Task::none()
}

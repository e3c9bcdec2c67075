//! Track-set loading handlers
//!
//! `Reload` kicks the async loader if no load is in flight (overlapping
//! requests are ignored by the session); `TrackSetLoaded` installs the
//! result wholesale.

use std::sync::Arc;

use iced::Task;

use crate::loader;
use crate::ui::app::TrellisApp;
use crate::ui::message::{Message, TrackSetLoadedMsg};

pub fn handle_reload(app: &mut TrellisApp) -> Task<Message> {
    if !app.session.begin_load() {
        return Task::none();
    }

    app.status = "Loading tracks...".to_string();
    let data = app.config.data.clone();
    Task::perform(loader::load_track_set(data), |result| {
        Message::TrackSetLoaded(TrackSetLoadedMsg(Arc::new(result)))
    })
}

pub fn handle_track_set_loaded(app: &mut TrellisApp, msg: TrackSetLoadedMsg) -> Task<Message> {
    // Extract the result from the Arc wrapper; the subscription delivers to
    // exactly one handler, so sole ownership is the normal case
    let result = match Arc::try_unwrap(msg.0) {
        Ok(r) => r,
        Err(_arc) => {
            log::warn!("TrackSetLoaded result still shared, skipping");
            return Task::none();
        }
    };

    app.status = match &result {
        Ok(set) => {
            let placeholders = set.tracks.iter().filter(|t| t.is_empty()).count();
            if placeholders > 0 {
                format!(
                    "Loaded {} track(s), {} without data",
                    set.tracks.len(),
                    placeholders
                )
            } else {
                format!("Loaded {} track(s)", set.tracks.len())
            }
        }
        Err(e) => format!("Load failed: {}", e),
    };

    app.session.finish_load(result);
    Task::none()
}

//! Main iced application for Trellis
//!
//! This is the entry point for the GUI. It manages:
//! - The session (cursor, completion memo, render frames)
//! - User input handling and message dispatch
//! - Layout of the header controls and per-track grid blocks

use std::time::Duration;

use iced::time;
use iced::widget::{button, column, container, row, scrollable, slider, text, Space};
use iced::{window, Center, Element, Fill, Subscription, Task, Theme};

use trellis_core::Session;

use crate::config::PlayerConfig;
use crate::ui::handlers;
use crate::ui::message::Message;
use crate::ui::track_view;

/// Application state
pub struct TrellisApp {
    /// The playback/render session; single owner of all core state
    pub session: Session,
    /// Loaded player configuration
    pub config: PlayerConfig,
    /// Status message shown in the status bar
    pub status: String,
}

impl TrellisApp {
    /// Create a new application instance
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            session: Session::new(config.playback.interval_ms),
            config,
            status: "Starting up".to_string(),
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => handlers::tick::handle(self),
            Message::TogglePlay => handlers::transport::handle_toggle_play(self),
            Message::StepForward => handlers::transport::handle_step_forward(self),
            Message::StepBack => handlers::transport::handle_step_back(self),
            Message::SetStep(raw) => handlers::transport::handle_set_step(self, raw),
            Message::SetInterval(raw) => handlers::transport::handle_set_interval(self, raw),
            Message::Reload => handlers::loading::handle_reload(self),
            Message::TrackSetLoaded(msg) => handlers::loading::handle_track_set_loaded(self, msg),
            Message::WindowResized => handlers::resize::handle_resized(self),
            Message::ResizeSettled(generation) => {
                handlers::resize::handle_resize_settled(self, generation)
            }
        }
    }

    /// Subscribe to the playback timer and window resize events
    ///
    /// The tick subscription exists only while playing and is keyed on the
    /// interval, so a speed change while playing atomically replaces the
    /// timer without touching the step.
    pub fn subscription(&self) -> Subscription<Message> {
        let resize = iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(window::Event::Resized(_)) => Some(Message::WindowResized),
            _ => None,
        });

        if self.session.is_playing() {
            let tick = time::every(Duration::from_millis(self.session.interval_ms()))
                .map(|_| Message::Tick);
            Subscription::batch([resize, tick])
        } else {
            resize
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = self.view_header();

        let content: Element<'_, Message> = if let Some(err) = self.session.load_error() {
            // Whole-load failure: explanatory message, no tracks rendered
            container(
                column![
                    text("No tracks to show").size(16),
                    text(err.to_string()).size(12),
                ]
                .spacing(6)
                .align_x(Center),
            )
            .width(Fill)
            .height(Fill)
            .align_x(Center)
            .align_y(Center)
            .into()
        } else if !self.session.has_tracks() {
            let message = if self.session.is_loading() {
                "Loading tracks..."
            } else {
                "No tracks loaded"
            };
            container(text(message).size(14))
                .width(Fill)
                .height(Fill)
                .align_x(Center)
                .align_y(Center)
                .into()
        } else {
            let mut blocks = column![].spacing(10);
            for frame in self.session.frames() {
                blocks = blocks.push(track_view::view(frame));
            }
            scrollable(blocks).height(Fill).into()
        };

        let status_bar = container(text(&self.status).size(12)).padding(5);

        let layout = column![header, content, status_bar].spacing(10).padding(10);

        container(layout).width(Fill).height(Fill).into()
    }

    /// View for the header/global controls
    fn view_header(&self) -> Element<'_, Message> {
        let enabled = self.session.has_tracks();
        let title = text("TRELLIS").size(24);

        let play_label = if self.session.is_playing() {
            "Pause"
        } else {
            "Play"
        };
        let transport = row![
            button(text("|<").size(12)).on_press_maybe(enabled.then_some(Message::StepBack)),
            button(text(play_label).size(12)).on_press_maybe(enabled.then_some(Message::TogglePlay)),
            button(text(">|").size(12)).on_press_maybe(enabled.then_some(Message::StepForward)),
            button(text("Reload").size(12)).on_press(Message::Reload),
        ]
        .spacing(6)
        .align_y(Center);

        let step_readout = text(format!(
            "step {} / {}",
            self.session.step(),
            self.session.last_step()
        ))
        .size(14);

        let scrubber = slider(
            0.0..=self.session.last_step() as f64,
            self.session.step() as f64,
            Message::SetStep,
        )
        .step(1.0)
        .width(260);

        let speed_label = text(format!("{} ms/step", self.session.interval_ms())).size(12);
        let speed = slider(
            50.0..=2000.0,
            self.session.interval_ms() as f64,
            Message::SetInterval,
        )
        .step(50.0)
        .width(160);

        let controls = row![
            title,
            transport,
            step_readout,
            scrubber,
            Space::new().width(Fill),
            speed_label,
            speed,
        ]
        .spacing(20)
        .align_y(Center)
        .padding(10);

        if let Some(question) = self.session.question() {
            column![controls, text(question).size(13)]
                .spacing(4)
                .into()
        } else {
            controls.into()
        }
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl Default for TrellisApp {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

//! Trellis - steppable grid playback for parallel token decode tracks
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads the player configuration and theme
//! 2. Launches the iced GUI application
//! 3. Kicks off the initial track-set load

mod config;
mod loader;
mod ui;

use iced::{Size, Task};

use ui::{message::Message, theme, TrellisApp};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("trellis-player starting up");

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);
    log::info!("Data directory: {:?}", config.data.data_dir);

    // Initialize theme from ~/.config/trellis-player/theme.yaml
    theme::init_theme();

    // Wrap the config in a cell so the boot closure can be Fn (required by iced)
    // The boot function is only called once, but iced requires Fn for API consistency
    let config_cell = std::cell::RefCell::new(Some(config));

    iced::application(
        move || {
            let config = config_cell
                .borrow_mut()
                .take()
                .expect("config already taken");
            let app = TrellisApp::new(config);

            // Load the configured track set immediately
            (app, Task::done(Message::Reload))
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Trellis")
    .window_size(Size::new(1100.0, 760.0))
    .run()
}

/// Update function for iced
fn update(app: &mut TrellisApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &TrellisApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &TrellisApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &TrellisApp) -> iced::Theme {
    app.theme()
}

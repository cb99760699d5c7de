use std::sync::Arc;

use iced::{Application, Program as IcedProgram, Settings, Theme};

use crate::messages::Message;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the carousel application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>>
{
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Jupiter")
    .subscription(subscriptions::subscription)
    .font(lucide_icons::lucide_font_bytes())
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(
            config.initial_width,
            bootstrap::INITIAL_WINDOW_HEIGHT,
        ),
        resizable: true,
        decorations: true,
        exit_on_close_request: false,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("jupiter-player".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &State) -> Theme {
    Theme::Dark
}

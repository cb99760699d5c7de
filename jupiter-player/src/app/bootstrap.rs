use std::sync::Arc;

use iced::Task;
use jupiter_core::{CarouselSettings, FrontPageClient, constants};

use crate::carousel;
use crate::messages::Message;
use crate::state::State;

/// Requested window width; the opened window reports the real one.
pub const INITIAL_WINDOW_WIDTH: f32 = 1280.0;
pub const INITIAL_WINDOW_HEIGHT: f32 = 720.0;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub front_page_url: Arc<str>,
    pub settings: CarouselSettings,
    pub initial_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(constants::api::FRONT_PAGE_URL)
    }
}

impl AppConfig {
    pub fn new(front_page_url: impl Into<String>) -> Self {
        Self {
            front_page_url: Arc::from(front_page_url.into()),
            settings: CarouselSettings::default(),
            initial_width: INITIAL_WINDOW_WIDTH,
        }
    }

    pub fn from_environment() -> Self {
        match std::env::var("JUPITER_FRONTPAGE_URL") {
            Ok(url) if !url.trim().is_empty() => {
                log::info!("Using front page endpoint from environment: {}", url);
                Self::new(url)
            }
            _ => Self::default(),
        }
    }
}

/// State with the carousel mounted but nothing fetched yet.
pub fn base_state(config: &AppConfig) -> State {
    let client = match FrontPageClient::with_url(&config.front_page_url) {
        Ok(client) => Some(client),
        Err(err) => {
            log::error!(
                "Failed to create front page client for '{}': {}",
                config.front_page_url,
                err
            );
            None
        }
    };

    let mut state = State::new(config.clone(), client);
    state.mount_carousel();
    state
}

pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let mut state = base_state(config);

    let client = state.client.clone();
    let Some(view) = state.carousel.as_mut() else {
        return (state, Task::none());
    };

    let task = match client {
        Some(client) => carousel::update::start_fetch(view, client),
        None => {
            view.carousel
                .apply_fetch_error("Front page endpoint is not a valid URL");
            Task::none()
        }
    };

    (state, task)
}

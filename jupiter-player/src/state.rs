use jupiter_core::FrontPageClient;

use crate::app::AppConfig;
use crate::carousel::CarouselView;

#[derive(Debug)]
pub struct State {
    pub config: AppConfig,
    /// `None` when the configured endpoint could not be turned into a client.
    pub client: Option<FrontPageClient>,
    pub window_width: f32,
    pub carousel: Option<CarouselView>,
}

impl State {
    pub fn new(config: AppConfig, client: Option<FrontPageClient>) -> Self {
        let window_width = config.initial_width;
        Self {
            config,
            client,
            window_width,
            carousel: None,
        }
    }

    /// Mount a fresh carousel sized for the current window.
    pub fn mount_carousel(&mut self) -> &mut CarouselView {
        self.carousel.insert(CarouselView::new(
            self.config.settings.clone(),
            self.window_width,
        ))
    }

    /// Tear the carousel down. Dropping the view aborts its pending timers
    /// and downloads; the resize subscription ends with it.
    pub fn unmount_carousel(&mut self) {
        if let Some(view) = self.carousel.take() {
            log::debug!(
                "Unmounting carousel with {} pending timers",
                view.pending_timers()
            );
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.carousel.is_some()
    }
}

//! Local message types for carousel interactions

use std::time::Instant;

use iced::widget::{image, scrollable};
use jupiter_core::{Direction, SettleTarget};
use jupiter_model::CategoryPayload;

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    // Data
    FrontPageLoaded(Result<CategoryPayload, String>),
    PosterLoaded(String, Result<image::Handle, String>),

    // Navigation
    ScrollRequested(usize, Direction),
    AnimationTick(Instant),

    // Viewport / scroll reporting
    RowViewportChanged(usize, scrollable::Viewport),
    SettleDue(SettleTarget),
}

impl CarouselMessage {
    pub fn name(&self) -> &'static str {
        match self {
            CarouselMessage::FrontPageLoaded(_) => "Carousel::FrontPageLoaded",
            CarouselMessage::PosterLoaded(_, _) => "Carousel::PosterLoaded",
            CarouselMessage::ScrollRequested(_, _) => "Carousel::ScrollRequested",
            CarouselMessage::AnimationTick(_) => "Carousel::AnimationTick",
            CarouselMessage::RowViewportChanged(_, _) => {
                "Carousel::RowViewportChanged"
            }
            CarouselMessage::SettleDue(_) => "Carousel::SettleDue",
        }
    }
}

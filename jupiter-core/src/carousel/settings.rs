use std::time::Duration;

use crate::constants::{layout, visibility};

/// Lower viewport bound (exclusive) above which `cards` fit on one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub min_width: f32,
    pub cards: usize,
}

/// Tunables for layout and visibility.
///
/// Passed explicitly to the controller and on to the rendering layer; there
/// is no ambient layout state.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    /// Widest first.
    pub breakpoints: Vec<Breakpoint>,
    /// Cards per slide when no breakpoint matches.
    pub narrow_cards: usize,
    pub card_gap: f32,
    /// Combined width of both arrow buttons.
    pub arrows_width: f32,
    /// Combined horizontal page margins.
    pub margins: f32,
    pub margin_left: f32,
    pub edge_tolerance: f32,
    pub resize_settle: Duration,
    pub scroll_settle: Duration,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            breakpoints: layout::BREAKPOINTS
                .iter()
                .map(|&(min_width, cards)| Breakpoint { min_width, cards })
                .collect(),
            narrow_cards: layout::NARROW_CARDS,
            card_gap: layout::CARD_GAP,
            arrows_width: layout::ARROWS_WIDTH,
            margins: layout::MARGINS,
            margin_left: layout::MARGIN_LEFT,
            edge_tolerance: visibility::EDGE_TOLERANCE,
            resize_settle: visibility::RESIZE_SETTLE,
            scroll_settle: visibility::SCROLL_SETTLE,
        }
    }
}

impl CarouselSettings {
    /// Horizontal space taken by arrows and margins.
    pub fn reserved_chrome(&self) -> f32 {
        self.arrows_width + self.margins
    }

    /// Width of a single arrow button slot.
    pub fn arrow_button_width(&self) -> f32 {
        self.arrows_width / 2.0
    }

    /// Cards shown per slide for the given viewport width.
    pub fn cards_per_slide(&self, viewport_width: f32) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| viewport_width > bp.min_width)
            .map(|bp| bp.cards)
            .unwrap_or(self.narrow_cards)
            .max(1)
    }
}

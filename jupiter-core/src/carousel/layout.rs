//! Responsive layout calculator

use super::arrows::RowGeometry;
use super::settings::CarouselSettings;

/// Card sizing derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveLayout {
    pub viewport_width: f32,
    pub cards_per_slide: usize,
    /// Width left for cards once arrows and margins are reserved.
    pub available_width: f32,
    pub card_width: f32,
    pub card_gap: f32,
    /// Distance one arrow press moves a row.
    pub scroll_amount: f32,
}

/// Layout values handed to the renderer so it never re-derives them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutVars {
    pub items_per_slide: usize,
    pub card_gap: f32,
    /// Width of one arrow button.
    pub button_width: f32,
    pub margin_left: f32,
}

impl ResponsiveLayout {
    pub fn compute(viewport_width: f32, settings: &CarouselSettings) -> Self {
        let cards_per_slide = settings.cards_per_slide(viewport_width);
        let gap = settings.card_gap;
        let available_width = viewport_width - settings.reserved_chrome();
        let card_width = (available_width - gap * (cards_per_slide - 1) as f32)
            / cards_per_slide as f32;
        let scroll_amount = cards_per_slide as f32 * (card_width + gap);

        Self {
            viewport_width,
            cards_per_slide,
            available_width,
            card_width,
            card_gap: gap,
            scroll_amount,
        }
    }

    pub fn vars(&self, settings: &CarouselSettings) -> LayoutVars {
        LayoutVars {
            items_per_slide: self.cards_per_slide,
            card_gap: self.card_gap,
            button_width: settings.arrow_button_width(),
            margin_left: settings.margin_left,
        }
    }

    /// Card width for rendering; never negative on tiny viewports.
    pub fn render_card_width(&self) -> f32 {
        self.card_width.max(0.0)
    }

    /// Total width of a strip holding `item_count` cards.
    pub fn strip_width(&self, item_count: usize) -> f32 {
        if item_count == 0 {
            return 0.0;
        }
        item_count as f32 * self.render_card_width()
            + (item_count - 1) as f32 * self.card_gap
    }

    /// Geometry a freshly laid out strip has before it reports its own.
    pub fn strip_geometry(&self, item_count: usize) -> RowGeometry {
        RowGeometry {
            padding_left: 0.0,
            padding_right: 0.0,
            scroll_offset: 0.0,
            visible_width: self.available_width.max(0.0),
            scroll_width: self.strip_width(item_count),
        }
    }
}

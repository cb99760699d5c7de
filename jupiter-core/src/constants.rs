//! Carousel constants
//!
//! Defaults for the data service, the responsive layout and the settle
//! timings. [`crate::carousel::CarouselSettings::default`] is built from
//! these so every consumer starts from the same numbers.

/// Data service defaults.
pub mod api {
    use std::time::Duration;

    /// Category listing for the Jupiter `video` front page.
    pub const FRONT_PAGE_URL: &str = "https://services.err.ee/api/v2/category/getByUrl?url=video&domain=jupiter.err.ee";
    /// Whole-request timeout for the HTTP client.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    /// Upper bound on the response body kept in a status error.
    pub const ERROR_BODY_LIMIT: usize = 512;
    pub const USER_AGENT: &str =
        concat!("jupiter-carousel/", env!("CARGO_PKG_VERSION"));
}

/// Responsive layout defaults (pixels).
pub mod layout {
    /// Gap between two neighbouring cards.
    pub const CARD_GAP: f32 = 8.0;
    /// Combined width of the left and right arrow buttons.
    pub const ARROWS_WIDTH: f32 = 96.0;
    /// Combined horizontal page margins.
    pub const MARGINS: f32 = 32.0;
    /// Left page margin published to the renderer.
    pub const MARGIN_LEFT: f32 = 16.0;

    /// `(exclusive lower bound of viewport width, cards per slide)`,
    /// widest first.
    pub const BREAKPOINTS: [(f32, usize); 3] =
        [(1400.0, 7), (1000.0, 5), (600.0, 3)];
    /// Cards per slide below the narrowest breakpoint.
    pub const NARROW_CARDS: usize = 2;
}

/// Arrow visibility and settle timing defaults.
pub mod visibility {
    use std::time::Duration;

    /// Absorbs sub-pixel rounding in reported scroll geometry.
    pub const EDGE_TOLERANCE: f32 = 2.0;
    /// Wait after a viewport resize before re-measuring all rows.
    pub const RESIZE_SETTLE: Duration = Duration::from_millis(100);
    /// Wait after a scroll command before re-measuring the row.
    pub const SCROLL_SETTLE: Duration = Duration::from_millis(400);
}

//! Core library for the Jupiter front page carousel.
//!
//! The crate is toolkit independent: it owns the data service that fetches
//! the category payload, and the carousel logic (row filtering, responsive
//! layout, arrow visibility and scroll commands). A rendering layer feeds it
//! viewport events and renders the values it derives.

pub mod api;
pub mod carousel;
pub mod constants;
pub mod error;

pub use api::{FrontPageClient, FrontPageSource};
pub use carousel::{
    ArrowVisibility, CarouselSettings, Direction, LayoutVars, LoadState,
    MediaRowCarousel, ResponsiveLayout, RowGeometry, ScrollCommand,
    SettleCheck, SettleTarget, filter_rows,
};
pub use error::{FetchError, Result};

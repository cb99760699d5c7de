//! Media row carousel logic.
//!
//! Everything here is single-threaded arithmetic over values reported by the
//! rendering layer. The [`MediaRowCarousel`] controller keeps the per-row
//! state and tells the caller when a delayed re-measure is due; the caller
//! owns the actual timers and scroll animation.

pub mod arrows;
pub mod controller;
pub mod layout;
pub mod rows;
pub mod settings;

pub use arrows::{ArrowVisibility, Direction, RowGeometry};
pub use controller::{
    LoadState, MediaRowCarousel, ScrollCommand, SettleCheck, SettleTarget,
};
pub use layout::{LayoutVars, ResponsiveLayout};
pub use rows::filter_rows;
pub use settings::{Breakpoint, CarouselSettings};

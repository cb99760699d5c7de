//! Front page media row carousel
//!
//! [`CarouselView`] wraps the toolkit independent controller from
//! `jupiter-core` with the iced resources it needs: scroll container ids,
//! tween animators, poster handles and cancellable timers.

pub mod animator;
pub mod messages;
pub mod posters;
pub mod state;
pub mod update;
pub mod view;

pub use messages::CarouselMessage;
pub use state::CarouselView;
pub use view::front_page;

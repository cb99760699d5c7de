//! Jupiter player library
//!
//! Desktop shell around the front page media row carousel. The executable in
//! `src/main.rs` only configures logging and runs [`app::application`]; the
//! modules are exposed as a library so update logic can be tested without a
//! window.

pub mod app;
pub mod carousel;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;

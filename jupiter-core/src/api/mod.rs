//! Front page data service.

mod client;

pub use client::FrontPageClient;

use async_trait::async_trait;
use jupiter_model::CategoryPayload;

use crate::error::Result;

/// Anything that can produce the front page category payload.
///
/// [`FrontPageClient`] is the HTTP implementation; tests and the player's
/// offline presets substitute fixed payloads.
#[async_trait]
pub trait FrontPageSource: Send + Sync + std::fmt::Debug {
    /// Fetch the full, unfiltered category payload.
    async fn fetch_front_page(&self) -> Result<CategoryPayload>;
}

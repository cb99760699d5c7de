use async_trait::async_trait;
use jupiter_model::CategoryPayload;
use reqwest::{Client, Response};
use tracing::{debug, info, warn};
use url::Url;

use super::FrontPageSource;
use crate::constants::api;
use crate::error::{FetchError, Result};

/// HTTP client for the category endpoint.
///
/// Issues a single unauthenticated GET per call. There is no retry, no
/// caching and no pagination; failures are returned to the caller as
/// [`FetchError`].
#[derive(Debug, Clone)]
pub struct FrontPageClient {
    client: Client,
    url: Url,
}

impl FrontPageClient {
    /// Client for the default Jupiter front page endpoint.
    pub fn new() -> Result<Self> {
        Self::with_url(api::FRONT_PAGE_URL)
    }

    /// Client for a custom endpoint, e.g. a local mirror.
    pub fn with_url(url: &str) -> Result<Self> {
        let url = Url::parse(url.trim())?;
        let client = Client::builder()
            .timeout(api::REQUEST_TIMEOUT)
            .user_agent(api::USER_AGENT)
            .build()?;

        info!(%url, "Creating front page client");

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Download the raw bytes behind a card poster URL.
    pub async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url)?;
        debug!(%url, "GET poster");

        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl FrontPageSource for FrontPageClient {
    async fn fetch_front_page(&self) -> Result<CategoryPayload> {
        debug!(url = %self.url, "GET front page");

        let response = self.client.get(self.url.clone()).send().await?;
        let response = ensure_success(response).await?;
        let body = response.bytes().await?;

        let payload: CategoryPayload = serde_json::from_slice(&body)?;
        info!(
            rows = payload.front_page().len(),
            bytes = body.len(),
            "Fetched front page"
        );
        Ok(payload)
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let mut body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    truncate_at_char_boundary(&mut body, api::ERROR_BODY_LIMIT);

    warn!(status = status.as_u16(), "Front page request failed");
    Err(FetchError::Status {
        status: status.as_u16(),
        body,
    })
}

fn truncate_at_char_boundary(text: &mut String, limit: usize) {
    if text.len() <= limit {
        return;
    }
    let mut cut = limit;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}

//! Video title lookup via the oEmbed endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::VIDEO_TITLE_PLACEHOLDER;
use crate::errors::{Error, Result, StoreError};

const OEMBED_URL: &str = "https://www.youtube.com/oembed";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: Option<String>,
}

/// Trait for looking up display titles for video ids.
#[async_trait]
pub trait VideoMetadataProvider: Send + Sync {
    /// Returns the display title for a canonical video id.
    async fn get_title(&self, video_id: &str) -> Result<String>;
}

/// oEmbed-backed title provider.
pub struct OEmbedClient {
    client: Client,
}

impl OEmbedClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for OEmbedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoMetadataProvider for OEmbedClient {
    async fn get_title(&self, video_id: &str) -> Result<String> {
        let url = format!(
            "{}?url=https://www.youtube.com/watch?v={}&format=json",
            OEMBED_URL, video_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(StoreError::Network)?;

        if !response.status().is_success() {
            return Err(Error::Metadata(format!(
                "oEmbed returned status {}",
                response.status()
            )));
        }

        let body: OEmbedResponse = response.json().await.map_err(StoreError::Network)?;
        Ok(body
            .title
            .unwrap_or_else(|| VIDEO_TITLE_PLACEHOLDER.to_string()))
    }
}

/// Resolves a title, degrading to the fixed placeholder on any failure.
/// Playback is unaffected either way.
pub async fn title_or_placeholder(provider: &dyn VideoMetadataProvider, video_id: &str) -> String {
    match provider.get_title(video_id).await {
        Ok(title) => title,
        Err(e) => {
            warn!("Failed to fetch video title for {}: {}", video_id, e);
            VIDEO_TITLE_PLACEHOLDER.to_string()
        }
    }
}

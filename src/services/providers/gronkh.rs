//! GronkhTV API client
//!
//! Thin reqwest wrapper around the three `api.gronkh.tv` endpoints the addon
//! consumes. Non-success statuses are surfaced as `AppError::ExternalApi`
//! carrying the status and response body.

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::gronkh::{PlaylistResponse, SearchResponse, Video, VideoInfo},
    services::providers::VideoProvider,
};

/// Number of catalog entries requested per page
pub const PAGE_SIZE: u32 = 24;

#[derive(Debug, Clone)]
pub struct GronkhClient {
    http_client: HttpClient,
    api_url: String,
}

impl GronkhClient {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }

    /// Checks the response status, pulling the body into the error on failure.
    async fn ensure_success(response: reqwest::Response) -> AppResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::ExternalApi(format!(
            "GronkhTV API returned status {}: {}",
            status, body
        )))
    }
}

#[async_trait::async_trait]
impl VideoProvider for GronkhClient {
    async fn search(&self, query: &str, offset: u32) -> AppResult<Vec<Video>> {
        let url = format!("{}/v1/search", self.api_url);

        let mut params = vec![
            ("first", PAGE_SIZE.to_string()),
            ("offset", offset.to_string()),
            ("direction", "desc".to_string()),
            ("sort", "date".to_string()),
        ];
        if !query.is_empty() {
            params.push(("query", query.to_string()));
        }

        let response = self.http_client.get(&url).query(&params).send().await?;
        let response = Self::ensure_success(response).await?;

        let search: SearchResponse = response.json().await?;
        Ok(search.results.videos)
    }

    async fn video_info(&self, episode: &str) -> AppResult<VideoInfo> {
        let url = format!("{}/v1/video/info", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("episode", episode)])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        Ok(response.json().await?)
    }

    async fn playlist(&self, episode: &str) -> AppResult<PlaylistResponse> {
        let url = format!("{}/v1/video/playlist", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("episode", episode)])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        // Keep the raw body so a response without playlist_url can be diagnosed.
        let body = response.text().await?;
        tracing::debug!(response = %body, "Raw playlist response");

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, response = %body, "Failed to parse playlist response");
            AppError::ExternalApi(format!("Failed to parse playlist response: {}", e))
        })
    }
}

//! Upstream video API abstraction.
//!
//! The addon handlers only speak the [`VideoProvider`] trait, keeping the HTTP
//! client swappable and letting tests substitute a scripted implementation.

use crate::{
    error::AppResult,
    models::gronkh::{PlaylistResponse, Video, VideoInfo},
};

pub mod gronkh;

/// Trait for the upstream video API
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VideoProvider: Send + Sync {
    /// Fetch a page of videos sorted by date, newest first.
    ///
    /// `query` filters the results when non-empty; `offset` skips past earlier
    /// pages.
    async fn search(&self, query: &str, offset: u32) -> AppResult<Vec<Video>>;

    /// Fetch full info for one episode.
    async fn video_info(&self, episode: &str) -> AppResult<VideoInfo>;

    /// Fetch the playlist resource for one episode.
    async fn playlist(&self, episode: &str) -> AppResult<PlaylistResponse>;
}

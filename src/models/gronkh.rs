//! Typed records for the GronkhTV HTTP API.
//!
//! Upstream payloads are not guaranteed to carry every field, so every field
//! deserializes with a default (empty string, zero, empty list) instead of
//! failing the whole response.

use serde::Deserialize;

/// Response of `GET /v1/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: SearchResults,
}

/// Results container of a search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// A single video as returned by search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub episode: u64,
    /// Composite title, typically `"<show> - <episode title>"`
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub preview_url: String,
    #[serde(default)]
    pub views: u64,
    /// Duration in seconds
    #[serde(default)]
    pub video_length: u64,
    /// RFC 3339 creation timestamp
    #[serde(default)]
    pub created_at: String,
}

/// Response of `GET /v1/video/info`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub episode: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub preview_url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// A named segment within an episode
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub title: String,
}

/// Response of `GET /v1/video/playlist`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistResponse {
    #[serde(default)]
    pub playlist_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "results": {
                "videos": [{
                    "episode": 900,
                    "title": "GronkhTV - Show Title",
                    "preview_url": "http://x/p.jpg",
                    "views": 10,
                    "video_length": 120,
                    "created_at": "2023-01-01T00:00:00Z"
                }]
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let videos = response.results.videos;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].episode, 900);
        assert_eq!(videos[0].title, "GronkhTV - Show Title");
        assert_eq!(videos[0].views, 10);
        assert_eq!(videos[0].video_length, 120);
    }

    #[test]
    fn test_search_response_missing_results_container() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.videos.is_empty());
    }

    #[test]
    fn test_video_missing_fields_are_defaulted() {
        let video: Video = serde_json::from_str(r#"{"episode": 7}"#).unwrap();
        assert_eq!(video.episode, 7);
        assert_eq!(video.title, "");
        assert_eq!(video.views, 0);
        assert_eq!(video.created_at, "");
    }

    #[test]
    fn test_video_info_missing_chapters() {
        let info: VideoInfo =
            serde_json::from_str(r#"{"episode": 900, "title": "GronkhTV - X"}"#).unwrap();
        assert!(info.chapters.is_empty());
    }

    #[test]
    fn test_playlist_response_without_url() {
        let playlist: PlaylistResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(playlist.playlist_url, None);
    }

    #[test]
    fn test_playlist_response_with_url() {
        let playlist: PlaylistResponse =
            serde_json::from_str(r#"{"playlist_url": "https://cdn/x.m3u8"}"#).unwrap();
        assert_eq!(playlist.playlist_url.as_deref(), Some("https://cdn/x.m3u8"));
    }
}

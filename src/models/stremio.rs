//! Stremio addon protocol records and the mapping from upstream videos.

use chrono::DateTime;
use serde::Serialize;

use super::gronkh::{Chapter, Video, VideoInfo};
use super::EpisodeId;

/// Media kind served by this addon
pub const MEDIA_TYPE: &str = "series";
/// The single catalog the addon advertises
pub const CATALOG_ID: &str = "gronkh_catalog";

/// Chapter name used for non-gameplay sections, excluded from descriptions
const FILLER_CHAPTER: &str = "Just Chatting";

/// Addon manifest served at `/manifest.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub types: Vec<&'static str>,
    pub catalogs: Vec<ManifestCatalog>,
    pub resources: Vec<&'static str>,
    pub id_prefixes: Vec<String>,
}

/// A catalog advertised in the manifest
#[derive(Debug, Clone, Serialize)]
pub struct ManifestCatalog {
    #[serde(rename = "type")]
    pub media_type: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub extra: Vec<ManifestExtra>,
}

/// An extra property supported by a catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestExtra {
    pub name: &'static str,
    pub is_required: bool,
}

impl Manifest {
    /// The manifest advertised by this addon.
    pub fn new() -> Self {
        Self {
            id: "net.werwolv.gronkhtv",
            version: env!("CARGO_PKG_VERSION"),
            name: "GronkhTV",
            description: "Watch GronkhTV episodes directly in Stremio",
            types: vec![MEDIA_TYPE],
            catalogs: vec![ManifestCatalog {
                media_type: MEDIA_TYPE,
                id: CATALOG_ID,
                name: "GronkhTV",
                extra: vec![
                    ManifestExtra {
                        name: "search",
                        is_required: false,
                    },
                    ManifestExtra {
                        name: "skip",
                        is_required: false,
                    },
                ],
            }],
            resources: vec!["catalog", "meta", "stream"],
            id_prefixes: vec![format!("{}:", super::ID_PREFIX)],
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog entry (Stremio meta preview)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: &'static str,
    pub name: String,
    pub poster: String,
    pub poster_shape: &'static str,
    pub description: String,
    pub release_info: String,
}

impl From<Video> for MetaPreview {
    fn from(video: Video) -> Self {
        let minutes = video.video_length / 60;
        Self {
            id: EpisodeId::new(video.episode).to_string(),
            media_type: MEDIA_TYPE,
            name: display_name(video.episode, &video.title),
            poster: video.preview_url,
            poster_shape: "landscape",
            description: format!("Views: {} · Length: {} min", video.views, minutes),
            release_info: release_date(&video.created_at),
        }
    }
}

/// Full detail record (Stremio meta)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDetail {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: &'static str,
    pub name: String,
    pub poster: String,
    pub poster_shape: &'static str,
    pub background: String,
    pub description: String,
    pub release_info: String,
}

impl MetaDetail {
    /// Builds the detail record for a fetched episode. The preview image
    /// doubles as poster and background.
    pub fn from_info(id: &EpisodeId, info: VideoInfo) -> Self {
        Self {
            id: id.to_string(),
            media_type: MEDIA_TYPE,
            name: display_name(info.episode, &info.title),
            poster: info.preview_url.clone(),
            poster_shape: "landscape",
            background: info.preview_url,
            description: chapter_description(&info.chapters),
            release_info: release_date(&info.created_at),
        }
    }
}

/// Stream descriptor pointing at an episode playlist
#[derive(Debug, Clone, Serialize)]
pub struct Stream {
    pub title: String,
    pub name: String,
    pub url: String,
}

impl Stream {
    pub fn new(episode: &str, url: String) -> Self {
        Self {
            title: format!("GronkhTV - episode {episode}"),
            name: episode.to_string(),
            url,
        }
    }
}

/// Catalog response envelope
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

/// Detail response envelope; `meta` is `null` when the episode is unknown
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetaResponse {
    pub meta: Option<MetaDetail>,
}

/// Stream response envelope
#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamResponse {
    pub streams: Vec<Stream>,
}

/// Display name shown in catalog and detail views: episode number in brackets,
/// followed by the title text after the first `" - "` separator. Composite
/// upstream titles lead with the show name; titles without the separator are
/// used as-is.
fn display_name(episode: u64, title: &str) -> String {
    let episode_title = title.split_once(" - ").map_or(title, |(_, rest)| rest);
    format!("[{episode}] {episode_title}")
}

/// Joins chapter titles into the episode description, skipping the filler
/// chapter and empty titles. No chapters left over yields the bare prefix.
fn chapter_description(chapters: &[Chapter]) -> String {
    let games: Vec<&str> = chapters
        .iter()
        .filter(|c| !c.title.is_empty() && c.title != FILLER_CHAPTER)
        .map(|c| c.title.as_str())
        .collect();

    if games.is_empty() {
        "Spiele".to_string()
    } else {
        format!("Spiele: {}", games.join(", "))
    }
}

/// Renders the upstream creation timestamp as a German-locale date.
/// Unparseable input is passed through untouched.
fn release_date(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|date| date.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapters(titles: &[&str]) -> Vec<Chapter> {
        titles
            .iter()
            .map(|t| Chapter {
                title: t.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_meta_preview_from_video() {
        let video = Video {
            episode: 900,
            title: "GronkhTV - Show Title".to_string(),
            preview_url: "http://x/p.jpg".to_string(),
            views: 10,
            video_length: 120,
            created_at: "2023-01-01T00:00:00Z".to_string(),
        };

        let meta = MetaPreview::from(video);
        assert_eq!(meta.id, "grnk:900");
        assert_eq!(meta.media_type, "series");
        assert_eq!(meta.name, "[900] Show Title");
        assert_eq!(meta.poster, "http://x/p.jpg");
        assert_eq!(meta.poster_shape, "landscape");
        assert_eq!(meta.description, "Views: 10 · Length: 2 min");
        assert_eq!(meta.release_info, "01.01.2023");
    }

    #[test]
    fn test_display_name_without_separator() {
        assert_eq!(display_name(12, "Standalone"), "[12] Standalone");
    }

    #[test]
    fn test_display_name_takes_text_after_first_separator() {
        assert_eq!(
            display_name(5, "GronkhTV - Part One - Part Two"),
            "[5] Part One - Part Two"
        );
    }

    #[test]
    fn test_chapter_description_skips_filler() {
        let description = chapter_description(&chapters(&["Just Chatting", "Elden Ring"]));
        assert_eq!(description, "Spiele: Elden Ring");
    }

    #[test]
    fn test_chapter_description_joins_in_order() {
        let description =
            chapter_description(&chapters(&["Elden Ring", "Just Chatting", "Factorio"]));
        assert_eq!(description, "Spiele: Elden Ring, Factorio");
    }

    #[test]
    fn test_chapter_description_empty() {
        assert_eq!(chapter_description(&[]), "Spiele");
    }

    #[test]
    fn test_chapter_description_only_filler() {
        assert_eq!(chapter_description(&chapters(&["Just Chatting"])), "Spiele");
    }

    #[test]
    fn test_meta_detail_reuses_preview_image() {
        let id = EpisodeId::new(900);
        let info = VideoInfo {
            episode: 900,
            title: "GronkhTV - Show Title".to_string(),
            preview_url: "http://x/p.jpg".to_string(),
            created_at: "2023-01-01T00:00:00Z".to_string(),
            chapters: vec![],
        };

        let detail = MetaDetail::from_info(&id, info);
        assert_eq!(detail.id, "grnk:900");
        assert_eq!(detail.poster, detail.background);
        assert_eq!(detail.description, "Spiele");
    }

    #[test]
    fn test_release_date_rendering() {
        assert_eq!(release_date("2023-01-01T00:00:00Z"), "01.01.2023");
        assert_eq!(release_date("2024-12-24T18:30:00+01:00"), "24.12.2024");
    }

    #[test]
    fn test_release_date_passthrough_on_bad_input() {
        assert_eq!(release_date("not a date"), "not a date");
        assert_eq!(release_date(""), "");
    }

    #[test]
    fn test_stream_descriptor() {
        let stream = Stream::new("900", "https://cdn/x.m3u8".to_string());
        assert_eq!(stream.title, "GronkhTV - episode 900");
        assert_eq!(stream.name, "900");
        assert_eq!(stream.url, "https://cdn/x.m3u8");
    }

    #[test]
    fn test_manifest_serialization() {
        let json = serde_json::to_value(Manifest::new()).unwrap();
        assert_eq!(json["id"], "net.werwolv.gronkhtv");
        assert_eq!(json["idPrefixes"][0], "grnk:");
        assert_eq!(json["catalogs"][0]["type"], "series");
        assert_eq!(json["catalogs"][0]["id"], "gronkh_catalog");
        assert_eq!(json["catalogs"][0]["extra"][0]["isRequired"], false);
    }

    #[test]
    fn test_meta_preview_serialization_field_names() {
        let meta = MetaPreview::from(Video::default());
        let json = serde_json::to_value(meta).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("posterShape").is_some());
        assert!(json.get("releaseInfo").is_some());
    }

    #[test]
    fn test_meta_response_null_when_unknown() {
        let json = serde_json::to_string(&MetaResponse::default()).unwrap();
        assert_eq!(json, r#"{"meta":null}"#);
    }
}

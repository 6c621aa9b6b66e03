use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::models::{
    stremio::{CATALOG_ID, MEDIA_TYPE},
    CatalogResponse, EpisodeId, Manifest, MetaDetail, MetaPreview, MetaResponse, Stream,
    StreamResponse,
};

use super::AppState;

/// Extra properties of a catalog request, parsed from the optional
/// `search=…&skip=…` path segment.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogExtra {
    #[serde(default)]
    search: String,
    #[serde(default)]
    skip: String,
}

impl CatalogExtra {
    /// Parses the extra path segment; anything unparseable means no extras.
    fn parse(segment: &str) -> Self {
        serde_urlencoded::from_str(segment).unwrap_or_default()
    }

    /// Pagination offset; non-numeric input counts as zero.
    fn offset(&self) -> u32 {
        self.skip.parse().unwrap_or(0)
    }
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Serves the addon manifest.
pub async fn manifest() -> Json<Manifest> {
    Json(Manifest::new())
}

/// Catalog request without an extra segment.
pub async fn catalog(
    State(state): State<AppState>,
    Path((media_type, id)): Path<(String, String)>,
) -> Json<CatalogResponse> {
    lookup_catalog(state, &media_type, &id, CatalogExtra::default()).await
}

/// Catalog request carrying `search`/`skip` extras.
pub async fn catalog_with_extra(
    State(state): State<AppState>,
    Path((media_type, id, extra)): Path<(String, String, String)>,
) -> Json<CatalogResponse> {
    let extra = CatalogExtra::parse(extra.trim_end_matches(".json"));
    lookup_catalog(state, &media_type, &id, extra).await
}

/// Fetches a page of episodes and maps them into catalog entries.
///
/// Requests for any other type or catalog are routine Stremio probes and
/// return empty without logging. Upstream failures are logged and likewise
/// collapse to an empty catalog.
async fn lookup_catalog(
    state: AppState,
    media_type: &str,
    id: &str,
    extra: CatalogExtra,
) -> Json<CatalogResponse> {
    if media_type != MEDIA_TYPE || id.trim_end_matches(".json") != CATALOG_ID {
        return Json(CatalogResponse::default());
    }

    match state.provider.search(&extra.search, extra.offset()).await {
        Ok(videos) => {
            let metas = videos.into_iter().map(MetaPreview::from).collect();
            Json(CatalogResponse { metas })
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                search = %extra.search,
                offset = extra.offset(),
                "Catalog lookup failed"
            );
            Json(CatalogResponse::default())
        }
    }
}

/// Detail request for one episode.
pub async fn meta(
    State(state): State<AppState>,
    Path((_media_type, id)): Path<(String, String)>,
) -> Json<MetaResponse> {
    let Some(episode_id) = EpisodeId::parse(id.trim_end_matches(".json")) else {
        return Json(MetaResponse::default());
    };

    match state.provider.video_info(episode_id.episode()).await {
        Ok(info) => Json(MetaResponse {
            meta: Some(MetaDetail::from_info(&episode_id, info)),
        }),
        Err(e) => {
            tracing::error!(error = %e, id = %episode_id, "Detail lookup failed");
            Json(MetaResponse::default())
        }
    }
}

/// Stream request for one episode.
pub async fn stream(
    State(state): State<AppState>,
    Path((_media_type, id)): Path<(String, String)>,
) -> Json<StreamResponse> {
    let Some(episode_id) = EpisodeId::parse(id.trim_end_matches(".json")) else {
        return Json(StreamResponse::default());
    };
    let episode = episode_id.episode();

    match state.provider.playlist(episode).await {
        Ok(playlist) => match playlist.playlist_url {
            Some(url) => Json(StreamResponse {
                streams: vec![Stream::new(episode, url)],
            }),
            None => {
                tracing::warn!(episode = %episode, "No playlist_url in upstream response");
                Json(StreamResponse::default())
            }
        },
        Err(e) => {
            tracing::error!(error = %e, episode = %episode, "Stream resolution failed");
            Json(StreamResponse::default())
        }
    }
}

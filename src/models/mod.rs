use std::fmt::{self, Display};

pub mod gronkh;
pub mod stremio;

pub use stremio::{CatalogResponse, Manifest, MetaDetail, MetaPreview, MetaResponse, Stream, StreamResponse};

/// Namespace prefix for identifiers minted by this addon
pub const ID_PREFIX: &str = "grnk";

/// Identifier for a GronkhTV episode in the addon's namespace.
///
/// Rendered as `grnk:<episode>`. Decoding takes the final colon-delimited
/// segment, so identifiers carrying extra separators still resolve to their
/// episode number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Creates an identifier from an upstream episode number.
    pub fn new(episode: impl Display) -> Self {
        Self(episode.to_string())
    }

    /// Recovers the episode number from an identifier string.
    ///
    /// Returns `None` when the final segment is empty (e.g. `"grnk:"`).
    pub fn parse(id: &str) -> Option<Self> {
        match id.rsplit(':').next() {
            Some(episode) if !episode.is_empty() => Some(Self(episode.to_string())),
            _ => None,
        }
    }

    /// The bare episode number, without the namespace prefix.
    pub fn episode(&self) -> &str {
        &self.0
    }
}

impl Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", ID_PREFIX, self.0)
    }
}

use std::sync::Arc;

use crate::services::providers::VideoProvider;

/// Shared application state handed to every handler.
///
/// Holds only the upstream provider; handlers are stateless beyond it, so the
/// state is a cheap clone per request.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn VideoProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn VideoProvider>) -> Self {
        Self { provider }
    }
}

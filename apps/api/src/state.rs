use std::sync::Arc;

use crate::catalog::loader::CatalogSource;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Dataset source. Read fresh per request; nothing is cached here.
    pub catalog: Arc<dyn CatalogSource>,
}

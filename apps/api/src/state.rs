use std::sync::Arc;

use crate::config::Config;
use crate::presentation::Theme;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Tier / tip-status treatment table returned with every composed report.
    pub theme: Arc<Theme>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            theme: Arc::new(Theme::default()),
        }
    }
}

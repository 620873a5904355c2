use std::sync::Arc;

use crate::analysis::analyzer::ClauseAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Clause analyzer over the configured oracle. Shared by single and batch routes.
    pub analyzer: Arc<ClauseAnalyzer>,
    pub config: Config,
}

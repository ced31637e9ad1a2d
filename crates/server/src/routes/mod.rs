//! API route handlers for the visigen server.

pub mod analyze;
pub mod health;
pub mod metrics;
pub mod templates;
pub mod themes;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined router.
///
/// Routes:
/// - GET  /api/health - Health check
/// - POST /api/analyze - Analyze content, returns a ContentAnalysis
/// - GET  /api/themes - Theme catalog
/// - GET  /api/themes/{id} - One theme
/// - GET  /api/templates - Suggestion template gallery
/// - GET  /metrics - Prometheus metrics
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", analyze::router())
        .nest("/api", themes::router())
        .nest("/api", templates::router())
        .merge(metrics::router())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn test_api_routes_creation() {
        let state = AppState::new(ServerConfig::default()).unwrap();
        let _router = api_routes(state);
    }
}

// crates/server/src/routes/health.rs
//! Liveness plus a summary of how analyses are being served.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::metrics::record_request;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    /// Name of the provider answering `/api/analyze`.
    pub provider: String,
    pub cache_enabled: bool,
}

impl HealthResponse {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: state.uptime_secs(),
            provider: state.provider.name().to_string(),
            cache_enabled: state.config.cache_enabled,
        }
    }
}

/// GET /api/health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    record_request("health", 200);
    Json(HealthResponse::from_state(&state))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use visigen_core::ProviderKind;

    #[test]
    fn test_reports_rule_based_with_cache() {
        let state = AppState::new(ServerConfig::default()).unwrap();
        let health = HealthResponse::from_state(&state);
        assert_eq!(health.status, "ok");
        assert_eq!(health.provider, "rule-based");
        assert!(health.cache_enabled);
    }

    #[test]
    fn test_reports_degraded_external_provider() {
        let state = AppState::new(ServerConfig {
            provider: ProviderKind::External,
            cache_enabled: false,
            ..Default::default()
        })
        .unwrap();
        let json = serde_json::to_value(HealthResponse::from_state(&state)).unwrap();
        // no primary was created, so the fallback answers
        assert_eq!(json["provider"], "rule-based");
        assert_eq!(json["cache_enabled"], false);
        assert!(json["uptime_secs"].is_u64());
    }
}

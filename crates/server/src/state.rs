// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use visigen_core::{
    create_provider, AnalysisError, AnalysisProvider, ContentAnalyzer, FallbackProvider,
    InMemoryAnalysisCache, ProviderConfig, ProviderKind, RuleBasedProvider,
};

use crate::config::ServerConfig;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Provider that serves `/api/analyze`.
    pub provider: Arc<dyn AnalysisProvider>,
    pub config: ServerConfig,
}

impl AppState {
    /// Build the analyzer, cache, and provider chain described by `config`.
    ///
    /// An unavailable external provider is not fatal: requests degrade to the
    /// rule-based analyzer.
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, AnalysisError> {
        let mut analyzer = ContentAnalyzer::new(config.analyzer.clone())?;
        if config.cache_enabled {
            analyzer = analyzer.with_cache(Arc::new(InMemoryAnalysisCache::new()));
        }
        let rule_based = RuleBasedProvider::new(Arc::new(analyzer));

        let provider: Arc<dyn AnalysisProvider> = match config.provider {
            ProviderKind::RuleBased => Arc::new(rule_based),
            ProviderKind::External => {
                let provider_config = ProviderConfig {
                    kind: ProviderKind::External,
                    analyzer: config.analyzer.clone(),
                    endpoint: config.provider_endpoint.clone(),
                };
                let primary = match create_provider(&provider_config) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        tracing::warn!(error = %e, "External provider unavailable, serving rule-based analysis");
                        None
                    }
                };
                Arc::new(FallbackProvider::new(primary, rule_based))
            }
        };

        Ok(Arc::new(Self {
            start_time: Instant::now(),
            provider,
            config,
        }))
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_uses_rule_based_provider() {
        let state = AppState::new(ServerConfig::default()).unwrap();
        assert_eq!(state.provider.name(), "rule-based");
        assert!(state.uptime_secs() < 5);
    }

    #[tokio::test]
    async fn test_external_provider_degrades_to_rule_based() {
        let config = ServerConfig {
            provider: ProviderKind::External,
            ..Default::default()
        };
        let state = AppState::new(config).unwrap();
        let analysis = state
            .provider
            .analyze(&visigen_core::ContentInput::text("hi ok"))
            .await
            .unwrap();
        assert_eq!(analysis.suggestions.len(), 1);
    }
}

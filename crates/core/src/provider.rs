// crates/core/src/provider.rs
//! AnalysisProvider trait and the degraded-mode fallback.
//!
//! A provider turns a [`ContentInput`] into a [`ContentAnalysis`]. The
//! rule-based provider is always available; any other provider is wrapped in
//! [`FallbackProvider`] so a failure degrades to the rule-based result
//! instead of surfacing to the user.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::analyzer::ContentAnalyzer;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::types::{ContentAnalysis, ContentInput};

#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, input: &ContentInput) -> Result<ContentAnalysis, AnalysisError>;

    /// Provider name for logging/display (e.g. "rule-based").
    fn name(&self) -> &str;
}

/// Deterministic provider backed by [`ContentAnalyzer`].
#[derive(Debug, Clone)]
pub struct RuleBasedProvider {
    analyzer: Arc<ContentAnalyzer>,
}

impl RuleBasedProvider {
    pub fn new(analyzer: Arc<ContentAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &ContentAnalyzer {
        &self.analyzer
    }
}

#[async_trait]
impl AnalysisProvider for RuleBasedProvider {
    /// Runs the regex pipeline on the blocking pool.
    async fn analyze(&self, input: &ContentInput) -> Result<ContentAnalysis, AnalysisError> {
        let analyzer = Arc::clone(&self.analyzer);
        let input = input.clone();
        tokio::task::spawn_blocking(move || analyzer.analyze(&input))
            .await
            .map_err(|e| AnalysisError::TaskFailed(format!("Task join error: {}", e)))?
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}

/// Tries `primary` first and falls back to the rule-based provider.
///
/// Validation errors are returned as-is: the fallback would reject the same
/// input.
pub struct FallbackProvider {
    primary: Option<Arc<dyn AnalysisProvider>>,
    fallback: RuleBasedProvider,
}

impl FallbackProvider {
    pub fn new(primary: Option<Arc<dyn AnalysisProvider>>, fallback: RuleBasedProvider) -> Self {
        Self { primary, fallback }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }
}

#[async_trait]
impl AnalysisProvider for FallbackProvider {
    async fn analyze(&self, input: &ContentInput) -> Result<ContentAnalysis, AnalysisError> {
        let Some(primary) = &self.primary else {
            warn!(fallback = self.fallback.name(), "no primary provider configured, using fallback");
            return self.fallback.analyze(input).await;
        };

        match primary.analyze(input).await {
            Ok(analysis) => Ok(analysis),
            Err(e) if e.is_validation() => Err(e),
            Err(e) => {
                warn!(
                    provider = primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "primary provider failed, using fallback"
                );
                self.fallback.analyze(input).await
            }
        }
    }

    fn name(&self) -> &str {
        self.primary
            .as_ref()
            .map(|p| p.name())
            .unwrap_or_else(|| self.fallback.name())
    }
}

/// Supported provider kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    RuleBased,
    /// Hosted model behind an HTTP API. Not bundled.
    External,
}

/// Configuration for an analysis provider instance.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub analyzer: AnalyzerConfig,
    pub endpoint: Option<String>,
}

/// Create a provider based on the given configuration.
///
/// Only the rule-based provider is bundled; `External` returns
/// `ProviderUnavailable`.
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn AnalysisProvider>, AnalysisError> {
    match config.kind {
        ProviderKind::RuleBased => {
            let analyzer = ContentAnalyzer::new(config.analyzer.clone())?;
            Ok(Arc::new(RuleBasedProvider::new(Arc::new(analyzer))))
        }
        ProviderKind::External => Err(AnalysisError::ProviderUnavailable(format!(
            "external provider at {} is not available in this build",
            config.endpoint.as_deref().unwrap_or("<unset>")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineStage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingProvider {
        error: fn() -> AnalysisError,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AnalysisProvider for FailingProvider {
        async fn analyze(&self, _input: &ContentInput) -> Result<ContentAnalysis, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn rule_based() -> RuleBasedProvider {
        RuleBasedProvider::new(Arc::new(
            ContentAnalyzer::new(AnalyzerConfig::default()).unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_create_rule_based_provider() {
        let provider = create_provider(&ProviderConfig::default()).unwrap();
        assert_eq!(provider.name(), "rule-based");
        let analysis = provider.analyze(&ContentInput::text("hi ok")).await.unwrap();
        assert!(!analysis.suggestions.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_rule_based_results_cross_the_blocking_pool() {
        let provider = rule_based();
        let text = "First we designed the prototype. Then we tested it in 2023. Finally we shipped in 2024.";
        let direct = provider.analyzer().analyze(&ContentInput::text(text)).unwrap();
        let pooled = provider.analyze(&ContentInput::text(text)).await.unwrap();
        assert_eq!(pooled.extracted_data, direct.extracted_data);
        assert_eq!(pooled.suggestions, direct.suggestions);

        let err = provider.analyze(&ContentInput::text("")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyContent));
    }

    #[test]
    fn test_create_external_provider_unavailable() {
        let config = ProviderConfig {
            kind: ProviderKind::External,
            ..Default::default()
        };
        let err = create_provider(&config).err().unwrap();
        assert!(matches!(err, AnalysisError::ProviderUnavailable(_)));
    }

    #[tokio::test]
    async fn test_fallback_without_primary() {
        let provider = FallbackProvider::new(None, rule_based());
        assert!(!provider.has_primary());
        assert_eq!(provider.name(), "rule-based");
        let analysis = provider.analyze(&ContentInput::text("hi ok")).await.unwrap();
        assert_eq!(analysis.suggestions.len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_on_primary_failure() {
        let primary = Arc::new(FailingProvider {
            error: || AnalysisError::failed(PipelineStage::Generation, "model timeout"),
            calls: AtomicUsize::new(0),
        });
        let provider = FallbackProvider::new(Some(primary.clone()), rule_based());
        let analysis = provider
            .analyze(&ContentInput::text("Sales grew 10% in 2024."))
            .await
            .unwrap();
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert!(!analysis.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_validation_errors_are_not_retried() {
        let primary = Arc::new(FailingProvider {
            error: || AnalysisError::EmptyContent,
            calls: AtomicUsize::new(0),
        });
        let provider = FallbackProvider::new(Some(primary), rule_based());
        let err = provider.analyze(&ContentInput::text("   ")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyContent));
    }
}

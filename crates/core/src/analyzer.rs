// crates/core/src/analyzer.rs
//! The analysis pipeline: validate, extract, score, select, generate.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::{cache_key, content_hash, AnalysisCache};
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, PipelineStage};
use crate::extract::{self, ExtractionRules};
use crate::scoring::score_metrics;
use crate::strategy::select_approaches;
use crate::suggestions::{generate_suggestions, SuggestionInputs};
use crate::types::{
    ContentAnalysis, ContentInput, ExtractedData, PresentationApproach, ScoringMetrics,
    SmartAnalysis, VisualSuggestion,
};

/// Owns the compiled rule table and limits. Build once, share by reference.
pub struct ContentAnalyzer {
    config: AnalyzerConfig,
    rules: ExtractionRules,
    cache: Option<Arc<dyn AnalysisCache>>,
}

impl std::fmt::Debug for ContentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentAnalyzer")
            .field("config", &self.config)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl ContentAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        let rules = ExtractionRules::compile().map_err(|e| {
            AnalysisError::failed(PipelineStage::Extraction, format!("invalid rule: {e}"))
        })?;
        Ok(Self {
            config,
            rules,
            cache: None,
        })
    }

    pub fn with_cache(mut self, cache: Arc<dyn AnalysisCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn rules(&self) -> &ExtractionRules {
        &self.rules
    }

    /// Reject content that is blank or over the configured length.
    pub fn validate(&self, input: &ContentInput) -> Result<(), AnalysisError> {
        if input.content.trim().is_empty() {
            return Err(AnalysisError::EmptyContent);
        }
        let len = input.content.chars().count();
        if len > self.config.max_content_chars {
            return Err(AnalysisError::ContentTooLong {
                len,
                max: self.config.max_content_chars,
            });
        }
        Ok(())
    }

    pub fn extract(&self, input: &ContentInput) -> Result<ExtractedData, AnalysisError> {
        self.validate(input)?;
        Ok(extract::extract(&self.rules, &self.config, &input.content))
    }

    /// Score content whose features were already extracted.
    pub fn score(
        &self,
        input: &ContentInput,
        data: &ExtractedData,
    ) -> Result<ScoringMetrics, AnalysisError> {
        let profile = extract::profile(&self.rules, &input.content);
        score_metrics(&profile, data)
    }

    pub fn select(
        &self,
        metrics: &ScoringMetrics,
        data: &ExtractedData,
    ) -> Vec<PresentationApproach> {
        select_approaches(metrics, data, self.config.max_approaches)
    }

    pub fn suggest(
        &self,
        input: &ContentInput,
        approaches: &[PresentationApproach],
        data: &ExtractedData,
    ) -> Vec<VisualSuggestion> {
        let sentences: Vec<String> = extract::split_sentences(&self.rules, &input.content)
            .into_iter()
            .map(str::to_string)
            .collect();
        let inputs = SuggestionInputs {
            title: input.metadata.title.as_deref(),
            data,
            sentences: &sentences,
        };
        generate_suggestions(approaches, &inputs, self.config.max_suggestions)
    }

    /// Run the full pipeline. Cached results are returned as stored.
    pub fn analyze(&self, input: &ContentInput) -> Result<ContentAnalysis, AnalysisError> {
        let start = Instant::now();
        self.validate(input)?;

        let hash = content_hash(input);
        let key = cache_key(input);
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            debug!(hash = %hash, "analysis cache hit");
            return Ok(cached);
        }

        let text = input.content.as_str();
        let profile = extract::profile(&self.rules, text);
        let data = extract::extract_profiled(&self.rules, &self.config, text, &profile);
        debug!(
            content_len = text.len(),
            sentences = profile.sentence_count,
            key_points = data.key_points.len(),
            data_points = data.data_points.len(),
            relationships = data.relationships.len(),
            "extraction complete"
        );

        let metrics = score_metrics(&profile, &data)?;
        debug!(metrics = ?metrics, "scoring complete");

        let approaches = self.select(&metrics, &data);
        debug!(approach_count = approaches.len(), "selection complete");

        let suggestions = self.suggest(input, &approaches, &data);
        if suggestions.is_empty() {
            return Err(AnalysisError::failed(
                PipelineStage::Generation,
                "no suggestion produced",
            ));
        }

        let recommended_approach = approaches.first().map(|a| a.id.clone());
        let analysis = ContentAnalysis {
            id: Uuid::new_v4().to_string(),
            content_hash: hash.clone(),
            extracted_data: data,
            suggestions,
            smart_analysis: Some(SmartAnalysis {
                metrics,
                approaches,
                recommended_approach,
            }),
            analyzed_at: Utc::now(),
        };

        info!(
            analysis_id = %analysis.id,
            content_len = text.len(),
            suggestion_count = analysis.suggestions.len(),
            recommended = analysis
                .smart_analysis
                .as_ref()
                .and_then(|s| s.recommended_approach.as_deref())
                .unwrap_or("standard"),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "content analyzed"
        );

        if let Some(cache) = &self.cache {
            cache.put(&key, analysis.clone());
        }
        Ok(analysis)
    }
}

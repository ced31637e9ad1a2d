//! Content scoring: eight normalized metrics from extracted features.
//!
//! Every metric is a saturating sum: each sub-signal is
//! `min(raw / normalizer, cap)`, the sub-signals are added, and the total is
//! clamped to `[0, 1]`. The normalizers and caps are fixed constants.

use crate::error::{AnalysisError, PipelineStage};
use crate::extract::{lexicon, TextProfile};
use crate::types::{DataCategory, ExtractedData, RelationshipType, ScoringMetrics};

/// One saturating sub-signal.
#[inline]
pub fn signal(raw: f64, normalizer: f64, cap: f64) -> f64 {
    (raw / normalizer).min(cap)
}

/// Sum sub-signals and clamp to `[0, 1]`.
pub fn saturate(signals: &[f64]) -> f64 {
    signals.iter().sum::<f64>().clamp(0.0, 1.0)
}

fn complexity(p: &TextProfile, data: &ExtractedData) -> f64 {
    saturate(&[
        signal(p.avg_sentence_words(), 50.0, 0.3),
        signal(p.hits(lexicon::TECHNICAL) as f64, 10.0, 0.3),
        signal(data.relationships.len() as f64, 10.0, 0.2),
        signal(p.hits(lexicon::CONCEPTUAL) as f64, 10.0, 0.2),
    ])
}

fn data_richness(p: &TextProfile, data: &ExtractedData) -> f64 {
    let money_and_share = data.data_points_in(DataCategory::Percentage)
        + data.data_points_in(DataCategory::Currency);
    saturate(&[
        signal(data.data_points.len() as f64, 10.0, 0.5),
        signal(p.numeric_tokens as f64, 20.0, 0.3),
        signal(money_and_share as f64, 5.0, 0.2),
    ])
}

fn narrative_flow(p: &TextProfile, data: &ExtractedData) -> f64 {
    let linked = data.relationships_of(RelationshipType::Causal)
        + data.relationships_of(RelationshipType::Temporal);
    saturate(&[
        signal(p.hits(lexicon::TRANSITION) as f64, 5.0, 0.4),
        signal(p.sentence_count as f64, 10.0, 0.3),
        signal(linked as f64, 5.0, 0.3),
    ])
}

fn temporal_elements(p: &TextProfile, data: &ExtractedData) -> f64 {
    saturate(&[
        signal(data.data_points_in(DataCategory::Year) as f64, 3.0, 0.4),
        signal(p.hits(lexicon::TEMPORAL) as f64, 5.0, 0.4),
        signal(
            data.relationships_of(RelationshipType::Temporal) as f64,
            3.0,
            0.2,
        ),
    ])
}

fn quantitative_data(p: &TextProfile, data: &ExtractedData) -> f64 {
    let numeric = data.data_points.len() - data.data_points_in(DataCategory::Year);
    saturate(&[
        signal(numeric as f64, 5.0, 0.5),
        signal(data.data_points_in(DataCategory::Percentage) as f64, 3.0, 0.3),
        signal(p.hits(lexicon::QUANTITATIVE) as f64, 5.0, 0.2),
    ])
}

fn conceptual_depth(p: &TextProfile, data: &ExtractedData) -> f64 {
    saturate(&[
        signal(p.hits(lexicon::CONCEPTUAL) as f64, 5.0, 0.4),
        signal(data.relationships.len() as f64, 5.0, 0.3),
        signal(p.long_words as f64, 20.0, 0.3),
    ])
}

fn actionability(p: &TextProfile) -> f64 {
    let sentence_share = if p.sentence_count == 0 {
        0.0
    } else {
        p.action_sentences as f64 / p.sentence_count as f64
    };
    saturate(&[
        signal(p.hits(lexicon::ACTION) as f64, 4.0, 0.5),
        signal(sentence_share * 0.3, 1.0, 0.3),
        signal(p.list_markers as f64, 5.0, 0.2),
    ])
}

fn audience_level(p: &TextProfile) -> f64 {
    saturate(&[
        signal(p.hits(lexicon::TECHNICAL) as f64, 8.0, 0.4),
        signal(p.avg_sentence_words(), 60.0, 0.3),
        signal(p.long_word_ratio(), 1.0, 0.3),
    ])
}

/// Compute all eight metrics.
///
/// Fails only if a metric comes out non-finite, which means the inputs were
/// corrupt; callers surface that as an analysis failure.
pub fn score_metrics(
    profile: &TextProfile,
    data: &ExtractedData,
) -> Result<ScoringMetrics, AnalysisError> {
    let metrics = ScoringMetrics {
        complexity: complexity(profile, data),
        data_richness: data_richness(profile, data),
        narrative_flow: narrative_flow(profile, data),
        temporal_elements: temporal_elements(profile, data),
        quantitative_data: quantitative_data(profile, data),
        conceptual_depth: conceptual_depth(profile, data),
        actionability: actionability(profile),
        audience_level: audience_level(profile),
    };

    if let Some((name, value)) = metrics.named().into_iter().find(|(_, v)| !v.is_finite()) {
        return Err(AnalysisError::failed(
            PipelineStage::Scoring,
            format!("metric {} is not finite ({})", name, value),
        ));
    }
    Ok(metrics)
}

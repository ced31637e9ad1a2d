//! Turns ranked approaches into renderable suggestions.

use std::collections::HashMap;

use crate::types::{ExtractedData, PresentationApproach, VisualSuggestion, VisualType};

use super::layout::{item_count, layout, LayoutContext};
use super::templates::{get_template, render_template};

/// Confidence of the plain title-and-body suggestion.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// What the generator draws from besides the approaches.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInputs<'a> {
    /// Document title from the input metadata. Template titles are used when absent.
    pub title: Option<&'a str>,
    pub data: &'a ExtractedData,
    pub sentences: &'a [String],
}

fn build(
    id: String,
    visual_type: VisualType,
    confidence: f64,
    pages: u32,
    inputs: &SuggestionInputs<'_>,
) -> VisualSuggestion {
    let template_title = get_template(visual_type)
        .map(|t| t.title)
        .unwrap_or(visual_type.as_str());
    let heading = inputs.title.unwrap_or(template_title);

    let mut vars = HashMap::new();
    vars.insert("count".to_string(), item_count(visual_type, inputs.data).to_string());
    vars.insert("pages".to_string(), pages.to_string());
    vars.insert("title".to_string(), heading.to_string());
    let description = get_template(visual_type)
        .map(|t| render_template(t.description_template, &vars))
        .unwrap_or_default();

    let ctx = LayoutContext {
        title: heading,
        data: inputs.data,
        sentences: inputs.sentences,
    };

    VisualSuggestion {
        id,
        title: template_title.to_string(),
        description,
        visual_type,
        confidence: confidence.clamp(0.0, 1.0),
        elements: layout(visual_type, &ctx),
    }
}

/// One suggestion laid out for the approach's primary visual type.
pub fn suggestion_for_approach(
    approach: &PresentationApproach,
    inputs: &SuggestionInputs<'_>,
) -> VisualSuggestion {
    build(
        format!("suggestion-{}", approach.id),
        approach.primary_visual(),
        approach.score,
        approach.estimated_pages,
        inputs,
    )
}

/// Flowchart and infographic suggestions driven directly by extracted features.
///
/// A supplement is skipped when a suggestion of the same visual type exists.
pub fn supplementary_suggestions(
    existing: &[VisualSuggestion],
    inputs: &SuggestionInputs<'_>,
) -> Vec<VisualSuggestion> {
    let present = |vt: VisualType| existing.iter().any(|s| s.visual_type == vt);
    let mut out = Vec::new();

    let rels = inputs.data.relationships.len();
    if rels >= 2 && !present(VisualType::Flowchart) {
        out.push(build(
            "suggestion-flowchart".to_string(),
            VisualType::Flowchart,
            0.4 + (rels as f64 / 10.0).min(0.4),
            1,
            inputs,
        ));
    }

    let dps = inputs.data.data_points.len();
    if dps >= 3 && !present(VisualType::Infographic) {
        out.push(build(
            "suggestion-infographic".to_string(),
            VisualType::Infographic,
            0.4 + (dps as f64 / 10.0).min(0.4),
            1,
            inputs,
        ));
    }

    out
}

/// The title-and-body suggestion used when no approach qualified.
pub fn fallback_suggestion(inputs: &SuggestionInputs<'_>) -> VisualSuggestion {
    build(
        "suggestion-standard".to_string(),
        VisualType::Standard,
        FALLBACK_CONFIDENCE,
        1,
        inputs,
    )
}

/// Sort suggestions by confidence (highest first). Ties keep their order.
pub fn sort_by_confidence(suggestions: &mut [VisualSuggestion]) {
    suggestions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Build the full suggestion list. Never empty.
///
/// The standard suggestion is included whenever no approach was selected.
pub fn generate_suggestions(
    approaches: &[PresentationApproach],
    inputs: &SuggestionInputs<'_>,
    limit: usize,
) -> Vec<VisualSuggestion> {
    let mut suggestions: Vec<VisualSuggestion> = approaches
        .iter()
        .map(|a| suggestion_for_approach(a, inputs))
        .collect();

    let supplements = supplementary_suggestions(&suggestions, inputs);
    suggestions.extend(supplements);

    if approaches.is_empty() {
        suggestions.push(fallback_suggestion(inputs));
    }

    sort_by_confidence(&mut suggestions);
    suggestions.truncate(limit.max(1));
    suggestions
}

//! Presentation strategy selection.
//!
//! Hard gate + soft score: a candidate approach is only generated when its
//! gate holds on the metrics, and generated candidates are ranked by a
//! per-approach score formula.
//!
//! | Approach | Family | Gate |
//! |----------|--------|------|
//! | bullet-list-icons | short | actionability > 0.6 and complexity < 0.5 |
//! | timeline | short | temporal > 0.5 |
//! | simple-chart | short | quantitative > 0.6 and data richness > 0.5 |
//! | detailed-breakdown | long | conceptual > 0.6 or complexity > 0.7 |
//! | data-story | long | data richness > 0.7 and narrative > 0.5 |
//! | executive-summary | hybrid | actionability > 0.5 and conceptual > 0.5 |

use crate::types::{ApproachFormat, ExtractedData, PresentationApproach, ScoringMetrics, VisualType};

fn approach(
    id: &str,
    name: &str,
    score: f64,
    reasoning: Vec<String>,
    visual_types: Vec<VisualType>,
    format: ApproachFormat,
    estimated_pages: u32,
) -> PresentationApproach {
    PresentationApproach {
        id: id.to_string(),
        name: name.to_string(),
        score: score.clamp(0.0, 1.0),
        reasoning,
        visual_types,
        format,
        estimated_pages,
    }
}

fn pct(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Single-page candidates.
pub fn short_form_approaches(m: &ScoringMetrics, data: &ExtractedData) -> Vec<PresentationApproach> {
    let mut out = Vec::new();

    if m.actionability > 0.6 && m.complexity < 0.5 {
        let crowded = if data.key_points.len() > 7 { 0.1 } else { 0.0 };
        out.push(approach(
            "bullet-list-icons",
            "Bullet List with Icons",
            0.5 + m.actionability * 0.3 + (1.0 - m.complexity) * 0.2 - crowded,
            vec![
                format!("Actionable content ({}) reads well as a checklist", pct(m.actionability)),
                format!("Low complexity ({}) fits on one page", pct(m.complexity)),
            ],
            vec![VisualType::BulletList],
            ApproachFormat::Short,
            1,
        ));
    }

    if m.temporal_elements > 0.5 {
        out.push(approach(
            "timeline",
            "Timeline",
            0.4 + m.temporal_elements * 0.4 + m.narrative_flow * 0.2,
            vec![format!(
                "Strong temporal structure ({}) suggests a chronological layout",
                pct(m.temporal_elements)
            )],
            vec![VisualType::Timeline],
            ApproachFormat::Short,
            1,
        ));
    }

    if m.quantitative_data > 0.6 && m.data_richness > 0.5 {
        let crowded = if data.data_points.len() > 8 { 0.1 } else { 0.0 };
        out.push(approach(
            "simple-chart",
            "Simple Chart",
            0.4 + m.quantitative_data * 0.3 + m.data_richness * 0.3 - crowded,
            vec![
                format!("Quantitative content ({}) is best shown as a chart", pct(m.quantitative_data)),
                format!("{} data points extracted", data.data_points.len()),
            ],
            vec![VisualType::Chart],
            ApproachFormat::Short,
            1,
        ));
    }

    out
}

/// Multi-page candidates.
pub fn long_form_approaches(m: &ScoringMetrics, data: &ExtractedData) -> Vec<PresentationApproach> {
    let mut out = Vec::new();

    if m.conceptual_depth > 0.6 || m.complexity > 0.7 {
        let pages = (2 + data.key_points.len() / 3).clamp(2, 8) as u32;
        out.push(approach(
            "detailed-breakdown",
            "Detailed Breakdown",
            0.3 + m.conceptual_depth * 0.3 + m.complexity * 0.3 + m.narrative_flow * 0.1,
            vec![
                format!("Conceptual depth ({}) needs room to unfold", pct(m.conceptual_depth)),
                format!("Complexity ({}) is easier across {} pages", pct(m.complexity), pages),
            ],
            vec![
                VisualType::DetailedBreakdown,
                VisualType::Flowchart,
                VisualType::BulletList,
            ],
            ApproachFormat::Long,
            pages,
        ));
    }

    if m.data_richness > 0.7 && m.narrative_flow > 0.5 {
        let pages = (2 + data.data_points.len() / 4).clamp(3, 6) as u32;
        out.push(approach(
            "data-story",
            "Data Story",
            0.3 + m.data_richness * 0.35 + m.narrative_flow * 0.35,
            vec![
                format!("Rich data ({}) with a narrative thread ({})", pct(m.data_richness), pct(m.narrative_flow)),
            ],
            vec![VisualType::DataStory, VisualType::Chart, VisualType::Infographic],
            ApproachFormat::Long,
            pages,
        ));
    }

    out
}

/// Summary-plus-detail candidates.
pub fn hybrid_approaches(m: &ScoringMetrics, data: &ExtractedData) -> Vec<PresentationApproach> {
    let mut out = Vec::new();

    if m.actionability > 0.5 && m.conceptual_depth > 0.5 {
        let pages = (1 + data.key_points.len().div_ceil(4)).clamp(2, 5) as u32;
        out.push(approach(
            "executive-summary",
            "Executive Summary + Detail",
            0.35 + m.actionability * 0.25 + m.conceptual_depth * 0.25 + m.audience_level * 0.15,
            vec![
                "Actionable conclusions belong up front".to_string(),
                format!("Conceptual depth ({}) supports a detail section", pct(m.conceptual_depth)),
            ],
            vec![VisualType::ExecutiveSummary, VisualType::BulletList],
            ApproachFormat::Hybrid,
            pages,
        ));
    }

    out
}

/// Sort approaches by score descending. Ties keep generation order.
pub fn rank_approaches(approaches: &mut [PresentationApproach]) {
    approaches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Generate every gated candidate, rank, and keep the top `limit`.
pub fn select_approaches(
    metrics: &ScoringMetrics,
    data: &ExtractedData,
    limit: usize,
) -> Vec<PresentationApproach> {
    let mut approaches = short_form_approaches(metrics, data);
    approaches.extend(long_form_approaches(metrics, data));
    approaches.extend(hybrid_approaches(metrics, data));

    rank_approaches(&mut approaches);
    approaches.truncate(limit);
    approaches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComplexityLevel, Sentiment};

    fn data(key_points: usize) -> ExtractedData {
        ExtractedData {
            key_points: (0..key_points).map(|i| format!("point {i}")).collect(),
            data_points: vec![],
            relationships: vec![],
            sentiment: Sentiment::Neutral,
            complexity: ComplexityLevel::Low,
        }
    }

    fn ids(approaches: &[PresentationApproach]) -> Vec<&str> {
        approaches.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_no_gate_no_approaches() {
        let approaches = select_approaches(&ScoringMetrics::default(), &data(1), 5);
        assert!(approaches.is_empty());
    }

    #[test]
    fn test_bullet_list_gate_and_score() {
        let m = ScoringMetrics {
            actionability: 0.65,
            complexity: 0.12,
            ..Default::default()
        };
        let approaches = short_form_approaches(&m, &data(1));
        assert_eq!(ids(&approaches), vec!["bullet-list-icons"]);
        // 0.5 + 0.195 + 0.176
        assert!((approaches[0].score - 0.871).abs() < 1e-9);
        assert_eq!(approaches[0].format, ApproachFormat::Short);
        assert_eq!(approaches[0].estimated_pages, 1);
    }

    #[test]
    fn test_bullet_list_blocked_by_complexity() {
        let m = ScoringMetrics {
            actionability: 0.9,
            complexity: 0.5,
            ..Default::default()
        };
        assert!(short_form_approaches(&m, &data(1)).is_empty());
    }

    #[test]
    fn test_bullet_list_crowding_penalty() {
        let m = ScoringMetrics {
            actionability: 0.7,
            complexity: 0.0,
            ..Default::default()
        };
        let few = short_form_approaches(&m, &data(3))[0].score;
        let many = short_form_approaches(&m, &data(8))[0].score;
        assert!((few - many - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_timeline_gate() {
        let m = ScoringMetrics {
            temporal_elements: 0.8,
            narrative_flow: 0.5,
            ..Default::default()
        };
        let approaches = short_form_approaches(&m, &data(1));
        assert_eq!(ids(&approaches), vec!["timeline"]);
        assert!((approaches[0].score - 0.82).abs() < 1e-9);
    }

    #[test]
    fn test_detailed_breakdown_pages() {
        let m = ScoringMetrics {
            complexity: 0.8,
            ..Default::default()
        };
        let approaches = long_form_approaches(&m, &data(9));
        assert_eq!(ids(&approaches), vec!["detailed-breakdown"]);
        assert_eq!(approaches[0].estimated_pages, 5);
        assert_eq!(approaches[0].primary_visual(), VisualType::DetailedBreakdown);
    }

    #[test]
    fn test_executive_summary_pages_clamped() {
        let m = ScoringMetrics {
            actionability: 0.6,
            conceptual_depth: 0.6,
            ..Default::default()
        };
        let approaches = hybrid_approaches(&m, &data(0));
        assert_eq!(approaches[0].estimated_pages, 2);
        let approaches = hybrid_approaches(&m, &data(40));
        assert_eq!(approaches[0].estimated_pages, 5);
    }

    #[test]
    fn test_scores_clamped_to_one() {
        let m = ScoringMetrics {
            complexity: 1.0,
            data_richness: 1.0,
            narrative_flow: 1.0,
            temporal_elements: 1.0,
            quantitative_data: 1.0,
            conceptual_depth: 1.0,
            actionability: 1.0,
            audience_level: 1.0,
        };
        let approaches = select_approaches(&m, &data(2), 10);
        assert!(approaches.iter().all(|a| (0.0..=1.0).contains(&a.score)));
    }

    #[test]
    fn test_select_ranks_and_truncates() {
        let m = ScoringMetrics {
            complexity: 0.75,
            data_richness: 0.9,
            narrative_flow: 0.9,
            temporal_elements: 0.9,
            quantitative_data: 0.9,
            conceptual_depth: 0.9,
            actionability: 0.9,
            audience_level: 0.5,
        };
        let all = select_approaches(&m, &data(4), 10);
        // bullet list is gated out by complexity >= 0.5
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].score >= w[1].score));

        let top3 = select_approaches(&m, &data(4), 3);
        assert_eq!(top3.len(), 3);
        assert_eq!(ids(&top3), ids(&all[..3]));
    }
}

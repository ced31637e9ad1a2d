// crates/core/src/types.rs
//! Domain types shared by every pipeline stage and by the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Input
// ============================================================================

/// Where submitted content came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Document,
    Url,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Document => "document",
            ContentType::Url => "url",
        }
    }
}

/// Optional descriptive fields submitted with the content form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

/// Content submitted for analysis. Never mutated once handed to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct ContentInput {
    pub content: String,
    #[serde(default, rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub metadata: ContentMetadata,
}

impl ContentInput {
    /// Plain text input with empty metadata.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: ContentType::Text,
            metadata: ContentMetadata::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }
}

// ============================================================================
// Extracted features
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum DataCategory {
    Percentage,
    Currency,
    Year,
    Metric,
    /// Value is a ratio, e.g. "3 out of 4" becomes 0.75.
    Rating,
}

/// A numeric fact pulled out of the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub id: String,
    pub value: f64,
    pub label: String,
    pub category: DataCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    Causal,
    Temporal,
    Correlational,
}

impl RelationshipType {
    /// Fixed strength per relationship type. Not derived from the text.
    pub fn strength(&self) -> f64 {
        match self {
            RelationshipType::Causal => 0.8,
            RelationshipType::Temporal => 0.7,
            RelationshipType::Correlational => 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    pub strength: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    pub key_points: Vec<String>,
    pub data_points: Vec<DataPoint>,
    pub relationships: Vec<Relationship>,
    pub sentiment: Sentiment,
    pub complexity: ComplexityLevel,
}

impl ExtractedData {
    pub fn data_points_in(&self, category: DataCategory) -> usize {
        self.data_points
            .iter()
            .filter(|dp| dp.category == category)
            .count()
    }

    pub fn relationships_of(&self, kind: RelationshipType) -> usize {
        self.relationships
            .iter()
            .filter(|r| r.relationship_type == kind)
            .count()
    }
}

// ============================================================================
// Scoring
// ============================================================================

/// Eight normalized measures of content character, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct ScoringMetrics {
    pub complexity: f64,
    pub data_richness: f64,
    pub narrative_flow: f64,
    pub temporal_elements: f64,
    pub quantitative_data: f64,
    pub conceptual_depth: f64,
    pub actionability: f64,
    pub audience_level: f64,
}

impl ScoringMetrics {
    /// Metric values paired with their wire names, in declaration order.
    pub fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("complexity", self.complexity),
            ("dataRichness", self.data_richness),
            ("narrativeFlow", self.narrative_flow),
            ("temporalElements", self.temporal_elements),
            ("quantitativeData", self.quantitative_data),
            ("conceptualDepth", self.conceptual_depth),
            ("actionability", self.actionability),
            ("audienceLevel", self.audience_level),
        ]
    }
}

// ============================================================================
// Approaches and suggestions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum ApproachFormat {
    /// Single page.
    Short,
    /// Multi page.
    Long,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub enum VisualType {
    BulletList,
    Timeline,
    Chart,
    Infographic,
    DataStory,
    Flowchart,
    DetailedBreakdown,
    ExecutiveSummary,
    Standard,
}

impl VisualType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualType::BulletList => "bulletList",
            VisualType::Timeline => "timeline",
            VisualType::Chart => "chart",
            VisualType::Infographic => "infographic",
            VisualType::DataStory => "dataStory",
            VisualType::Flowchart => "flowchart",
            VisualType::DetailedBreakdown => "detailedBreakdown",
            VisualType::ExecutiveSummary => "executiveSummary",
            VisualType::Standard => "standard",
        }
    }
}

impl std::fmt::Display for VisualType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate presentation strategy with its suitability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct PresentationApproach {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub reasoning: Vec<String>,
    pub visual_types: Vec<VisualType>,
    pub format: ApproachFormat,
    pub estimated_pages: u32,
}

impl PresentationApproach {
    /// The visual type that drives this approach's layout.
    pub fn primary_visual(&self) -> VisualType {
        self.visual_types
            .first()
            .copied()
            .unwrap_or(VisualType::Standard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Chart,
    Shape,
    Image,
    Timeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Line,
    Arrow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
pub struct TimelineEvent {
    pub label: String,
    pub detail: String,
}

/// Payload of a visual element. The variant matches the element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ElementContent {
    Text(String),
    Series(Vec<ChartDatum>),
    Events(Vec<TimelineEvent>),
    Shape(ShapeKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Semantic role of an element. Themes turn roles into colors and fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum StyleRole {
    Title,
    Heading,
    Body,
    Caption,
    Accent,
    Muted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    pub role: StyleRole,
    pub emphasis: bool,
    pub align: TextAlign,
}

impl ElementStyle {
    pub fn role(role: StyleRole) -> Self {
        Self {
            role,
            emphasis: false,
            align: TextAlign::Start,
        }
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

/// Pure rendering data: what to draw, where, and in which semantic role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct VisualElement {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub content: ElementContent,
    pub position: Position,
    pub size: Size,
    pub style: ElementStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct VisualSuggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub visual_type: VisualType,
    pub confidence: f64,
    pub elements: Vec<VisualElement>,
}

// ============================================================================
// Analysis result
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct SmartAnalysis {
    pub metrics: ScoringMetrics,
    pub approaches: Vec<PresentationApproach>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_approach: Option<String>,
}

/// Everything the pipeline produces for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub id: String,
    pub content_hash: String,
    pub extracted_data: ExtractedData,
    pub suggestions: Vec<VisualSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_analysis: Option<SmartAnalysis>,
    #[ts(type = "string")]
    pub analyzed_at: DateTime<Utc>,
}

impl ContentAnalysis {
    pub fn suggestion(&self, id: &str) -> Option<&VisualSuggestion> {
        self.suggestions.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_input_deserializes_with_defaults() {
        let input: ContentInput = serde_json::from_str(r#"{"content":"hello"}"#).unwrap();
        assert_eq!(input.content, "hello");
        assert_eq!(input.content_type, ContentType::Text);
        assert_eq!(input.metadata, ContentMetadata::default());
    }

    #[test]
    fn test_content_input_type_field_name() {
        let input: ContentInput =
            serde_json::from_str(r#"{"content":"x","type":"url","metadata":{"title":"T"}}"#)
                .unwrap();
        assert_eq!(input.content_type, ContentType::Url);
        assert_eq!(input.metadata.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_relationship_strength_constants() {
        assert_eq!(RelationshipType::Causal.strength(), 0.8);
        assert_eq!(RelationshipType::Temporal.strength(), 0.7);
        assert_eq!(RelationshipType::Correlational.strength(), 0.6);
    }

    #[test]
    fn test_metrics_serialize_camel_case() {
        let json = serde_json::to_string(&ScoringMetrics::default()).unwrap();
        assert!(json.contains("\"dataRichness\":0.0"));
        assert!(json.contains("\"audienceLevel\":0.0"));
    }

    #[test]
    fn test_element_content_tagging() {
        let json = serde_json::to_value(ElementContent::Shape(ShapeKind::Circle)).unwrap();
        assert_eq!(json["kind"], "shape");
        assert_eq!(json["value"], "circle");
    }

    #[test]
    fn test_primary_visual_defaults_to_standard() {
        let approach = PresentationApproach {
            id: "x".into(),
            name: "X".into(),
            score: 0.5,
            reasoning: vec![],
            visual_types: vec![],
            format: ApproachFormat::Short,
            estimated_pages: 1,
        };
        assert_eq!(approach.primary_visual(), VisualType::Standard);
    }
}

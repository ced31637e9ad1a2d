//! Title and description templates for visual suggestions.
//!
//! Templates use `{variable}` placeholders that are substituted at render time.
//! Every visual type has exactly one entry.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::VisualType;

/// Text template for one visual type.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionTemplate {
    pub visual_type: VisualType,
    pub title: &'static str,
    pub description_template: &'static str,
}

/// The template gallery, one entry per visual type.
pub static TEMPLATES: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        visual_type: VisualType::BulletList,
        title: "Bullet List with Icons",
        description_template: "{count} key points laid out as an icon checklist.",
    },
    SuggestionTemplate {
        visual_type: VisualType::Timeline,
        title: "Timeline",
        description_template: "{count} events placed along a horizontal time axis.",
    },
    SuggestionTemplate {
        visual_type: VisualType::Chart,
        title: "Simple Chart",
        description_template: "A bar chart of {count} extracted values.",
    },
    SuggestionTemplate {
        visual_type: VisualType::Infographic,
        title: "Infographic Cards",
        description_template: "{count} figures highlighted as stat cards.",
    },
    SuggestionTemplate {
        visual_type: VisualType::DataStory,
        title: "Data Story",
        description_template: "A chart of {count} values paired with the narrative that explains them.",
    },
    SuggestionTemplate {
        visual_type: VisualType::Flowchart,
        title: "Relationship Flowchart",
        description_template: "{count} cause and sequence links drawn as connected boxes.",
    },
    SuggestionTemplate {
        visual_type: VisualType::DetailedBreakdown,
        title: "Detailed Breakdown",
        description_template: "{count} sections with headings, spread over {pages} pages.",
    },
    SuggestionTemplate {
        visual_type: VisualType::ExecutiveSummary,
        title: "Executive Summary + Detail",
        description_template: "A summary box of the top conclusions followed by {count} supporting points.",
    },
    SuggestionTemplate {
        visual_type: VisualType::Standard,
        title: "Standard Layout",
        description_template: "A title and body text layout for {title}.",
    },
];

/// All templates, for listing.
pub fn gallery() -> &'static [SuggestionTemplate] {
    TEMPLATES
}

/// Look up the template for a visual type.
pub fn get_template(visual_type: VisualType) -> Option<&'static SuggestionTemplate> {
    TEMPLATES.iter().find(|t| t.visual_type == visual_type)
}

/// Substitute `{name}` placeholders from `vars`. Unknown placeholders are left as-is.
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("{{{}}}", key);
        if result.contains(&placeholder) {
            result = result.replace(&placeholder, value);
        }
    }
    result
}

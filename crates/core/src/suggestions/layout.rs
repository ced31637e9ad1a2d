//! Element layouts on a fixed 800x600 canvas, one per visual type.
//!
//! Layouts are pure: the same context always yields the same elements.

use crate::types::{
    ChartDatum, DataCategory, DataPoint, ElementContent, ElementStyle, ElementType,
    ExtractedData, Position, ShapeKind, Size, StyleRole, TimelineEvent, VisualElement,
    VisualType,
};

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

pub const MAX_LIST_ITEMS: usize = 6;
pub const MAX_SERIES: usize = 8;
pub const MAX_FLOW_ROWS: usize = 4;
const SUMMARY_ITEMS: usize = 3;
const BREAKDOWN_ROW: f64 = 80.0;
/// Vertical room for breakdown rows, from y=100 down to the bottom margin.
const BREAKDOWN_SPAN: f64 = 480.0;

/// Everything a layout may draw from.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub title: &'a str,
    pub data: &'a ExtractedData,
    pub sentences: &'a [String],
}

fn element(
    element_type: ElementType,
    content: ElementContent,
    (x, y): (f64, f64),
    (width, height): (f64, f64),
    style: ElementStyle,
) -> VisualElement {
    VisualElement {
        element_type,
        content,
        position: Position { x, y },
        size: Size { width, height },
        style,
    }
}

fn text(value: impl Into<String>, at: (f64, f64), size: (f64, f64), style: ElementStyle) -> VisualElement {
    element(ElementType::Text, ElementContent::Text(value.into()), at, size, style)
}

fn shape(kind: ShapeKind, at: (f64, f64), size: (f64, f64), style: ElementStyle) -> VisualElement {
    element(ElementType::Shape, ElementContent::Shape(kind), at, size, style)
}

fn title(ctx: &LayoutContext<'_>) -> VisualElement {
    text(
        ctx.title,
        (50.0, 40.0),
        (700.0, 50.0),
        ElementStyle::role(StyleRole::Title).emphasized(),
    )
}

/// Human-readable value, with the unit implied by the category.
pub fn format_value(dp: &DataPoint) -> String {
    let number = if dp.value.fract() == 0.0 && dp.value.abs() < 1e15 {
        format!("{:.0}", dp.value)
    } else {
        format!("{:.2}", dp.value)
    };
    match dp.category {
        DataCategory::Percentage => format!("{}%", number),
        DataCategory::Currency => format!("${}", number),
        _ => number,
    }
}

/// Chart series from the first data points.
pub fn series(data: &ExtractedData) -> Vec<ChartDatum> {
    data.data_points
        .iter()
        .take(MAX_SERIES)
        .map(|dp| ChartDatum {
            label: dp.label.clone(),
            value: dp.value,
        })
        .collect()
}

/// Timeline events: year data points when present, otherwise the key points as steps.
pub fn timeline_events(data: &ExtractedData) -> Vec<TimelineEvent> {
    let years: Vec<TimelineEvent> = data
        .data_points
        .iter()
        .filter(|dp| dp.category == DataCategory::Year)
        .take(MAX_LIST_ITEMS)
        .map(|dp| TimelineEvent {
            label: format_value(dp),
            detail: dp.label.clone(),
        })
        .collect();
    if !years.is_empty() {
        return years;
    }

    data.key_points
        .iter()
        .take(MAX_LIST_ITEMS)
        .enumerate()
        .map(|(i, kp)| TimelineEvent {
            label: format!("Step {}", i + 1),
            detail: kp.clone(),
        })
        .collect()
}

fn bullet_list(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    let mut elements = vec![title(ctx)];
    for (i, point) in ctx.data.key_points.iter().enumerate() {
        let y = 100.0 + 60.0 * i as f64;
        elements.push(shape(
            ShapeKind::Circle,
            (50.0, y + 15.0),
            (20.0, 20.0),
            ElementStyle::role(StyleRole::Accent),
        ));
        elements.push(text(
            point.as_str(),
            (80.0, y),
            (640.0, 50.0),
            ElementStyle::role(StyleRole::Body),
        ));
    }
    elements
}

fn chart(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    vec![
        title(ctx),
        element(
            ElementType::Chart,
            ElementContent::Series(series(ctx.data)),
            (150.0, 150.0),
            (500.0, 350.0),
            ElementStyle::role(StyleRole::Accent),
        ),
    ]
}

fn timeline(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    let events = timeline_events(ctx.data);
    let n = events.len();
    let mut elements = vec![
        title(ctx),
        element(
            ElementType::Timeline,
            ElementContent::Events(events.clone()),
            (50.0, 298.0),
            (700.0, 4.0),
            ElementStyle::role(StyleRole::Muted),
        ),
    ];
    for (i, event) in events.iter().enumerate() {
        let x = if n > 1 {
            50.0 + i as f64 * 700.0 / (n - 1) as f64
        } else {
            CANVAS_WIDTH / 2.0
        };
        elements.push(shape(
            ShapeKind::Circle,
            (x - 8.0, 292.0),
            (16.0, 16.0),
            ElementStyle::role(StyleRole::Accent),
        ));
        elements.push(text(
            format!("{}: {}", event.label, event.detail),
            ((x - 60.0).clamp(0.0, CANVAS_WIDTH - 120.0), 320.0),
            (120.0, 60.0),
            ElementStyle::role(StyleRole::Caption).centered(),
        ));
    }
    elements
}

fn infographic(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    let mut elements = vec![title(ctx)];
    for (i, dp) in ctx.data.data_points.iter().take(MAX_LIST_ITEMS).enumerate() {
        let at = (50.0 + 240.0 * (i % 3) as f64, 120.0 + 200.0 * (i / 3) as f64);
        elements.push(shape(
            ShapeKind::Rectangle,
            at,
            (220.0, 180.0),
            ElementStyle::role(StyleRole::Muted),
        ));
        elements.push(text(
            format!("{}\n{}", format_value(dp), dp.label),
            at,
            (220.0, 180.0),
            ElementStyle::role(StyleRole::Heading).centered(),
        ));
    }
    elements
}

fn flowchart(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    let mut elements = vec![title(ctx)];
    for (i, rel) in ctx.data.relationships.iter().take(MAX_FLOW_ROWS).enumerate() {
        let y = 100.0 + 110.0 * i as f64;
        elements.push(text(
            rel.source.as_str(),
            (60.0, y),
            (260.0, 70.0),
            ElementStyle::role(StyleRole::Body).centered(),
        ));
        elements.push(shape(
            ShapeKind::Arrow,
            (340.0, y + 30.0),
            (120.0, 10.0),
            ElementStyle::role(StyleRole::Accent),
        ));
        elements.push(text(
            rel.target.as_str(),
            (480.0, y),
            (260.0, 70.0),
            ElementStyle::role(StyleRole::Body).centered(),
        ));
    }
    elements
}

fn data_story(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    vec![
        title(ctx),
        element(
            ElementType::Chart,
            ElementContent::Series(series(ctx.data)),
            (50.0, 120.0),
            (420.0, 300.0),
            ElementStyle::role(StyleRole::Accent),
        ),
        text(
            ctx.data.key_points.join(" "),
            (500.0, 120.0),
            (250.0, 300.0),
            ElementStyle::role(StyleRole::Body),
        ),
    ]
}

fn detailed_breakdown(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    let n = ctx.data.key_points.len().max(1);
    // 80px rows while they fit, then shrink so the last divider stays on the canvas.
    let step = BREAKDOWN_ROW.min(BREAKDOWN_SPAN / n as f64);
    let mut elements = vec![title(ctx)];
    for (i, point) in ctx.data.key_points.iter().enumerate() {
        let y = 100.0 + step * i as f64;
        elements.push(text(
            point.as_str(),
            (50.0, y),
            (700.0, step * 0.75),
            ElementStyle::role(StyleRole::Heading),
        ));
        elements.push(shape(
            ShapeKind::Line,
            (50.0, y + step * 0.8125),
            (700.0, 1.0),
            ElementStyle::role(StyleRole::Muted),
        ));
    }
    elements
}

fn executive_summary(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    let summary: Vec<&str> = ctx
        .data
        .key_points
        .iter()
        .take(SUMMARY_ITEMS)
        .map(String::as_str)
        .collect();
    let mut elements = vec![
        title(ctx),
        shape(
            ShapeKind::Rectangle,
            (50.0, 100.0),
            (700.0, 120.0),
            ElementStyle::role(StyleRole::Muted),
        ),
        text(
            summary.join("\n"),
            (50.0, 100.0),
            (700.0, 120.0),
            ElementStyle::role(StyleRole::Body).emphasized(),
        ),
    ];
    // Five detail rows fit below the summary box.
    for (i, point) in ctx.data.key_points.iter().skip(SUMMARY_ITEMS).take(5).enumerate() {
        elements.push(text(
            point.as_str(),
            (50.0, 260.0 + 60.0 * i as f64),
            (700.0, 50.0),
            ElementStyle::role(StyleRole::Body),
        ));
    }
    elements
}

fn standard(ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    let body: Vec<&str> = ctx.sentences.iter().take(3).map(String::as_str).collect();
    vec![
        title(ctx),
        text(
            body.join(" "),
            (50.0, 120.0),
            (700.0, 400.0),
            ElementStyle::role(StyleRole::Body),
        ),
    ]
}

/// Lay out elements for `visual_type`.
pub fn layout(visual_type: VisualType, ctx: &LayoutContext<'_>) -> Vec<VisualElement> {
    match visual_type {
        VisualType::BulletList => bullet_list(ctx),
        VisualType::Timeline => timeline(ctx),
        VisualType::Chart => chart(ctx),
        VisualType::Infographic => infographic(ctx),
        VisualType::DataStory => data_story(ctx),
        VisualType::Flowchart => flowchart(ctx),
        VisualType::DetailedBreakdown => detailed_breakdown(ctx),
        VisualType::ExecutiveSummary => executive_summary(ctx),
        VisualType::Standard => standard(ctx),
    }
}

/// Number of content items a layout places, used in descriptions.
pub fn item_count(visual_type: VisualType, data: &ExtractedData) -> usize {
    match visual_type {
        VisualType::BulletList | VisualType::DetailedBreakdown => data.key_points.len(),
        VisualType::Timeline => timeline_events(data).len(),
        VisualType::Chart | VisualType::DataStory => data.data_points.len().min(MAX_SERIES),
        VisualType::Infographic => data.data_points.len().min(MAX_LIST_ITEMS),
        VisualType::Flowchart => data.relationships.len().min(MAX_FLOW_ROWS),
        VisualType::ExecutiveSummary => data.key_points.len().saturating_sub(SUMMARY_ITEMS),
        VisualType::Standard => 1,
    }
}

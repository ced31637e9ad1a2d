//! Visual suggestion generation: layouts, templates, and ranking.

pub mod generator;
pub mod layout;
pub mod templates;

pub use generator::*;
pub use layout::{layout, LayoutContext, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use templates::{gallery, get_template, render_template, SuggestionTemplate};

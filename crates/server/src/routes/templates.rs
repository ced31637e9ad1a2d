// crates/server/src/routes/templates.rs
//! Suggestion template gallery endpoint.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use visigen_core::suggestions::{gallery, SuggestionTemplate};

use crate::metrics::record_request;
use crate::state::AppState;

/// GET /api/templates - Title and description template for every visual type.
pub async fn list_templates() -> Json<&'static [SuggestionTemplate]> {
    record_request("templates", 200);
    Json(gallery())
}

/// Create the templates routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/templates", get(list_templates))
}

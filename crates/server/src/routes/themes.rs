// crates/server/src/routes/themes.rs
//! Theme catalog endpoints.

use std::sync::Arc;

use axum::{extract::Path, routing::get, Json, Router};
use visigen_core::themes::{self, Theme};

use crate::error::{ApiError, ApiResult};
use crate::metrics::record_request;
use crate::state::AppState;

/// GET /api/themes - All built-in themes, default first.
pub async fn list_themes() -> Json<&'static [Theme]> {
    record_request("themes", 200);
    Json(themes::catalog())
}

/// GET /api/themes/{id} - One theme by id.
pub async fn get_theme(Path(id): Path<String>) -> ApiResult<Json<&'static Theme>> {
    match themes::find(&id) {
        Some(theme) => {
            record_request("theme", 200);
            Ok(Json(theme))
        }
        None => {
            record_request("theme", 404);
            Err(ApiError::ThemeNotFound(id))
        }
    }
}

/// Create the themes routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/themes", get(list_themes))
        .route("/themes/{id}", get(get_theme))
}

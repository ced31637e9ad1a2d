// crates/server/src/routes/analyze.rs
//! Content analysis endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use visigen_core::{ContentAnalysis, ContentInput};

use crate::error::{ApiError, ApiResult};
use crate::metrics::{record_request, AnalysisTimer};
use crate::state::AppState;

/// POST /api/analyze - Run the analysis pipeline on submitted content.
///
/// Returns 400 for malformed bodies and for blank or oversized content,
/// 500 if the pipeline fails.
pub async fn analyze_content(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ContentInput>, JsonRejection>,
) -> ApiResult<Json<ContentAnalysis>> {
    let Json(input) = body.map_err(|rejection| {
        record_request("analyze", 400);
        ApiError::BadRequest(rejection.body_text())
    })?;

    let timer = AnalysisTimer::start();
    match state.provider.analyze(&input).await {
        Ok(analysis) => {
            let elapsed = timer.finish("ok");
            record_request("analyze", 200);
            tracing::info!(
                analysis_id = %analysis.id,
                content_len = input.content.len(),
                provider = state.provider.name(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Analysis served"
            );
            Ok(Json(analysis))
        }
        Err(e) => {
            let outcome = if e.is_validation() { "invalid" } else { "failed" };
            timer.finish(outcome);
            let error = ApiError::from(e);
            record_request("analyze", error.status().as_u16());
            Err(error)
        }
    }
}

/// Create the analyze routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze_content))
}

//! Grading endpoint.
//!
//! Validates the request, then hands both sentences to the scorer. All
//! rejection happens here, before scoring: a malformed body, a missing
//! field, or an oversized input never reaches the metric.

use super::state::ApiState;
use crate::scoring;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use std::sync::Arc;

#[derive(Deserialize)]
pub(super) struct GradeRequest {
    submitted: String,
    reference: String,
}

/// Build a 400 JSON response for a request the scorer never saw.
fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Grade a submission against its reference sentence.
///
/// Responds 200 with `{ similarity_percent, passed }`, or 400 when the body
/// is malformed, a field is missing or not a string, or either field
/// exceeds the configured character cap.
pub(super) async fn grade(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected malformed grade request");
            return bad_request(format!("invalid grade request: {rejection}"));
        }
    };

    let max_chars = state.config.limits.max_input_chars;
    if request.submitted.chars().count() > max_chars
        || request.reference.chars().count() > max_chars
    {
        tracing::debug!(max_chars, "rejected oversized grade request");
        return bad_request(format!(
            "each field must be at most {max_chars} characters"
        ));
    }

    let result = scoring::score(&request.submitted, &request.reference);

    tracing::debug!(
        similarity_percent = result.similarity_percent,
        passed = result.passed,
        "graded submission"
    );

    Json(result).into_response()
}

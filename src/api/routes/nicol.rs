use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::api::models::{AskRequest, AskResponse};
use crate::api::AppState;

/// Every internal failure surfaces as this one message; the cause stays in
/// the logs.
const OFFLINE_MESSAGE: &str = "Nicol's brain is offline. Check API keys.";

pub async fn ask(
    State(state): State<AppState>,
    method: Method,
    body: Option<Json<AskRequest>>,
) -> Response {
    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    let prompt = body.map(|Json(req)| req.prompt).unwrap_or_default();

    match state.summarizer.summarize(&prompt).await {
        Ok(text) => (StatusCode::OK, Json(AskResponse { text })).into_response(),
        Err(e) => {
            error!(error = %e, "Summarization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AskResponse { text: OFFLINE_MESSAGE.to_string() }),
            )
                .into_response()
        }
    }
}

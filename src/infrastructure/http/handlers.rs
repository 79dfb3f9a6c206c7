//! Request handlers for the chat boundary.
//!
//! `/chat` never answers with a non-success status: OPTIONS short-circuits
//! with 204, POST resolves through the pipeline, and anything that goes
//! wrong on the way (bad body, missing message, other methods, panics)
//! degrades to the hard fallback reply with 200.

use std::any::Any;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info_span, warn, Instrument};
use uuid::Uuid;

use super::server::AppState;
use crate::domain::errors::{ChatError, ChatResult};
use crate::domain::models::{ChatReply, ChatRequest};

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn chat(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let span = info_span!("chat_request", request_id = %Uuid::new_v4(), method = %method);

    async move {
        match method {
            Method::OPTIONS => StatusCode::NO_CONTENT.into_response(),
            Method::POST => match resolve_body(&state, body).await {
                Ok(reply) => reply_response(reply),
                Err(err) => {
                    error!(error = %err, "request failed, replying with hard fallback");
                    reply_response(ChatReply::hard_fallback())
                }
            },
            _ => {
                warn!("unsupported method, replying with hard fallback");
                reply_response(ChatReply::hard_fallback())
            }
        }
    }
    .instrument(span)
    .await
}

async fn resolve_body(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> ChatResult<ChatReply> {
    let body = body.map_err(|e| ChatError::InvalidRequest(e.body_text()))?;
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| ChatError::InvalidRequest(format!("malformed body: {e}")))?;
    state.pipeline.resolve(&request).await
}

fn reply_response(reply: ChatReply) -> Response {
    (StatusCode::OK, Json(reply)).into_response()
}

/// Response used by the panic-catching layer.
pub fn panic_fallback(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(
        error = %ChatError::Unexpected(detail.to_string()),
        "handler panicked, replying with hard fallback"
    );
    reply_response(ChatReply::hard_fallback())
}

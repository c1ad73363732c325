//! Request handlers for the Tokenizer Service
//!
//! Bodies are parsed as JSON regardless of `Content-Type`. Shape errors are
//! answered with `400`, tokenizer failures with `500`; neither affects other
//! requests.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::ServiceError, tokenizer::TokenModel};

/// Shared state for handlers
pub struct HandlerState {
    pub model: Arc<dyn TokenModel>,
}

impl HandlerState {
    pub fn new(model: Arc<dyn TokenModel>) -> Self {
        Self { model }
    }
}

#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub tokens: Vec<u32>,
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(body).map_err(|e| ServiceError::MalformedRequest(e.to_string()))
}

/// Health endpoint
pub async fn health_handler(State(state): State<Arc<HandlerState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "vocab_size": state.model.vocab_size(),
    }))
}

/// `POST /encode`: `{"text": ...}` to a JSON array of token ids
pub async fn encode_handler(
    State(state): State<Arc<HandlerState>>,
    body: Bytes,
) -> Result<Json<Vec<u32>>, ServiceError> {
    let request_id = Uuid::new_v4();
    let request: EncodeRequest = parse_body(&body)?;

    // Special tokens are never added by the service.
    let ids = state.model.encode(&request.text, false)?;

    debug!(
        request_id = %request_id,
        bytes = request.text.len(),
        tokens = ids.len(),
        "Encoded text"
    );

    Ok(Json(ids))
}

/// `POST /decode`: `{"tokens": [...]}` to a JSON string
pub async fn decode_handler(
    State(state): State<Arc<HandlerState>>,
    body: Bytes,
) -> Result<Json<String>, ServiceError> {
    let request_id = Uuid::new_v4();
    let request: DecodeRequest = parse_body(&body)?;

    // Special tokens present in the input are rendered, not dropped.
    let text = state.model.decode(&request.tokens, false)?;

    debug!(
        request_id = %request_id,
        tokens = request.tokens.len(),
        bytes = text.len(),
        "Decoded tokens"
    );

    Ok(Json(text))
}

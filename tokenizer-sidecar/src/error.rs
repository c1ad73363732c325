//! Error types for the tokenizer sidecar

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Failure to load the tokenizer model at startup. Always fatal.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("model file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("model path is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("invalid tokenizer definition in {}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },
}

#[derive(Error, Debug)]
#[error("encode failed: {0}")]
pub struct EncodeError(pub String);

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("token id {0} is not in the vocabulary")]
    UnknownToken(u32),

    #[error("decode failed: {0}")]
    Failed(String),
}

/// Per-request failure. Contained to a single request/response cycle.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Encode(_) | ServiceError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ServiceError::MalformedRequest(_) => "malformed_request",
            ServiceError::Encode(_) => "encode_error",
            ServiceError::Decode(DecodeError::UnknownToken(_)) => "unknown_token",
            ServiceError::Decode(DecodeError::Failed(_)) => "decode_error",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_type = if status.is_client_error() {
            warn!(error = %self, "Rejected malformed request");
            "invalid_request_error"
        } else {
            error!(error = %self, "Tokenization failed");
            "server_error"
        };

        (
            status,
            Json(serde_json::json!({
                "error": {
                    "message": self.to_string(),
                    "type": error_type,
                    "code": self.code(),
                }
            })),
        )
            .into_response()
    }
}

/// Why the supervisor was considered gone. Every variant is fatal.
#[derive(Error, Debug)]
pub enum LivenessFailure {
    #[error("supervisor probe timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u128 },

    #[error("supervisor unreachable: {0}")]
    Connect(String),

    #[error("supervisor answered with status {0}")]
    Status(u16),

    #[error("supervisor probe failed: {0}")]
    Transport(String),

    #[error("liveness monitor panicked: {0}")]
    Panicked(String),
}

impl LivenessFailure {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            LivenessFailure::Timeout { .. } => "timeout",
            LivenessFailure::Connect(_) => "connect",
            LivenessFailure::Status(_) => "status",
            LivenessFailure::Transport(_) => "transport",
            LivenessFailure::Panicked(_) => "panicked",
        }
    }
}

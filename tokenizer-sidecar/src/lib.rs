//! Tokenizer sidecar: encode/decode over HTTP for a supervising process.

pub mod error;
pub mod tokenizer;
pub mod tokenizer_service;

pub use error::{DecodeError, EncodeError, LivenessFailure, LoadError, ServiceError};
pub use tokenizer::{ModelHandle, TokenModel};
pub use tokenizer_service::{
    LivenessConfig, LivenessMonitor, SupervisorClient, TokenizerServer, TokenizerServiceConfig,
};

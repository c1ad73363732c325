//! Tokenizer model abstraction
//!
//! Defines the [`TokenModel`] trait the request handlers are written against
//! and the [`ModelHandle`] that wraps a `tokenizer.json` loaded from disk.

mod handle;

pub use handle::ModelHandle;

use crate::error::{DecodeError, EncodeError};

/// Converts between text and token ids.
///
/// Implementations are shared read-only across every in-flight request, so
/// both operations take `&self` and must not keep per-call scratch state.
pub trait TokenModel: Send + Sync {
    /// Encode text to token ids, in token stream order.
    fn encode(&self, text: &str, add_special_tokens: bool) -> Result<Vec<u32>, EncodeError>;

    /// Decode token ids back to text.
    ///
    /// # Errors
    /// Returns [`DecodeError::UnknownToken`] if an id is outside the vocabulary.
    fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> Result<String, DecodeError>;

    /// Vocabulary size, added tokens included.
    fn vocab_size(&self) -> usize;
}

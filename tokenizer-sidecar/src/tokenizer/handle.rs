//! Tokenizer handle backed by the `tokenizers` crate

use std::path::{Path, PathBuf};

use tokenizers::Tokenizer;
use tracing::info;

use super::TokenModel;
use crate::error::{DecodeError, EncodeError, LoadError};

/// Loaded tokenizer. Immutable after [`ModelHandle::load`].
pub struct ModelHandle {
    tokenizer: Tokenizer,
    path: PathBuf,
}

impl ModelHandle {
    /// Load a serialized tokenizer (`tokenizer.json`) from `path`.
    ///
    /// # Errors
    /// Returns [`LoadError`] if the file is missing, is not a regular file,
    /// or does not describe a valid tokenizer.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let metadata =
            std::fs::metadata(path).map_err(|_| LoadError::NotFound(path.to_path_buf()))?;
        if !metadata.is_file() {
            return Err(LoadError::NotAFile(path.to_path_buf()));
        }

        let tokenizer = Tokenizer::from_file(path).map_err(|e| LoadError::Invalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        info!(
            path = %path.display(),
            vocab_size = tokenizer.get_vocab_size(true),
            "Loaded tokenizer"
        );

        Ok(Self {
            tokenizer,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenModel for ModelHandle {
    fn encode(&self, text: &str, add_special_tokens: bool) -> Result<Vec<u32>, EncodeError> {
        let encoding = self
            .tokenizer
            .encode(text, add_special_tokens)
            .map_err(|e| EncodeError(e.to_string()))?;

        Ok(encoding.get_ids().to_vec())
    }

    fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> Result<String, DecodeError> {
        // `tokenizers` drops ids it cannot resolve instead of failing.
        if let Some(&unknown) = ids
            .iter()
            .find(|&&id| self.tokenizer.id_to_token(id).is_none())
        {
            return Err(DecodeError::UnknownToken(unknown));
        }

        self.tokenizer
            .decode(ids, skip_special_tokens)
            .map_err(|e| DecodeError::Failed(e.to_string()))
    }

    fn vocab_size(&self) -> usize {
        self.tokenizer.get_vocab_size(true)
    }
}

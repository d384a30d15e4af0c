//! Tokenizer adapter backed by tiktoken-rs.
//!
//! The chunker measures and cuts text by token count, so all counting and
//! slicing goes through this adapter. For known OpenAI models the exact BPE
//! is used; everything else falls back to r50k_base (the GPT-2 family
//! vocabulary), which the default chunk budget was tuned against.

use tiktoken_rs::{get_bpe_from_model, r50k_base, CoreBPE};

use crate::error::TokenizeError;

/// A fixed BPE vocabulary selected by model name.
///
/// Encoding is deterministic: the same text always yields the same token
/// sequence. decode(encode(s)) is lossy for some inputs (byte-level merges
/// can split multi-byte characters at slice boundaries), which is acceptable
/// for summarization.
pub struct Tokenizer {
    bpe: CoreBPE,
}

impl Tokenizer {
    /// Create a tokenizer for the given model name.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::VocabularyUnavailable`] if the backing
    /// vocabulary cannot be loaded. This is a setup-time failure and is
    /// never retried.
    pub fn for_model(model: &str) -> Result<Self, TokenizeError> {
        let bpe = match get_bpe_from_model(model) {
            Ok(bpe) => bpe,
            Err(_) => r50k_base()
                .map_err(|e| TokenizeError::VocabularyUnavailable(e.to_string()))?,
        };
        Ok(Self { bpe })
    }

    /// Encode text into a token-id sequence.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text)
    }

    /// Decode a token-id slice back into text.
    pub fn decode(&self, tokens: &[u32]) -> Result<String, TokenizeError> {
        self.bpe
            .decode(tokens.to_vec())
            .map_err(|e| TokenizeError::Decode(e.to_string()))
    }

    /// Count the tokens in a text string.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

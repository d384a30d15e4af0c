//! Raw token-window chunking.
//!
//! Tokenizes the whole text once and slides a fixed window of `max_tokens`
//! over the sequence, advancing `max_tokens - overlap` per step. No sentence
//! awareness and no chunk-count ceiling.

use std::ops::Range;

use super::ChunkParams;
use crate::error::ChunkError;
use crate::tokens::Tokenizer;

pub(super) fn chunk(
    text: &str,
    params: &ChunkParams,
    tokenizer: &Tokenizer,
) -> Result<Vec<String>, ChunkError> {
    let tokens = tokenizer.encode(text);
    let mut chunks = Vec::new();
    for span in windows(tokens.len(), params.max_tokens(), params.step()) {
        chunks.push(tokenizer.decode(&tokens[span])?);
    }
    Ok(chunks)
}

/// Window spans over a token sequence of length `total`.
///
/// Each span covers up to `max_tokens` tokens and starts `step` after the
/// previous one; iteration stops once a start offset reaches the end. For
/// full windows, consecutive spans share `max_tokens - step` tokens.
pub(crate) fn windows(total: usize, max_tokens: usize, step: usize) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    while start < total {
        let end = (start + max_tokens).min(total);
        spans.push(start..end);
        start += step;
    }
    spans
}

//! Sentence-aware chunking with greedy packing and a merge ceiling.
//!
//! Sentences are packed into the current chunk while the running token count
//! stays within the budget. A sentence that alone exceeds the budget is
//! force-split at the token level into overlapping windows. When the initial
//! packing produces more chunks than the ceiling, a second greedy pass
//! re-packs chunks by token count, discarding the overlap alignment.

use std::sync::LazyLock;

use regex::Regex;

use super::{window, ChunkParams};
use crate::constants::CHUNK_MERGE_CEILING;
use crate::error::ChunkError;
use crate::tokens::Tokenizer;

/// A run of terminal punctuation followed by whitespace ends a sentence.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?]+)\s+").expect("sentence boundary regex"));

/// Split text into sentences at terminal punctuation followed by whitespace.
///
/// The punctuation stays with its sentence. A trailing fragment without
/// terminal punctuation is returned as the final sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last = 0;
    for caps in SENTENCE_END.captures_iter(text) {
        let Some(punct) = caps.get(1) else { continue };
        let Some(whole) = caps.get(0) else { continue };
        let sentence = text[last..punct.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        last = whole.end();
    }
    if last < text.len() {
        let tail = text[last..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
    }
    sentences
}

pub(super) fn chunk(
    text: &str,
    params: &ChunkParams,
    tokenizer: &Tokenizer,
) -> Result<Vec<String>, ChunkError> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_tokens = 0usize;

    for sentence in split_sentences(text) {
        let sentence_tokens = tokenizer.count(sentence);

        if sentence_tokens > params.max_tokens() {
            // One sentence over the whole budget: flush what we have, then
            // force-split it into overlapping token windows.
            if !current.is_empty() {
                chunks.push(current.join(" "));
                current.clear();
                current_tokens = 0;
            }
            let tokens = tokenizer.encode(sentence);
            for span in window::windows(tokens.len(), params.max_tokens(), params.step()) {
                chunks.push(tokenizer.decode(&tokens[span])?);
            }
        } else if current_tokens + sentence_tokens > params.max_tokens() && !current.is_empty() {
            chunks.push(current.join(" "));
            current = vec![sentence];
            current_tokens = sentence_tokens;
        } else {
            current.push(sentence);
            current_tokens += sentence_tokens;
        }
    }
    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    if chunks.len() > CHUNK_MERGE_CEILING {
        chunks = merge_packed(chunks, params.max_tokens(), tokenizer);
    }
    Ok(chunks)
}

/// Re-pack chunks by token count into as few chunks as possible without
/// exceeding the budget. Overlap alignment from forced splits is discarded.
pub(super) fn merge_packed(
    chunks: Vec<String>,
    max_tokens: usize,
    tokenizer: &Tokenizer,
) -> Vec<String> {
    let mut merged = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_tokens = 0usize;

    for chunk in chunks {
        let chunk_tokens = tokenizer.count(&chunk);
        if current_tokens + chunk_tokens > max_tokens && !current.is_empty() {
            merged.push(current.join(" "));
            current = vec![chunk];
            current_tokens = chunk_tokens;
        } else {
            current.push(chunk);
            current_tokens += chunk_tokens;
        }
    }
    if !current.is_empty() {
        merged.push(current.join(" "));
    }
    merged
}

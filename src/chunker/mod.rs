//! Token-budgeted text chunking.
//!
//! Splits normalized text into an ordered sequence of chunk strings, each
//! within a maximum token budget. Two strategies exist behind one interface:
//! [`ChunkStrategy::Sentence`] (the default) packs whole sentences greedily
//! and force-splits oversized ones; [`ChunkStrategy::TokenWindow`] slides a
//! raw fixed-size window over the token sequence. The strategies are kept
//! separate: they produce different boundaries for the same input.

mod sentence;
mod window;


use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::error::ChunkError;
use crate::tokens::Tokenizer;

pub use sentence::split_sentences;

/// Which chunking policy to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkStrategy {
    /// Pack whole sentences greedily; force-split sentences over the budget.
    #[default]
    Sentence,
    /// Fixed token window advancing by `max_tokens - overlap` per step.
    TokenWindow,
}

impl FromStr for ChunkStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sentence" => Ok(Self::Sentence),
            "window" | "token-window" => Ok(Self::TokenWindow),
            other => Err(anyhow!(
                "Unknown chunking strategy: {other}. Supported: sentence, window"
            )),
        }
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentence => write!(f, "sentence"),
            Self::TokenWindow => write!(f, "window"),
        }
    }
}

/// Validated chunking parameters.
///
/// Construction rejects `overlap >= max_tokens`: the window step would stop
/// advancing and the chunker could not terminate.
#[derive(Debug, Clone, Copy)]
pub struct ChunkParams {
    max_tokens: usize,
    overlap: usize,
}

impl ChunkParams {
    pub fn new(max_tokens: usize, overlap: usize) -> Result<Self, ChunkError> {
        if max_tokens == 0 {
            return Err(ChunkError::ZeroBudget);
        }
        if overlap >= max_tokens {
            return Err(ChunkError::OverlapTooLarge {
                max_tokens,
                overlap,
            });
        }
        Ok(Self {
            max_tokens,
            overlap,
        })
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    #[cfg(test)]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Tokens the window start advances per step.
    pub fn step(&self) -> usize {
        self.max_tokens - self.overlap
    }
}

/// Split `text` into an ordered sequence of chunks under the token budget.
///
/// Empty or whitespace-only input yields an empty sequence. Every returned
/// chunk satisfies `tokenizer.count(chunk) <= params.max_tokens()`.
pub fn chunk(
    text: &str,
    strategy: ChunkStrategy,
    params: &ChunkParams,
    tokenizer: &Tokenizer,
) -> Result<Vec<String>, ChunkError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    match strategy {
        ChunkStrategy::Sentence => sentence::chunk(text, params, tokenizer),
        ChunkStrategy::TokenWindow => window::chunk(text, params, tokenizer),
    }
}

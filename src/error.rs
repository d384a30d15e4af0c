//! Typed errors for the summarization pipeline.
//!
//! Each boundary gets its own enum: tokenizer setup, chunk parameters,
//! document extraction, and the remote completion call. [`SummarizeError`]
//! is the umbrella the pipeline surfaces to the CLI layer.

use thiserror::Error;

/// Tokenizer setup or decode failure. Fatal, never retried.
#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("failed to load tokenizer vocabulary: {0}")]
    VocabularyUnavailable(String),

    #[error("failed to decode token sequence: {0}")]
    Decode(String),
}

/// Invalid chunking input or a tokenizer failure inside the chunker.
#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("overlap ({overlap}) must be smaller than max_tokens ({max_tokens})")]
    OverlapTooLarge { max_tokens: usize, overlap: usize },

    #[error("max_tokens must be greater than zero")]
    ZeroBudget,

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

/// Document extraction failure. Surfaced as a user message, no partial output.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("failed to parse .docx document: {0}")]
    Docx(String),

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),
}

/// Completion request failure, tagged at the client boundary.
///
/// Whether this reaches the reducer as an error or as inline sentinel text
/// is decided once by the configured error policy.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Umbrella error for the map-reduce pipeline.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error(transparent)]
    Chunk(#[from] ChunkError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("summary reduction did not converge after {rounds} rounds")]
    DidNotConverge { rounds: usize },
}

//! Centralized constants for youyaku.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "youyaku";

/// Default completion model identifier.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";

/// Default base URL for the completion API.
pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz";

/// Environment variable checked first when resolving the API key.
pub const API_KEY_ENV: &str = "TOGETHER_API_KEY";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

// --- Chunking defaults ---

/// Default maximum tokens per chunk.
pub const DEFAULT_MAX_CHUNK_TOKENS: usize = 2000;

/// Default token overlap between consecutive chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Chunk count above which the sentence strategy re-packs chunks.
pub const CHUNK_MERGE_CEILING: usize = 10;

// --- Generation defaults ---

/// Maximum tokens requested per completion.
pub const COMPLETION_MAX_TOKENS: u32 = 512;

/// Sampling temperature for completions.
pub const COMPLETION_TEMPERATURE: f32 = 0.3;

/// Nucleus sampling parameter for completions.
pub const COMPLETION_TOP_P: f32 = 0.9;

/// Timeout for a single completion request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

// --- Reduction ---

/// Maximum reduce-phase rounds before giving up on convergence.
pub const MAX_REDUCE_ROUNDS: usize = 8;

/// Placeholder replaced with chunk text when rendering the prompt template.
pub const PROMPT_PLACEHOLDER: &str = "{TEXT}";

/// Default prompt template for summarizing one chunk.
pub const DEFAULT_PROMPT_TEMPLATE: &str =
    "Write a short summary (3-5 sentences) of the following text, \
preserving the key facts:\n\n{TEXT}";

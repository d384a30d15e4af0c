//! Struct definitions and serde defaults for youyaku configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for youyaku, deserialized from `config.toml`.
///
/// Fields use serde defaults so the tool runs with sensible defaults when
/// no config file exists. This struct is passed explicitly into the client
/// and pipeline constructors; there is no ambient global configuration.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Completion model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Completion API connection settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Chunking settings.
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// Generation settings for each completion request.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Prompt template with a `{TEXT}` placeholder for the chunk body.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: Option<String>,
}

/// Returns the default model identifier.
///
/// Used by serde's `#[serde(default)]` attribute during deserialization.
pub(super) fn default_model() -> String {
    crate::constants::DEFAULT_MODEL.to_string()
}

fn default_prompt_template() -> Option<String> {
    Some(crate::constants::DEFAULT_PROMPT_TEMPLATE.to_string())
}

/// Connection details for the completion API.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// API key for authentication. Can also be set via TOGETHER_API_KEY.
    pub api_key: Option<String>,
    /// Custom base URL for the completion API.
    pub base_url: Option<String>,
}

/// How input text is split into token-bounded chunks.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChunkingConfig {
    /// Chunking strategy name: "sentence" or "window".
    pub strategy: Option<String>,
    /// Maximum tokens per chunk.
    pub max_tokens: Option<usize>,
    /// Token overlap between consecutive chunks.
    pub overlap: Option<usize>,
}

/// Per-request generation parameters.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GenerationConfig {
    /// Maximum tokens requested per completion.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,
    /// Timeout for one completion request, in seconds.
    pub timeout_secs: Option<u64>,
    /// What a failed request becomes: "embed" (inline sentinel text) or
    /// "abort" (halt the reduction).
    pub on_error: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api: ApiConfig::default(),
            chunking: ChunkingConfig::default(),
            generation: GenerationConfig::default(),
            prompt_template: default_prompt_template(),
        }
    }
}

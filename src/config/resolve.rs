//! Environment variable substitution and typed accessors.

use anyhow::Result;

use super::types::Config;
use crate::chunker::ChunkStrategy;
use crate::constants::{
    API_KEY_ENV, COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE, COMPLETION_TOP_P,
    DEFAULT_BASE_URL, DEFAULT_CHUNK_OVERLAP, DEFAULT_MAX_CHUNK_TOKENS,
    DEFAULT_PROMPT_TEMPLATE, REQUEST_TIMEOUT_SECS,
};
use crate::provider::ErrorPolicy;

impl Config {
    /// Resolve `{env:VAR_NAME}` patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        self.model = Self::resolve_str(&self.model);
        if let Some(ref mut key) = self.api.api_key {
            *key = Self::resolve_str(key);
        }
        if let Some(ref mut url) = self.api.base_url {
            *url = Self::resolve_str(url);
        }
        if let Some(ref mut template) = self.prompt_template {
            *template = Self::resolve_str(template);
        }
    }

    /// Replace `{env:VAR}` with the environment variable value.
    fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        while let Some(start) = result.find("{env:") {
            if let Some(end) = result[start..].find('}') {
                let var_name = &result[start + 5..start + end];
                let value = std::env::var(var_name).unwrap_or_default();
                result = format!(
                    "{}{}{}",
                    &result[..start],
                    value,
                    &result[start + end + 1..]
                );
            } else {
                break;
            }
        }
        result
    }

    /// Resolve the API key: environment variable first, then config value.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Ok(val) = std::env::var(API_KEY_ENV) {
            if !val.is_empty() {
                return Some(val);
            }
        }
        self.api
            .api_key
            .as_ref()
            .filter(|key| !key.is_empty())
            .cloned()
    }

    /// Base URL of the completion API.
    pub fn base_url(&self) -> String {
        self.api
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// The configured chunking strategy.
    pub fn strategy(&self) -> Result<ChunkStrategy> {
        match self.chunking.strategy.as_deref() {
            Some(name) => name.parse(),
            None => Ok(ChunkStrategy::default()),
        }
    }

    /// Maximum tokens per chunk.
    pub fn chunk_max_tokens(&self) -> usize {
        self.chunking.max_tokens.unwrap_or(DEFAULT_MAX_CHUNK_TOKENS)
    }

    /// Token overlap between consecutive chunks.
    pub fn chunk_overlap(&self) -> usize {
        self.chunking.overlap.unwrap_or(DEFAULT_CHUNK_OVERLAP)
    }

    /// Maximum tokens requested per completion.
    pub fn completion_max_tokens(&self) -> u32 {
        self.generation.max_tokens.unwrap_or(COMPLETION_MAX_TOKENS)
    }

    /// Sampling temperature for completions.
    pub fn completion_temperature(&self) -> f32 {
        self.generation
            .temperature
            .unwrap_or(COMPLETION_TEMPERATURE)
    }

    /// Nucleus sampling parameter for completions.
    pub fn completion_top_p(&self) -> f32 {
        self.generation.top_p.unwrap_or(COMPLETION_TOP_P)
    }

    /// Timeout for one completion request, in seconds.
    pub fn request_timeout_secs(&self) -> u64 {
        self.generation.timeout_secs.unwrap_or(REQUEST_TIMEOUT_SECS)
    }

    /// How a failed completion reaches the reducer.
    pub fn error_policy(&self) -> Result<ErrorPolicy> {
        match self.generation.on_error.as_deref() {
            Some(name) => name.parse(),
            None => Ok(ErrorPolicy::default()),
        }
    }

    /// The prompt template for summarizing one chunk.
    pub fn prompt_template(&self) -> String {
        self.prompt_template
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT_TEMPLATE.to_string())
    }
}

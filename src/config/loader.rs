//! File loading for youyaku configuration.

use anyhow::{Context, Result};
use std::fs;

use super::types::Config;

impl Config {
    /// Loads the global config from `~/.config/youyaku/config.toml`.
    ///
    /// If no config file exists, creates one with sensible defaults
    /// (including an `{env:TOGETHER_API_KEY}` placeholder for the API key)
    /// and returns it.
    pub(super) fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            let default_toml = format!(
                r#"model = "{}"

[api]
api_key = "{{env:{}}}"

[chunking]
strategy = "sentence"
max_tokens = {}
overlap = {}
"#,
                super::types::default_model(),
                crate::constants::API_KEY_ENV,
                crate::constants::DEFAULT_MAX_CHUNK_TOKENS,
                crate::constants::DEFAULT_CHUNK_OVERLAP,
            );
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &default_toml)
                .with_context(|| format!("Failed to write default config to {:?}", path))?;
            let config: Config = toml::from_str(&default_toml)
                .with_context(|| "Failed to parse default config".to_string())?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.model, crate::constants::DEFAULT_MODEL);
        assert!(config.api.api_key.is_none());
        assert_eq!(
            config.prompt_template.as_deref(),
            Some(crate::constants::DEFAULT_PROMPT_TEMPLATE)
        );
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let config: Config = toml::from_str(
            r#"
model = "other/model"

[chunking]
strategy = "window"
max_tokens = 512
"#,
        )
        .unwrap();
        assert_eq!(config.model, "other/model");
        assert_eq!(config.chunking.strategy.as_deref(), Some("window"));
        assert_eq!(config.chunking.max_tokens, Some(512));
        assert_eq!(config.chunking.overlap, None);
    }
}

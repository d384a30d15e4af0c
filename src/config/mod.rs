//! Configuration types and path resolution for youyaku.
//!
//! Settings live as TOML at the platform's XDG config path
//! (e.g. `~/.config/youyaku/config.toml` on Linux). Values resolve with
//! `{env:VAR}` substitution, and the API key prefers the environment over
//! the config file.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;
#[allow(unused_imports)]
pub use types::{ApiConfig, ChunkingConfig, GenerationConfig};

use anyhow::Result;

impl Config {
    /// Load config from the global file, creating it with defaults if
    /// missing, then resolve `{env:VAR}` substitutions.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_global()?;
        config.resolve_substitutions();
        Ok(config)
    }
}

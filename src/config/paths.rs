//! XDG path resolution for youyaku configuration.

use anyhow::Result;
use std::path::PathBuf;

use super::types::Config;

impl Config {
    /// Returns the platform-specific configuration directory.
    ///
    /// Returns `~/.config/youyaku/` on Linux (`XDG_CONFIG_HOME/youyaku`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform's config directory cannot be
    /// determined.
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join(crate::constants::APP_NAME);
        Ok(dir)
    }

    /// Returns the full path to the configuration file.
    ///
    /// Returns `~/.config/youyaku/config.toml` on Linux.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(crate::constants::CONFIG_FILENAME))
    }
}

//! Toggle file discovery and loading

use super::expand::expand_path;
use super::toggles::ToggleConfig;
use crate::error::TogglerError;
use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in configuration directories
pub const CONFIG_FILE_NAME: &str = "toggles.toml";

/// Environment variable naming the toggle file or its directory
pub const CONFIG_ENV_VAR: &str = "TOGGLER_CONFIG";

/// Configuration loader for locating and parsing the toggle file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default per-user location: `<config dir>/toggler/toggles.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("toggler").join(CONFIG_FILE_NAME))
    }

    /// Resolve a user-supplied path after `~`/variable expansion
    ///
    /// A directory stands for the `toggles.toml` inside it.
    pub fn resolve_explicit(raw: &str) -> Result<PathBuf> {
        let expanded = expand_path(raw)?;
        let path = if expanded.is_dir() {
            expanded.join(CONFIG_FILE_NAME)
        } else {
            expanded
        };

        if !path.is_file() {
            return Err(TogglerError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Ok(path)
    }

    /// Pick the toggle file to use
    ///
    /// Searches in the following order:
    /// 1. `custom_path`, when given (file or directory)
    /// 2. `toggles.toml` in `start_dir`
    /// 3. `user_dir`, normally [`ConfigLoader::user_config_path`]
    pub fn locate(
        custom_path: Option<&str>,
        start_dir: &Path,
        user_dir: Option<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(raw) = custom_path {
            return Self::resolve_explicit(raw);
        }

        let candidates: Vec<PathBuf> = std::iter::once(start_dir.join(CONFIG_FILE_NAME))
            .chain(user_dir)
            .collect();

        for candidate in &candidates {
            if candidate.is_file() {
                tracing::debug!("Found toggle file: {}", candidate.display());
                return Ok(candidate.clone());
            }
        }

        let searched = candidates
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(TogglerError::config_error(format!(
            "No {CONFIG_FILE_NAME} found (searched: {searched}). Pass --config or set {CONFIG_ENV_VAR}"
        )))
    }

    /// Read and parse a toggle file
    pub fn load_from_file(path: &Path) -> Result<ToggleConfig> {
        let source = fs::read_to_string(path).map_err(|e| TogglerError::io_error(path, e))?;
        let config =
            ToggleConfig::from_toml_str(&source).map_err(|e| TogglerError::parse_error(path, e))?;

        tracing::debug!(
            "Loaded {} scope(s) from {}",
            config.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load the toggle file from `custom_path` or the default locations
    pub fn load(custom_path: Option<&str>, start_dir: Option<&Path>) -> Result<ToggleConfig> {
        let start_dir = start_dir.unwrap_or_else(|| Path::new("."));
        let path = Self::locate(custom_path, start_dir, Self::user_config_path())?;
        Self::load_from_file(&path)
    }
}

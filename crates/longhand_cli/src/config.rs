use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// How solve results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LonghandConfig {
    pub show_steps: bool,
    pub show_scratchpad: bool,
    pub ascii_only: bool,
    pub format: OutputFormat,
}

impl Default for LonghandConfig {
    fn default() -> Self {
        Self {
            show_steps: true,
            show_scratchpad: true,
            ascii_only: false,
            format: OutputFormat::Text,
        }
    }
}

impl LonghandConfig {
    pub const FILE_NAME: &'static str = "longhand.toml";
    pub const PATH_ENV: &'static str = "LONGHAND_CONFIG";

    /// Where to look: the explicit path, then `$LONGHAND_CONFIG`, then
    /// `./longhand.toml`.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(Self::FILE_NAME),
        }
    }

    /// Load the config file, falling back to defaults when it is absent or
    /// unusable.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = Self::resolve_path(explicit);
        if !path.exists() {
            if explicit.is_some() {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
            }
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "config loaded");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable config file, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

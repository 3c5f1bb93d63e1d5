//! Site configuration.
//!
//! Loads an optional `ecoinlink.toml`. Every key has a default, so an empty
//! file (or no file at all) yields the shipped configuration.

use crate::bootstrap::Providers;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "ecoinlink.toml";

/// Base path the site is deployed under by default.
pub const DEFAULT_BASE_PATH: &str = "/ecoinlink-platform/";

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`SiteConfig`]
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public path the site is served from; only affects asset URLs
    pub base_path: String,
    /// Document title
    pub title: String,
    /// Document language
    pub lang: String,
    /// Bootstrap providers
    pub providers: Providers,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            title: "ECOinLink".to_string(),
            lang: "ko".to_string(),
            providers: Providers::default(),
        }
    }
}

impl SiteConfig {
    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: SiteConfig = toml::from_str(content)?;
        config.base_path = normalize_base_path(&config.base_path);
        Ok(config)
    }

    /// Load config from a specific path. Errors if the file is missing or
    /// malformed.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from `path` if it exists. Returns the default config when
    /// the file is absent or unusable, logging a warning for the latter.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Replace the base path, normalising it.
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_base_path(base_path);
        self
    }
}

/// Make sure a base path starts and ends with `/`.
///
/// ```rust
/// use ecoinlink_site::config::normalize_base_path;
///
/// assert_eq!(normalize_base_path("site"), "/site/");
/// assert_eq!(normalize_base_path(""), "/");
/// ```
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.base_path, "/ecoinlink-platform/");
        assert_eq!(config.lang, "ko");
        assert_eq!(config.providers, Providers::default());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_or_default(&temp.path().join(CONFIG_FILE));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_missing_file_strict() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::load_from_path(&temp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"
base_path = "preview"
title = "ECOinLink Preview"

[providers.query]
retry = 3

[providers.sonner]
position = "bottom-left"
expand = true
"#,
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&path).expect("valid config");
        assert_eq!(config.base_path, "/preview/");
        assert_eq!(config.title, "ECOinLink Preview");
        assert_eq!(config.lang, "ko");
        assert_eq!(config.providers.query.retry, 3);
        assert_eq!(config.providers.query.stale_time_secs, 300);
        assert_eq!(config.providers.sonner.position.as_str(), "bottom-left");
        assert!(config.providers.sonner.expand);
        assert!(config.providers.sonner.rich_colors);
    }

    #[test]
    fn test_invalid_config_is_a_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "base_path = [1, 2").expect("write config");

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(SiteConfig::load_or_default(&path), SiteConfig::default());
    }
}

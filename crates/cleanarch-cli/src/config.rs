//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file: `--config <FILE>` (must exist), otherwise the platform
//!    config directory (optional)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use cleanarch_core::domain::DEFAULT_PROJECT_NAME;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Name used when the prompt is answered with an empty line.
    pub project_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                project_name: DEFAULT_PROJECT_NAME.into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering a TOML file over the built-in defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read if present.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let defaults = Self::default();

        let builder = config::Config::builder()
            .set_default("defaults.project_name", defaults.defaults.project_name)
            .and_then(|b| b.set_default("output.no_color", defaults.output.no_color))
            .map_err(config_error)?;

        let builder = match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading explicit config file");
                builder.add_source(config::File::from(path).required(true))
            }
            None => {
                let path = Self::config_path();
                debug!(path = %path.display(), "probing default config file");
                builder.add_source(config::File::from(path).required(false))
            }
        };

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cleanarch.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cleanarch", "cleanarch")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".cleanarch.toml"))
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_project_name_is_fastapi_clean_architecture() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.project_name, "FASTAPI_CLEANARCHITECTURE");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleanarch.toml");
        std::fs::write(&path, "[defaults]\nproject_name = \"Shop\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.project_name, "Shop");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output]\nno_color = \"maybe\"\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

//! Process-wide configuration.
//!
//! ## Usage
//!
//! Load a [`VitrineConfig`] once at startup and hand it to
//! [`crate::logging::init_tracing`] and [`crate::dp::set_scale_factor`].
//! Widget arguments (`CarouselArgs` and friends) are serde types too, so a
//! host can keep them in the same JSON document and read it with
//! [`load_json`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

/// Default log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "error,vitrine_ui=info,vitrine_components=info";

/// Errors raised while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for the requested type.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration shared by every widget in a process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitrineConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Use the multi-line pretty formatter instead of the compact one.
    pub pretty_logs: bool,
    /// Physical pixels per dp.
    pub scale_factor: f64,
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty_logs: false,
            scale_factor: 1.0,
        }
    }
}

impl VitrineConfig {
    /// Returns `<config dir>/vitrine/config.json`, if the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vitrine").join("config.json"))
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present, and the built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return load_json(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => load_json(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Reads and deserializes a JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::process;

    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("vitrine-{}-{name}", process::id()));
        fs::write(&path, contents).expect("scratch file should be writable");
        path
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let path = scratch_file("partial.json", r#"{ "scale_factor": 2.0 }"#);
        let config: VitrineConfig = load_json(&path).expect("partial config should load");
        let _ = fs::remove_file(&path);

        assert_eq!(config.scale_factor, 2.0);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.pretty_logs);
    }

    #[test]
    fn explicit_missing_path_is_an_io_error() {
        let path = std::env::temp_dir().join("vitrine-definitely-missing.json");
        let result = VitrineConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let path = scratch_file("broken.json", "{ scale_factor: ");
        let result = load_json::<VitrineConfig>(&path);
        let _ = fs::remove_file(&path);

        match result {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

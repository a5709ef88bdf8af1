//! Service configuration.
//!
//! Loaded from `retell.toml` next to the binary (or an explicit `--config`
//! path). Every field has a default, so a missing file runs the service
//! with stock settings and a partial file only overrides what it names.
//!
//! The 70% pass threshold is deliberately absent here: grading behavior is
//! fixed product behavior, not deployment configuration.

use crate::error::ConfigError;

use serde::{Deserialize, Serialize};

use std::path::Path;

/// Default config file name, resolved relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "retell.toml";

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    pub http: HttpConfig,
    pub limits: LimitsConfig,
}

/// Listener address configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct HttpConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8391,
        }
    }
}

/// Request guards owned by the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct LimitsConfig {
    /// Maximum characters accepted per grading field. Submissions are short
    /// sentences; the cap keeps the O(n·m) scorer off multi-kilobyte bodies.
    /// Requests over the cap are rejected, never truncated, so the metric
    /// itself is unaffected.
    pub max_input_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 2000,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `retell.toml` when no path
    /// is given.
    ///
    /// A missing default file yields stock settings. An explicitly named
    /// file must exist; unreadable or unparseable files are startup errors
    /// rather than silent fallbacks.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if !required && error.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8391);
        assert_eq!(config.limits.max_input_chars, 2000);
    }

    #[test]
    fn partial_file_only_overrides_named_fields() {
        let config: Config = toml::from_str(
            r#"
[http]
port = 9000
"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.limits.max_input_chars, 2000);
    }

    #[test]
    fn full_file_parses() {
        let config: Config = toml::from_str(
            r#"
[http]
host = "0.0.0.0"
port = 8080

[limits]
max_input_chars = 500
"#,
        )
        .expect("full config should parse");

        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.limits.max_input_chars, 500);
    }

    #[test]
    fn unknown_port_type_is_a_parse_error() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[http]
port = "not-a-port"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let config = Config::load(None).expect("missing default file should not error");
        assert_eq!(config.http.port, Config::default().http.port);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/retell.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}

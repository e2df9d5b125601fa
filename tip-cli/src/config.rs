//! Settings for the terminal front end, read from an optional TOML file.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "tip-split.log"
//! prompt = "tip> "
//! show_help = false
//! ```
//!
//! Every key is optional; missing keys keep their defaults. Command-line
//! flags are applied on top by the binary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;

use crate::logging::parse_filter;

/// Error returned when a config file cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid log_level '{level}' in config file '{}': {source}", .path.display())]
    InvalidLogLevel {
        path: PathBuf,
        level: String,
        #[source]
        source: ParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Any `EnvFilter` directive; a bare level such as `"debug"` works.
    pub log_level: String,
    /// Append log records to this file as well as stderr.
    pub log_file: Option<PathBuf>,
    /// Printed before each interactive command. Empty disables it.
    pub prompt: String,
    /// Print the command list when an interactive session starts.
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
            prompt: "> ".to_string(),
            show_help: true,
        }
    }
}

impl Config {
    /// Reads and parses the file at `path`. The `log_level` must be a valid
    /// filter directive.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| {
            tracing::error!(path = %path.display(), "invalid config: {}", source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if let Err(source) = parse_filter(&config.log_level) {
            tracing::error!(path = %path.display(), level = %config.log_level, "invalid log level: {}", source);
            return Err(ConfigError::InvalidLogLevel {
                path: path.to_path_buf(),
                level: config.log_level,
                source,
            });
        }
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::from_toml_str(r#"prompt = "tip> ""#).unwrap();

        assert_eq!(config.prompt, "tip> ");
        assert_eq!(config.log_level, "warn");
        assert!(config.show_help);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn full_document_parses() {
        let text = r#"
            log_level = "debug"
            log_file = "/tmp/tip.log"
            prompt = ""
            show_help = false
        "#;

        let config = Config::from_toml_str(text).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tip.log")));
        assert_eq!(config.prompt, "");
        assert!(!config.show_help);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(Config::from_toml_str("currency = \"EUR\"").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(Config::from_toml_str("show_help = \"yes\"").is_err());
    }

    #[test]
    fn load_or_default_without_path_uses_defaults() {
        let config = Config::load_or_default(None).unwrap();

        assert_eq!(config, Config::default());
    }
}

//! Runtime configuration, read from the environment.

use std::path::PathBuf;
use thiserror::Error;

/// Variable holding the per-actor request queue capacity.
pub const CHANNEL_BUFFER_VAR: &str = "DISH_ORDERS_CHANNEL_BUFFER";
/// Variable holding the path of a JSON seed file.
pub const SEED_FILE_VAR: &str = "DISH_ORDERS_SEED_FILE";

/// Errors raised while assembling configuration or loading seed data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed data uses the id {id} more than once")]
    DuplicateId { id: String },

    #[error("malformed seed data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    /// Startup data for the stores; both start empty when unset.
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            seed_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue {
                    var: CHANNEL_BUFFER_VAR,
                    value,
                })?;
        }
        if let Some(path) = lookup(SEED_FILE_VAR).filter(|p| !p.is_empty()) {
            config.seed_file = Some(PathBuf::from(path));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_reads_both_variables() {
        let config = Config::from_lookup(lookup(&[
            (CHANNEL_BUFFER_VAR, "8"),
            (SEED_FILE_VAR, "data/seed.json"),
        ]))
        .unwrap();
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.seed_file, Some(PathBuf::from("data/seed.json")));
    }

    #[test]
    fn test_rejects_zero_buffer() {
        let err = Config::from_lookup(lookup(&[(CHANNEL_BUFFER_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}

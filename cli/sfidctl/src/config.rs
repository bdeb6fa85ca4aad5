//! CLI configuration (env-driven).
//!
//! The default edition and output format are read by clap directly
//! (`SFID_EDITION`, `SFID_FORMAT`); this covers everything else.

use anyhow::{Context, Result};

/// Default log filter when neither RUST_LOG nor SFID_LOG_LEVEL is set.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Default object queried by `sfid chunks`.
const DEFAULT_SQL_OBJECT: &str = "Account";

/// Default ID column used by `sfid chunks`.
const DEFAULT_SQL_FIELD: &str = "Id";

/// Default number of records per chunk.
const DEFAULT_CHUNK_SIZE: u64 = 250_000;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Object name used in generated SQL.
    pub sql_object: String,

    /// ID column name used in generated SQL.
    pub sql_field: String,

    /// Records per chunk when `--size` is not given.
    pub chunk_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            sql_object: DEFAULT_SQL_OBJECT.to_string(),
            sql_field: DEFAULT_SQL_FIELD.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("SFID_LOG_LEVEL").unwrap_or(defaults.log_level);
        let sql_object = lookup("SFID_SQL_OBJECT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.sql_object);
        let sql_field = lookup("SFID_SQL_FIELD")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.sql_field);

        let chunk_size: u64 = lookup("SFID_CHUNK_SIZE")
            .map(|v| v.trim().parse())
            .transpose()
            .context("SFID_CHUNK_SIZE must be a non-negative integer.")?
            .unwrap_or(defaults.chunk_size);

        Ok(Self {
            log_level,
            sql_object,
            sql_field,
            chunk_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.chunk_size, 250_000);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SFID_LOG_LEVEL", "debug"),
            ("SFID_SQL_OBJECT", "Contact"),
            ("SFID_SQL_FIELD", "ContactId"),
            ("SFID_CHUNK_SIZE", " 1000 "),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.sql_object, "Contact");
        assert_eq!(config.sql_field, "ContactId");
        assert_eq!(config.chunk_size, 1000);
    }

    #[test]
    fn test_blank_sql_names_fall_back() {
        let config =
            Config::from_lookup(lookup(&[("SFID_SQL_OBJECT", " "), ("SFID_SQL_FIELD", "")]))
                .unwrap();
        assert_eq!(config.sql_object, "Account");
        assert_eq!(config.sql_field, "Id");
    }

    #[rstest]
    #[case("-1")]
    #[case("ten")]
    #[case("")]
    fn test_invalid_chunk_size(#[case] value: &str) {
        let result = Config::from_lookup(lookup(&[("SFID_CHUNK_SIZE", value)]));
        assert!(result.is_err());
    }
}

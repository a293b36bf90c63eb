//! Environment-driven observability configuration.

use core::str::FromStr;
use thiserror::Error;

/// Filter directive variable (standard `tracing-subscriber` convention).
pub const FILTER_ENV: &str = "RUST_LOG";
/// Output format variable: `json`, `pretty` or `compact`.
pub const FORMAT_ENV: &str = "STOCKWISE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format: {0}")]
    UnknownFormat(String),
}

/// Log line format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,stockwise_allocation=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], but an unknown format falls back to JSON.
    pub fn from_env_or_default() -> Self {
        let lookup = |key: &str| std::env::var(key).ok();
        Self {
            filter: filter_from(lookup),
            format: format_from(lookup).unwrap_or_default(),
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            filter: filter_from(&lookup),
            format: format_from(&lookup)?,
        })
    }
}

fn filter_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(FILTER_ENV)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn format_from(lookup: impl Fn(&str) -> Option<String>) -> Result<LogFormat, ConfigError> {
    match lookup(FORMAT_ENV) {
        Some(raw) if !raw.trim().is_empty() => raw.parse(),
        _ => Ok(LogFormat::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_info_json() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup_from(&[
            (FILTER_ENV, "stockwise_allocation=debug"),
            (FORMAT_ENV, " Pretty "),
        ]))
        .unwrap();
        assert_eq!(config.filter, "stockwise_allocation=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = ObservabilityConfig::from_lookup(lookup_from(&[(FORMAT_ENV, "xml")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownFormat("xml".to_string()));
        assert_eq!(err.to_string(), "unknown log format: xml");
    }

    #[test]
    fn blank_values_use_defaults() {
        let config =
            ObservabilityConfig::from_lookup(lookup_from(&[(FILTER_ENV, "  "), (FORMAT_ENV, "")]))
                .unwrap();
        assert_eq!(config, ObservabilityConfig::default());
    }
}

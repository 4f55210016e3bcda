//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use ornus_core::EmptyTextPolicy;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("POST_LABEL must be set")]
    MissingLabel,

    #[error("Invalid EMPTY_TEXT_POLICY {0:?} (expected \"fail\" or \"neutral\")")]
    InvalidPolicy(String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Label attached to every normalized record.
    pub label: String,
    /// Input file; `None` reads stdin.
    pub input: Option<PathBuf>,
    pub empty_text: EmptyTextPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let label = lookup("POST_LABEL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingLabel)?;

        let input = lookup("INPUT_PATH")
            .filter(|p| !p.is_empty() && p != "-")
            .map(PathBuf::from);

        let empty_text = match lookup("EMPTY_TEXT_POLICY") {
            None => EmptyTextPolicy::default(),
            Some(value) => parse_policy(&value)?,
        };

        Ok(Self {
            label,
            input,
            empty_text,
        })
    }
}

fn parse_policy(value: &str) -> Result<EmptyTextPolicy, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "fail" => Ok(EmptyTextPolicy::Fail),
        "neutral" => Ok(EmptyTextPolicy::Neutral),
        _ => Err(ConfigError::InvalidPolicy(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("POST_LABEL", "AAPL")]).unwrap();
        assert_eq!(config.label, "AAPL");
        assert!(config.input.is_none());
        assert_eq!(config.empty_text, EmptyTextPolicy::Fail);
    }

    #[test]
    fn test_full_config() {
        let config = load(&[
            ("POST_LABEL", "TSLA"),
            ("INPUT_PATH", "/tmp/posts.json"),
            ("EMPTY_TEXT_POLICY", "Neutral"),
        ])
        .unwrap();
        assert_eq!(config.input, Some(PathBuf::from("/tmp/posts.json")));
        assert_eq!(config.empty_text, EmptyTextPolicy::Neutral);
    }

    #[test]
    fn test_dash_means_stdin() {
        let config = load(&[("POST_LABEL", "AAPL"), ("INPUT_PATH", "-")]).unwrap();
        assert!(config.input.is_none());
    }

    #[test]
    fn test_missing_label() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingLabel)));
        assert!(matches!(
            load(&[("POST_LABEL", "  ")]),
            Err(ConfigError::MissingLabel)
        ));
    }

    #[test]
    fn test_invalid_policy() {
        assert!(matches!(
            load(&[("POST_LABEL", "AAPL"), ("EMPTY_TEXT_POLICY", "zero")]),
            Err(ConfigError::InvalidPolicy(_))
        ));
    }
}

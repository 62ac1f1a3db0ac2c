//! Player configuration, read from the environment
//!
//! | Variable | Default |
//! |---|---|
//! | `PERSONAFORGE_API_URL` (or `API_URL`) | `http://localhost:8000` |
//! | `PERSONAFORGE_REQUEST_TIMEOUT_SECS` | `120` |
//! | `PERSONAFORGE_DEBUG` | `false` |

use std::time::Duration;

use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Chat replies wait on an LLM, so the default is generous
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid http(s) URL: '{value}' ({reason})")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be a boolean (true/false/1/0/yes/no/on/off), got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_url: Url,
    pub request_timeout: Duration,
    /// Start with debug capture enabled
    pub debug: bool,
}

impl PlayerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (url_var, raw_url) = match get("PERSONAFORGE_API_URL") {
            Some(value) => ("PERSONAFORGE_API_URL", value),
            None => ("API_URL", get("API_URL").unwrap_or_else(|| DEFAULT_API_URL.into())),
        };
        let api_url = parse_url(url_var, &raw_url)?;

        let request_timeout = match get("PERSONAFORGE_REQUEST_TIMEOUT_SECS") {
            Some(value) => parse_timeout("PERSONAFORGE_REQUEST_TIMEOUT_SECS", &value)?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let debug = match get("PERSONAFORGE_DEBUG") {
            Some(value) => parse_bool("PERSONAFORGE_DEBUG", &value)?,
            None => false,
        };

        Ok(Self {
            api_url,
            request_timeout,
            debug,
        })
    }
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        var,
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

fn parse_timeout(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<PlayerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlayerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).expect("defaults");
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert!(!config.debug);
    }

    #[test]
    fn test_prefixed_url_wins_over_fallback() {
        let both = config(&[
            ("API_URL", "http://fallback:8000"),
            ("PERSONAFORGE_API_URL", "https://api.example.com"),
        ])
        .expect("config");
        assert_eq!(both.api_url.host_str(), Some("api.example.com"));

        let fallback = config(&[("API_URL", "http://fallback:8000")]).expect("config");
        assert_eq!(fallback.api_url.host_str(), Some("fallback"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(matches!(
            config(&[("PERSONAFORGE_API_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config(&[("PERSONAFORGE_API_URL", "ftp://example.com")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config(&[("PERSONAFORGE_REQUEST_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            config(&[("PERSONAFORGE_DEBUG", "maybe")]),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn test_debug_and_timeout_overrides() {
        let config = config(&[
            ("PERSONAFORGE_DEBUG", "Yes"),
            ("PERSONAFORGE_REQUEST_TIMEOUT_SECS", "30"),
        ])
        .expect("config");
        assert!(config.debug);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}

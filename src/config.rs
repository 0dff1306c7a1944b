use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String)
}

/// Settings captured once at startup and handed to the router.
///
/// A missing API key is not a startup error: every generation request
/// reports it instead, so the server still answers health checks.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub port: u16
}

impl Config {

    pub fn from_env() -> Result<Self, ConfigError> {

        Self::from_lookup(|name| std::env::var(name).ok())

    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {

        // empty values count as unset
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT
        };

        Ok(Config {
            api_key: get("GEMINI_API_KEY"),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base_url: get("GEMINI_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            port
        })

    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {

        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())

    }

    #[test]
    fn test_defaults_when_nothing_set() {

        let config = config_from(&[]).expect("empty environment is valid");

        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);

    }

    #[test]
    fn test_empty_api_key_is_absent() {

        let config = config_from(&[("GEMINI_API_KEY", "")]).unwrap();
        assert!(config.api_key.is_none(), "Empty key should be treated as missing");

    }

    #[test]
    fn test_overrides_are_applied() {

        let config = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-test"),
            ("GEMINI_API_BASE_URL", "http://127.0.0.1:9999/v1beta/"),
            ("PORT", "8080")
        ])
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999/v1beta");
        assert_eq!(config.port, 8080);

    }

    #[test]
    fn test_invalid_port_is_rejected() {

        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));

    }

}

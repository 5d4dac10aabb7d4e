//! Runtime settings read from the environment.

use std::{env, path::PathBuf};

pub const DEFAULT_API_URL: &str = "https://piol.onrender.com/api/";

const ENV_API_URL: &str = "PIOL_API_URL";
const ENV_API_TOKEN: &str = "PIOL_API_TOKEN";
const ENV_DATA_DIR: &str = "PIOL_DATA_DIR";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend root, always ending in `/` so relative paths join beneath it.
    pub api_base_url: String,
    pub api_token: Option<String>,
    /// Overrides the platform directory used for local state.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            data_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_base_url: non_empty(ENV_API_URL)
                .map(|url| with_trailing_slash(&url))
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: non_empty(ENV_API_TOKEN),
            data_dir: non_empty(ENV_DATA_DIR).map(PathBuf::from),
        }
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_overrides_and_normalizes_url() {
        let config = config_from(&[
            (ENV_API_URL, "http://192.168.1.140:3001/api"),
            (ENV_API_TOKEN, "secret"),
            (ENV_DATA_DIR, "/tmp/piol"),
        ]);
        assert_eq!(config.api_base_url, "http://192.168.1.140:3001/api/");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/piol")));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[(ENV_API_TOKEN, "  "), (ENV_API_URL, "")]);
        assert_eq!(config.api_token, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }
}

//! Client configuration: API key, base URIs and request timeout.
//!
//! A [`Config`] is a plain value. It can be built explicitly, read from the
//! process environment, or read from a `.env` file; none of these mutate any
//! global state.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::{Error, Result};

/// Default root of the standard API.
pub const DEFAULT_BASE_URL: &str = "https://api.zerobounce.net/v2/";
/// Default root of the bulk (file) API.
pub const DEFAULT_BULK_BASE_URL: &str = "https://bulkapi.zerobounce.net/v2/";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ZERO_BOUNCE_API_KEY";
/// Environment variable overriding the standard base URL.
pub const ENV_BASE_URL: &str = "ZERO_BOUNCE_URI";
/// Environment variable overriding the bulk base URL.
pub const ENV_BULK_BASE_URL: &str = "ZERO_BOUNCE_BULK_URI";

/// Settings a [`Client`](crate::Client) is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key sent as `api_key` with every request.
    pub api_key: String,
    /// Root URL for validation, credits, usage and finder endpoints.
    pub base_url: String,
    /// Root URL for file submission, status, result and delete endpoints.
    pub bulk_base_url: String,
    /// Upper bound on a single request, connect to last body byte.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bulk_base_url: DEFAULT_BULK_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Production endpoints with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Read `ZERO_BOUNCE_API_KEY`, `ZERO_BOUNCE_URI` and `ZERO_BOUNCE_BULK_URI`.
    ///
    /// Unset or empty URIs fall back to the production defaults. A missing key
    /// is not an error here; the API rejects the first request instead.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the same three keys from a `.env` file.
    ///
    /// The file is parsed without touching the process environment. Keys the
    /// file does not define are looked up in the environment, then defaulted.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item
                .map_err(|e| Error::Config(format!("malformed {}: {e}", path.display())))?;
            values.insert(key, value);
        }
        log::debug!(
            "loaded {} entries from {}",
            values.len(),
            path.display()
        );

        Ok(Self::from_lookup(|key| {
            values
                .get(key)
                .cloned()
                .or_else(|| std::env::var(key).ok())
        }))
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            api_key: lookup(ENV_API_KEY).unwrap_or_default(),
            base_url: non_empty(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bulk_base_url: non_empty(ENV_BULK_BASE_URL)
                .unwrap_or_else(|| DEFAULT_BULK_BASE_URL.to_string()),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_production() {
        let config = Config::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bulk_base_url, DEFAULT_BULK_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn lookup_overrides_all_three() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY, "env_key"),
            (ENV_BASE_URL, "http://localhost:1/v2/"),
            (ENV_BULK_BASE_URL, "http://localhost:2/v2/"),
        ]));
        assert_eq!(config.api_key, "env_key");
        assert_eq!(config.base_url, "http://localhost:1/v2/");
        assert_eq!(config.bulk_base_url, "http://localhost:2/v2/");
    }

    #[test]
    fn empty_uris_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY, "k"),
            (ENV_BASE_URL, ""),
        ]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bulk_base_url, DEFAULT_BULK_BASE_URL);
    }

    #[test]
    fn missing_key_is_empty() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn env_file_is_read_without_touching_environment() {
        let dir = std::env::temp_dir().join(format!("zb-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        std::fs::write(
            &path,
            "ZERO_BOUNCE_API_KEY=file_key\nZERO_BOUNCE_URI=http://127.0.0.1:9/v2/\n",
        )
        .unwrap();

        let config = Config::from_env_file(&path).unwrap();
        assert_eq!(config.api_key, "file_key");
        assert_eq!(config.base_url, "http://127.0.0.1:9/v2/");
        assert_ne!(std::env::var(ENV_API_KEY).ok().as_deref(), Some("file_key"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_env_file_is_config_error() {
        let err = Config::from_env_file("/definitely/not/here/.env").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

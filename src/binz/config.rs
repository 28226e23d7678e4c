use crate::error::{BinzError, Result};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.jsonbin.io/v3/b";
pub const DEFAULT_INDEX: &str = "bins.json";

/// Runtime configuration, read once at startup and treated as read-only
/// for the lifetime of a command invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Account secret sent as `X-Master-Key` on every request.
    pub api_key: String,
    /// Base endpoint of the hosted bin service.
    pub base_url: String,
    /// Path of the local metadata index file.
    pub index_path: PathBuf,
}

impl Config {
    /// Load configuration from a `.env` file (when present) and the
    /// process environment. Only `BINZ_KEY` is required; the endpoint
    /// and index path fall back to defaults.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = get("BINZ_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| BinzError::Config("BINZ_KEY is not set".to_string()))?;

        Ok(Self {
            api_key,
            base_url: get("BINZ_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            index_path: get("BINZ_INDEX")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, BinzError::Config(_)));
    }

    #[test]
    fn empty_key_is_treated_as_missing() {
        let err = Config::from_lookup(lookup(&[("BINZ_KEY", "")])).unwrap_err();
        assert!(matches!(err, BinzError::Config(_)));
    }

    #[test]
    fn endpoint_and_index_default_when_unset() {
        let config = Config::from_lookup(lookup(&[("BINZ_KEY", "secret")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.index_path, PathBuf::from(DEFAULT_INDEX));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("BINZ_KEY", "secret"),
            ("BINZ_API_URL", "http://localhost:9999"),
            ("BINZ_INDEX", "/tmp/my-bins.json"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.index_path, PathBuf::from("/tmp/my-bins.json"));
    }
}

//! Application Configuration
//!
//! Resolved once at startup from build-time environment variables and
//! provided to components via context.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend REST root, without trailing slash
    pub api_base_url: String,
    /// Quiet period before a quantity adjustment is sent
    pub debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    /// Load from variables baked in at build time
    pub fn load() -> Self {
        Self::from_lookup(|key| match key {
            "PANTRY_API_BASE_URL" => option_env!("PANTRY_API_BASE_URL").map(str::to_string),
            "PANTRY_DEBOUNCE_MS" => option_env!("PANTRY_DEBOUNCE_MS").map(str::to_string),
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("PANTRY_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| {
                info!("PANTRY_API_BASE_URL not set, using default: {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_string()
            });

        Self {
            api_base_url,
            debounce_ms: try_parse(&lookup, "PANTRY_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS),
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn try_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        None => default,
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
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.debounce_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = AppConfig::from_lookup(lookup(&[("PANTRY_API_BASE_URL", "https://pantry.example/api/ ")]));
        assert_eq!(config.api_base_url, "https://pantry.example/api");
    }

    #[test]
    fn test_debounce_override_and_fallback() {
        let config = AppConfig::from_lookup(lookup(&[("PANTRY_DEBOUNCE_MS", "250")]));
        assert_eq!(config.debounce_ms, 250);

        let config = AppConfig::from_lookup(lookup(&[("PANTRY_DEBOUNCE_MS", "soon")]));
        assert_eq!(config.debounce_ms, 500);
    }
}

use std::time::Duration;

use log::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.blocksdecoded.com";
pub const DEFAULT_LEGACY_BASE_URL: &str = "https://markets.horizontalsystems.xyz";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "COINKIT_HS_BASE_URL";
pub const ENV_LEGACY_BASE_URL: &str = "COINKIT_HS_LEGACY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "COINKIT_HTTP_TIMEOUT_SECS";

/// Connection settings for [`super::HsProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsProviderConfig {
    /// Base URL of the current API; `/v1/` is appended.
    pub base_url: String,
    /// Base URL of the legacy API serving global market points; `/api/v1/` is appended.
    pub legacy_base_url: String,
    pub timeout: Duration,
}

impl Default for HsProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            legacy_base_url: DEFAULT_LEGACY_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HsProviderConfig {
    /// Reads overrides from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup(ENV_LEGACY_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.legacy_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring invalid {}='{}', using {}s",
                    ENV_TIMEOUT_SECS, raw, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn legacy_api_url(&self, path: &str) -> String {
        format!(
            "{}/api/v1/{}",
            self.legacy_base_url.trim_end_matches('/'),
            path
        )
    }
}

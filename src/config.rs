//! Lookup configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Default base URL of the housing query API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/api/";

/// How long typing must pause before a lookup is issued.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Shortest location text worth sending to the places endpoint, counted
/// in `char`s (Unicode scalar values).
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL the endpoint paths (`places`, `renter/result`, ...) join
    /// onto. Always ends with a slash.
    pub base_url: Url,
    pub debounce: Duration,
    /// Minimum query length in `char`s before a lookup is scheduled.
    pub min_query_len: usize,
    pub request_timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LookupConfig {
    /// Replace the base URL, normalizing a missing trailing slash so that
    /// `Url::join` appends endpoint paths instead of replacing the last
    /// path segment.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self> {
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        self.base_url =
            Url::parse(&normalized).with_context(|| format!("invalid base URL '{raw}'"))?;
        Ok(self)
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

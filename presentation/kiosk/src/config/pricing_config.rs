use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8129";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Pricing API access configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    pub api_base_url: String,
    pub timeout: Duration,
}

impl PricingConfig {
    /// Load pricing configuration from environment variables
    ///
    /// Environment variables:
    /// - PRICING_API_BASE_URL: Verification API host (default: "http://localhost:8129")
    /// - PRICING_API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("PRICING_API_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout_secs = lookup("PRICING_API_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Overrides the endpoint host.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

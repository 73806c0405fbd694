use std::time::Duration;

use reqwest::Client;
use url::Url;

const VERIFY_BY_CODE_PATH: [&str; 3] = ["api", "verify-product", "by-code-product"];

#[derive(Debug, thiserror::Error)]
pub enum PricingClientError {
    #[error("pricing.invalid_base_url: {0}")]
    InvalidBaseUrl(String),
    #[error("pricing.client_build_failed: {0}")]
    ClientBuild(String),
}

/// Shared HTTP client configuration for the product verification API.
#[derive(Debug, Clone)]
pub struct PricingClient {
    pub client: Client,
    base_url: Url,
}

impl PricingClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PricingClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| PricingClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(PricingClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PricingClientError::ClientBuild(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the verify-by-code endpoint URL for `code`.
    /// The code is escaped as a single path segment.
    pub fn verify_by_code_url(&self, code: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(VERIFY_BY_CODE_PATH)
                .push(code);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> PricingClient {
        PricingClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn should_build_verify_url_from_host() {
        let url = client("http://localhost:8129").verify_by_code_url("012345678905");

        assert_eq!(
            url.as_str(),
            "http://localhost:8129/api/verify-product/by-code-product/012345678905"
        );
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let url = client("https://prices.example.com/store-7/").verify_by_code_url("42");

        assert_eq!(
            url.as_str(),
            "https://prices.example.com/store-7/api/verify-product/by-code-product/42"
        );
    }

    #[test]
    fn should_escape_code_as_single_segment() {
        let url = client("http://localhost:8129").verify_by_code_url("AB/C 1");

        assert_eq!(url.path(), "/api/verify-product/by-code-product/AB%2FC%201");
    }

    #[test]
    fn should_reject_invalid_base_url() {
        assert!(PricingClient::new("not a url", Duration::from_secs(5)).is_err());
        assert!(PricingClient::new("mailto:prices@example.com", Duration::from_secs(5)).is_err());
    }
}

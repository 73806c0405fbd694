use async_trait::async_trait;

use business::domain::price::errors::PriceError;
use business::domain::price::model::PriceRecord;
use business::domain::price::services::PriceFetcherService;

use crate::client::PricingClient;

/// Fetches price records over HTTP from the product verification API.
pub struct PriceFetcherHttp {
    client: PricingClient,
}

impl PriceFetcherHttp {
    pub fn new(client: PricingClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PriceFetcherService for PriceFetcherHttp {
    async fn fetch_price_by_code(&self, code: &str) -> Result<PriceRecord, PriceError> {
        let url = self.client.verify_by_code_url(code);

        let response = self
            .client
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| PriceError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::unexpected_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PriceError::transport(e.to_string()))?;

        serde_json::from_slice::<PriceRecord>(&body)
            .map_err(|e| PriceError::malformed_response(e.to_string()))
    }
}

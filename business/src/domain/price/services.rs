use async_trait::async_trait;

use super::errors::PriceError;
use super::model::PriceRecord;

/// Service port for the external pricing service.
///
/// Calls are not cancelable; a caller that loses interest simply ignores
/// the outcome.
#[async_trait]
pub trait PriceFetcherService: Send + Sync {
    async fn fetch_price_by_code(&self, code: &str) -> Result<PriceRecord, PriceError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PriceRecord;
use crate::domain::price::services::PriceFetcherService;
use crate::domain::price::use_cases::fetch_price::{FetchPriceParams, FetchPriceUseCase};

pub struct FetchPriceUseCaseImpl {
    pub fetcher: Arc<dyn PriceFetcherService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchPriceUseCase for FetchPriceUseCaseImpl {
    async fn execute(&self, params: FetchPriceParams) -> Result<PriceRecord, PriceError> {
        self.logger
            .info(&format!("Fetching price data for code: {}", params.code));

        let result = self.fetcher.fetch_price_by_code(params.code.as_str()).await;

        match &result {
            Ok(record) => self.logger.info(&format!(
                "Price data loaded for code {} (regular price: {:.2})",
                params.code, record.regular_price
            )),
            Err(err @ PriceError::MalformedResponse(_)) => self.logger.error(&format!(
                "Pricing service returned a malformed body for code {}: {}",
                params.code, err
            )),
            Err(err) => self.logger.warn(&format!(
                "Pricing service unavailable for code {}: {}",
                params.code, err
            )),
        }

        result
    }
}

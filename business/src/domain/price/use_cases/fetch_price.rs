use async_trait::async_trait;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PriceRecord;
use crate::domain::scan::value_objects::ScannedCode;

#[derive(Debug, Clone)]
pub struct FetchPriceParams {
    pub code: ScannedCode,
}

#[async_trait]
pub trait FetchPriceUseCase: Send + Sync {
    async fn execute(&self, params: FetchPriceParams) -> Result<PriceRecord, PriceError>;
}

use std::sync::Arc;

use logger::TracingLogger;
use pricing::client::PricingClient;
use pricing::price_fetcher::PriceFetcherHttp;

use business::application::price::fetch_price::FetchPriceUseCaseImpl;
use business::application::price::lookup::PriceLookupController;
use business::application::scan::session::ScanSessionController;
use business::domain::logger::Logger;
use business::domain::scan::services::DecodeEngine;
use business::domain::scan::value_objects::VideoSource;

use crate::config::app_config::AppConfig;
use crate::flow::KioskFlow;

pub struct DependencyContainer {
    pub kiosk: KioskFlow,
}

impl DependencyContainer {
    /// Wires the kiosk around a platform decode engine bound to `source`.
    pub fn new(
        config: &AppConfig,
        engine: Arc<dyn DecodeEngine>,
        source: VideoSource,
    ) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let pricing_client =
            PricingClient::new(&config.pricing.api_base_url, config.pricing.timeout)?;
        let price_fetcher = Arc::new(PriceFetcherHttp::new(pricing_client));

        // Use cases
        let fetch_price_use_case = Arc::new(FetchPriceUseCaseImpl {
            fetcher: price_fetcher,
            logger: logger.clone(),
        });

        // Controllers
        let prices = PriceLookupController::new(fetch_price_use_case, logger.clone());
        let scanner = ScanSessionController::new(engine, logger.clone());

        logger.info(&format!(
            "Kiosk wired against pricing API at {}",
            config.pricing.api_base_url
        ));

        Ok(Self {
            kiosk: KioskFlow::new(scanner, prices, source),
        })
    }
}

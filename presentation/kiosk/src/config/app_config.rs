use dotenvy::dotenv;

use super::pricing_config::PricingConfig;

pub struct AppConfig {
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self {
            pricing: PricingConfig::from_env(),
        }
    }
}

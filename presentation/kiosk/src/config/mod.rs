pub mod app_config;
pub mod pricing_config;

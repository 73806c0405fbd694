pub mod error_mapper;
pub mod price_panel;
pub mod scan_panel;

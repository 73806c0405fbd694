//! Price-verification kiosk composition.
//!
//! - config/: environment-driven configuration (pricing API host, timeouts)
//! - setup/: tracing initialization and dependency wiring
//! - view/: framework-independent panel models for the scan and price views
//! - flow: the scan -> verify -> rescan flow over both controllers

pub mod config;
pub mod flow;
pub mod setup;
pub mod view;

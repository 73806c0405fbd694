use std::sync::Mutex;

use business::application::price::lookup::PriceLookupController;
use business::application::scan::session::ScanSessionController;
use business::domain::price::lookup::Completion;
use business::domain::scan::errors::ScanError;
use business::domain::scan::session::RestartOutcome;
use business::domain::scan::value_objects::{ScannedCode, VideoSource};

use crate::view::price_panel::PricePanel;
use crate::view::scan_panel::ScanPanel;

/// The verify-price screen: one scan session and one price details view
/// over a single camera.
///
/// The two halves are independent: rescanning leaves an open price view
/// alone, and closing the price view leaves the scanner alone. Every
/// operation takes `&self`, so a rescan can run while a lookup is loading.
pub struct KioskFlow {
    scanner: ScanSessionController,
    prices: PriceLookupController,
    source: VideoSource,
    start_error: Mutex<Option<ScanError>>,
}

impl KioskFlow {
    pub fn new(
        scanner: ScanSessionController,
        prices: PriceLookupController,
        source: VideoSource,
    ) -> Self {
        Self {
            scanner,
            prices,
            source,
            start_error: Mutex::new(None),
        }
    }

    pub fn scanner(&self) -> &ScanSessionController {
        &self.scanner
    }

    pub fn prices(&self) -> &PriceLookupController {
        &self.prices
    }

    pub fn start_scanning(&self) -> Result<(), ScanError> {
        let result = self.scanner.start(&self.source);
        self.record_start(result.as_ref().err());
        result
    }

    /// Waits for the scanner to decode a code. `None` when not scanning.
    pub async fn next_code(&self) -> Option<ScannedCode> {
        self.scanner.next_decoded().await
    }

    /// Opens the price details view for the decoded code.
    /// `None` when nothing has been decoded yet.
    pub async fn view_prices(&self) -> Option<Completion> {
        let code = self.scanner.decoded_value()?;
        Some(self.prices.open(code).await)
    }

    pub fn close_prices(&self) {
        self.prices.close();
    }

    pub fn rescan(&self) -> Result<RestartOutcome, ScanError> {
        let result = self.scanner.restart(&self.source);
        self.record_start(result.as_ref().err());
        result
    }

    pub fn scan_panel(&self) -> ScanPanel {
        let start_error = self.start_error.lock().ok().and_then(|guard| guard.clone());
        ScanPanel::from_state(&self.scanner.snapshot(), start_error.as_ref())
    }

    pub fn price_panel(&self) -> PricePanel {
        PricePanel::from_lookup(&self.prices.snapshot())
    }

    /// Leaves the screen: releases the camera and discards the price view.
    pub fn shutdown(&self) {
        self.scanner.dispose();
        self.prices.close();
    }

    fn record_start(&self, error: Option<&ScanError>) {
        if let Ok(mut guard) = self.start_error.lock() {
            *guard = error.cloned();
        }
    }
}

impl Drop for KioskFlow {
    fn drop(&mut self) {
        self.scanner.dispose();
    }
}

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::logger::Logger;
use crate::domain::price::lookup::{Completion, PriceLookup};
use crate::domain::price::use_cases::fetch_price::{FetchPriceParams, FetchPriceUseCase};
use crate::domain::scan::value_objects::ScannedCode;

/// Drives a [`PriceLookup`] against the fetch use case and publishes every
/// transition to subscribers.
pub struct PriceLookupController {
    use_case: Arc<dyn FetchPriceUseCase>,
    logger: Arc<dyn Logger>,
    state: watch::Sender<PriceLookup>,
}

impl PriceLookupController {
    pub fn new(use_case: Arc<dyn FetchPriceUseCase>, logger: Arc<dyn Logger>) -> Self {
        let (state, _) = watch::channel(PriceLookup::new());
        Self {
            use_case,
            logger,
            state,
        }
    }

    pub fn snapshot(&self) -> PriceLookup {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PriceLookup> {
        self.state.subscribe()
    }

    /// Opens the details view for `key` and resolves once its fetch does.
    ///
    /// Returns [`Completion::Stale`] when the lookup was closed or reopened
    /// while the fetch was in flight; the outcome is then dropped.
    pub async fn open(&self, key: ScannedCode) -> Completion {
        let ticket = loop {
            let current = self.state.borrow().clone();
            let mut next = current.clone();
            let ticket = next.open(key.clone());
            // Retried when another transition lands between the read and the swap.
            let swapped = self.state.send_if_modified(|lookup| {
                if *lookup != current {
                    return false;
                }
                *lookup = next;
                true
            });
            if swapped {
                break ticket;
            }
        };

        self.logger.info(&format!(
            "Price lookup opened for code {} (request {})",
            ticket.key(),
            ticket.generation()
        ));

        let outcome = self
            .use_case
            .execute(FetchPriceParams {
                code: ticket.key().clone(),
            })
            .await;

        let mut completion = Completion::Stale;
        self.state.send_if_modified(|lookup| {
            completion = lookup.complete(&ticket, outcome);
            matches!(completion, Completion::Applied(_))
        });

        match completion {
            Completion::Applied(status) => self.logger.info(&format!(
                "Price lookup for code {} finished: {}",
                ticket.key(),
                status
            )),
            Completion::Stale => self.logger.debug(&format!(
                "Discarding stale price result for code {} (request {})",
                ticket.key(),
                ticket.generation()
            )),
        }

        completion
    }

    pub fn close(&self) {
        self.state.send_if_modified(|lookup| {
            let was_open = lookup.key().is_some();
            lookup.close();
            was_open
        });
        self.logger.info("Price lookup closed");
    }
}

use super::errors::PriceError;
use super::model::PriceRecord;
use crate::domain::scan::value_objects::ScannedCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Closed,
    Loading,
    Loaded,
    Failed,
}

impl std::fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupStatus::Closed => write!(f, "closed"),
            LookupStatus::Loading => write!(f, "loading"),
            LookupStatus::Loaded => write!(f, "loaded"),
            LookupStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum LookupState {
    Closed,
    Loading {
        key: ScannedCode,
    },
    Loaded {
        key: ScannedCode,
        record: PriceRecord,
    },
    Failed {
        key: ScannedCode,
        error: PriceError,
    },
}

/// Tag carried by one fetch, issued by [`PriceLookup::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    key: ScannedCode,
}

impl FetchTicket {
    pub fn key(&self) -> &ScannedCode {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied(LookupStatus),
    /// The lookup was closed or reopened after the fetch was issued.
    Stale,
}

/// Load/success/error state of the price details view.
///
/// Each [`open`](PriceLookup::open) starts a new generation. A completion is
/// applied only while the lookup is still loading the exact generation and
/// key it was issued for, so a slow response for an abandoned code can
/// never overwrite the state of a newer lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLookup {
    state: LookupState,
    generation: u64,
}

impl PriceLookup {
    pub fn new() -> Self {
        Self {
            state: LookupState::Closed,
            generation: 0,
        }
    }

    pub fn status(&self) -> LookupStatus {
        match self.state {
            LookupState::Closed => LookupStatus::Closed,
            LookupState::Loading { .. } => LookupStatus::Loading,
            LookupState::Loaded { .. } => LookupStatus::Loaded,
            LookupState::Failed { .. } => LookupStatus::Failed,
        }
    }

    pub fn key(&self) -> Option<&ScannedCode> {
        match &self.state {
            LookupState::Closed => None,
            LookupState::Loading { key }
            | LookupState::Loaded { key, .. }
            | LookupState::Failed { key, .. } => Some(key),
        }
    }

    pub fn record(&self) -> Option<&PriceRecord> {
        match &self.state {
            LookupState::Loaded { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PriceError> {
        match &self.state {
            LookupState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Human-readable failure description, present only while `Failed`.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(|error| error.to_string())
    }

    /// Discards any prior state and starts loading `key`.
    /// The returned ticket must accompany the fetch outcome.
    pub fn open(&mut self, key: ScannedCode) -> FetchTicket {
        self.generation += 1;
        self.state = LookupState::Loading { key: key.clone() };
        FetchTicket {
            generation: self.generation,
            key,
        }
    }

    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<PriceRecord, PriceError>,
    ) -> Completion {
        let is_current = match &self.state {
            LookupState::Loading { key } => {
                ticket.generation == self.generation && *key == ticket.key
            }
            _ => false,
        };
        if !is_current {
            return Completion::Stale;
        }

        let key = ticket.key.clone();
        self.state = match outcome {
            Ok(record) => LookupState::Loaded { key, record },
            Err(error) => LookupState::Failed { key, error },
        };
        Completion::Applied(self.status())
    }

    /// Discards key, record and error. Fetches still in flight become stale.
    pub fn close(&mut self) {
        self.state = LookupState::Closed;
    }
}

impl Default for PriceLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    /// Network failure before any response arrived.
    #[error("price.transport_failed: {0}")]
    Transport(String),
    #[error("price.unexpected_status: {0}")]
    UnexpectedStatus(u16),
    /// A success response whose body is not a price record.
    #[error("price.malformed_response: {0}")]
    MalformedResponse(String),
}

impl PriceError {
    pub fn transport(reason: impl Into<String>) -> Self {
        PriceError::Transport(reason.into())
    }
    pub fn unexpected_status(status: u16) -> Self {
        PriceError::UnexpectedStatus(status)
    }
    pub fn malformed_response(reason: impl Into<String>) -> Self {
        PriceError::MalformedResponse(reason.into())
    }

    /// Transport failures and non-success statuses share one bucket.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PriceError::Transport(_) | PriceError::UnexpectedStatus(_)
        )
    }
}

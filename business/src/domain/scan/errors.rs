/// Errors raised while acquiring a decode engine binding.
/// Code-style identifiers first, detail after the colon.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    #[error("scan.engine_start_failed: {0}")]
    EngineStart(String),
}

impl ScanError {
    pub fn engine_start(reason: impl Into<String>) -> Self {
        ScanError::EngineStart(reason.into())
    }
}

/// A single-frame decoding failure unrelated to "no code in view".
/// Logged and otherwise ignored; decoding continues.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("scan.decode_frame_failed: {0}")]
pub struct DecodeError(pub String);

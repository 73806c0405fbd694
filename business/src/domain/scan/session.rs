use std::sync::Weak;

use super::errors::{DecodeError, ScanError};
use super::services::{
    BindingId, DecodeBinding, DecodeEngine, FrameEvent, FrameListener, FrameOutcome, FrameSink,
};
use super::value_objects::{ScannedCode, VideoSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Idle,
    Scanning,
    Decoded,
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Idle => write!(f, "idle"),
            ScanStatus::Scanning => write!(f, "scanning"),
            ScanStatus::Decoded => write!(f, "decoded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ScanState {
    Idle,
    Scanning,
    Decoded(ScannedCode),
}

struct ActiveBinding {
    id: BindingId,
    handle: Box<dyn DecodeBinding>,
}

/// What a frame event did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameDisposition {
    /// First code of this binding; the binding has already been released.
    Decoded(ScannedCode),
    NoCode,
    Transient(DecodeError),
    /// The frame came from a binding that is no longer live.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    /// The session was already scanning; the live binding was kept.
    AlreadyScanning(BindingId),
    Rebound(BindingId),
}

/// Single-decode scan session over one decode engine binding.
///
/// The session owns at most one live binding. Every bind is preceded by a
/// release of the previous binding, and the binding is stopped inside the
/// same call that accepts the first decoded code, so a session reaches
/// `Decoded` at most once per binding.
pub struct ScanSession {
    state: ScanState,
    active: Option<ActiveBinding>,
    bindings_issued: u64,
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            active: None,
            bindings_issued: 0,
        }
    }

    pub fn status(&self) -> ScanStatus {
        match self.state {
            ScanState::Idle => ScanStatus::Idle,
            ScanState::Scanning => ScanStatus::Scanning,
            ScanState::Decoded(_) => ScanStatus::Decoded,
        }
    }

    pub fn decoded_value(&self) -> Option<&ScannedCode> {
        match &self.state {
            ScanState::Decoded(code) => Some(code),
            _ => None,
        }
    }

    pub fn active_binding(&self) -> Option<BindingId> {
        self.active.as_ref().map(|active| active.id)
    }

    /// Binds a fresh decode engine binding to `source`.
    ///
    /// Any live binding is stopped first. On failure the session is left
    /// `Idle` with no binding and the error is returned untouched.
    pub fn start(
        &mut self,
        engine: &dyn DecodeEngine,
        source: &VideoSource,
        listener: &Weak<dyn FrameListener>,
    ) -> Result<BindingId, ScanError> {
        self.release();
        self.state = ScanState::Idle;

        self.bindings_issued += 1;
        let id = BindingId::new(self.bindings_issued);
        let handle = engine.bind_and_decode(source, FrameSink::new(id, listener.clone()))?;

        self.active = Some(ActiveBinding { id, handle });
        self.state = ScanState::Scanning;
        Ok(id)
    }

    /// Rescan. From `Scanning` this is a no-op guard and the live binding is
    /// kept; from any other state it behaves like [`ScanSession::start`].
    pub fn restart(
        &mut self,
        engine: &dyn DecodeEngine,
        source: &VideoSource,
        listener: &Weak<dyn FrameListener>,
    ) -> Result<RestartOutcome, ScanError> {
        if let (ScanState::Scanning, Some(active)) = (&self.state, &self.active) {
            return Ok(RestartOutcome::AlreadyScanning(active.id));
        }
        self.start(engine, source, listener)
            .map(RestartOutcome::Rebound)
    }

    /// Applies one frame event from the decode engine.
    pub fn on_decode_result(&mut self, event: FrameEvent) -> FrameDisposition {
        let is_live = matches!(self.state, ScanState::Scanning)
            && self.active_binding() == Some(event.binding);
        if !is_live {
            return FrameDisposition::Stale;
        }

        match event.outcome {
            FrameOutcome::Code(raw) => match ScannedCode::parse(raw) {
                Some(code) => {
                    self.release();
                    self.state = ScanState::Decoded(code.clone());
                    FrameDisposition::Decoded(code)
                }
                None => FrameDisposition::NoCode,
            },
            FrameOutcome::NoCode => FrameDisposition::NoCode,
            FrameOutcome::Failed(err) => FrameDisposition::Transient(err),
        }
    }

    /// Stops the live binding, if any, and returns to `Idle`. Idempotent.
    pub fn dispose(&mut self) {
        self.release();
        self.state = ScanState::Idle;
    }

    fn release(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.handle.stop();
        }
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ScanSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanSession")
            .field("state", &self.state)
            .field("active_binding", &self.active_binding())
            .finish()
    }
}

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::services::{DecodeEngine, FrameEvent, FrameListener};
use crate::domain::scan::session::{FrameDisposition, RestartOutcome, ScanSession, ScanStatus};
use crate::domain::scan::value_objects::{ScannedCode, VideoSource};

/// Observable view of a scan session.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSnapshot {
    pub status: ScanStatus,
    pub decoded_value: Option<ScannedCode>,
}

impl ScanSnapshot {
    fn of(session: &ScanSession) -> Self {
        Self {
            status: session.status(),
            decoded_value: session.decoded_value().cloned(),
        }
    }
}

/// Session state shared between the controller and the engine's frame
/// callback.
struct SharedSession {
    session: Mutex<ScanSession>,
    state: watch::Sender<ScanSnapshot>,
    logger: Arc<dyn Logger>,
}

impl SharedSession {
    fn publish(&self, session: &ScanSession) {
        let snapshot = ScanSnapshot::of(session);
        self.state.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
    }
}

impl FrameListener for SharedSession {
    fn on_frame(&self, event: FrameEvent) -> bool {
        let binding = event.binding;
        let mut session = self.session.lock();

        match session.on_decode_result(event) {
            FrameDisposition::Decoded(code) => {
                self.logger
                    .info(&format!("Code decoded: {} (binding {})", code, binding));
                self.publish(&session);
                true
            }
            FrameDisposition::NoCode => true,
            FrameDisposition::Transient(err) => {
                self.logger
                    .debug(&format!("Frame decode failed on binding {}: {}", binding, err));
                true
            }
            FrameDisposition::Stale => {
                self.logger
                    .debug(&format!("Ignoring frame from released binding {}", binding));
                false
            }
        }
    }
}

/// Owns a [`ScanSession`] and the decode engine it binds.
///
/// Frames are applied inside the engine's callback: the first code moves the
/// session to `Decoded` and stops the binding before the callback returns,
/// whether or not anyone is waiting in
/// [`next_decoded`](ScanSessionController::next_decoded).
pub struct ScanSessionController {
    engine: Arc<dyn DecodeEngine>,
    shared: Arc<SharedSession>,
    listener: Weak<dyn FrameListener>,
}

impl ScanSessionController {
    pub fn new(engine: Arc<dyn DecodeEngine>, logger: Arc<dyn Logger>) -> Self {
        let session = ScanSession::new();
        let (state, _) = watch::channel(ScanSnapshot::of(&session));
        let shared = Arc::new(SharedSession {
            session: Mutex::new(session),
            state,
            logger,
        });
        let listener: Weak<dyn FrameListener> = Arc::downgrade(&shared) as Weak<dyn FrameListener>;
        Self {
            engine,
            shared,
            listener,
        }
    }

    pub fn status(&self) -> ScanStatus {
        self.shared.session.lock().status()
    }

    pub fn decoded_value(&self) -> Option<ScannedCode> {
        self.shared.session.lock().decoded_value().cloned()
    }

    pub fn snapshot(&self) -> ScanSnapshot {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScanSnapshot> {
        self.shared.state.subscribe()
    }

    pub fn start(&self, source: &VideoSource) -> Result<(), ScanError> {
        let logger = &self.shared.logger;
        logger.info(&format!("Starting scan session on {}", source));

        let result = {
            let mut session = self.shared.session.lock();
            let result = session.start(self.engine.as_ref(), source, &self.listener);
            self.shared.publish(&session);
            result
        };

        match result {
            Ok(binding) => {
                logger.debug(&format!("Decode engine bound to {} as {}", source, binding));
                Ok(())
            }
            Err(err) => {
                logger.error(&format!("Decode engine could not bind to {}: {}", source, err));
                Err(err)
            }
        }
    }

    pub fn restart(&self, source: &VideoSource) -> Result<RestartOutcome, ScanError> {
        let result = {
            let mut session = self.shared.session.lock();
            let result = session.restart(self.engine.as_ref(), source, &self.listener);
            self.shared.publish(&session);
            result
        };

        let logger = &self.shared.logger;
        match &result {
            Ok(RestartOutcome::AlreadyScanning(binding)) => logger.debug(&format!(
                "Rescan requested while scanning; keeping binding {}",
                binding
            )),
            Ok(RestartOutcome::Rebound(binding)) => {
                logger.info(&format!("Rescanning on {} with binding {}", source, binding))
            }
            Err(err) => logger.error(&format!("Rescan on {} failed: {}", source, err)),
        }

        result
    }

    /// Waits for the live binding to decode a code.
    ///
    /// Returns immediately with the current value when already decoded, and
    /// with `None` when the session is idle.
    pub async fn next_decoded(&self) -> Option<ScannedCode> {
        let mut rx = self.shared.state.subscribe();
        let settled = rx
            .wait_for(|snapshot| snapshot.status != ScanStatus::Scanning)
            .await
            .ok()?;
        settled.decoded_value.clone()
    }

    /// Releases the decode engine. Safe to call on every exit path.
    pub fn dispose(&self) {
        let had_binding = {
            let mut session = self.shared.session.lock();
            let had_binding = session.active_binding().is_some();
            session.dispose();
            self.shared.publish(&session);
            had_binding
        };
        if had_binding {
            self.shared.logger.info("Scan session disposed");
        }
    }
}

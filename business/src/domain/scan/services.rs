use std::sync::Weak;

use super::errors::{DecodeError, ScanError};
use super::value_objects::VideoSource;

/// Identifies one decode engine binding within a scan session.
/// A fresh id is issued on every bind, so frames from a released
/// binding can never be mistaken for frames from its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

impl BindingId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the decode engine saw in a single frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Code(String),
    NoCode,
    Failed(DecodeError),
}

/// A frame outcome tagged with the binding that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEvent {
    pub binding: BindingId,
    pub outcome: FrameOutcome,
}

/// Receives frame events on the session side.
///
/// Called synchronously from the decode engine's frame callback, so the
/// session transition (and the stop of the binding on a first code) happens
/// inside that callback.
pub trait FrameListener: Send + Sync {
    /// Applies one frame. Returns `false` when the frame's binding is no
    /// longer live and the frame was dropped.
    fn on_frame(&self, event: FrameEvent) -> bool;
}

/// Per-frame callback handed to the decode engine on bind.
#[derive(Clone)]
pub struct FrameSink {
    binding: BindingId,
    listener: Weak<dyn FrameListener>,
}

impl FrameSink {
    pub fn new(binding: BindingId, listener: Weak<dyn FrameListener>) -> Self {
        Self { binding, listener }
    }

    pub fn binding(&self) -> BindingId {
        self.binding
    }

    /// Forwards one frame outcome. Returns `false` once the binding has been
    /// released or the session side is gone; the engine should stop feeding it.
    pub fn deliver(&self, outcome: FrameOutcome) -> bool {
        let Some(listener) = self.listener.upgrade() else {
            return false;
        };
        listener.on_frame(FrameEvent {
            binding: self.binding,
            outcome,
        })
    }
}

impl std::fmt::Debug for FrameSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSink")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

/// A live decode subscription against one video source.
pub trait DecodeBinding: Send {
    /// Halts frame delivery and releases engine resources.
    ///
    /// Must be complete when it returns: no frame may be delivered through
    /// this binding's sink afterwards. Calling it again is a no-op.
    ///
    /// Runs from inside [`FrameSink::deliver`] when a frame decodes a code,
    /// so it must not wait on a delivery in flight.
    fn stop(&mut self);
}

/// Service port for the external barcode decode engine.
pub trait DecodeEngine: Send + Sync {
    /// Starts continuous per-frame decoding of `source`, reporting every
    /// frame through `frames` until the returned binding is stopped.
    ///
    /// Frames are delivered from the engine's own context once this call has
    /// returned, never from within it.
    fn bind_and_decode(
        &self,
        source: &VideoSource,
        frames: FrameSink,
    ) -> Result<Box<dyn DecodeBinding>, ScanError>;
}

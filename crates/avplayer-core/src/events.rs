//! Runtime event callbacks
//!
//! The platform delivers playback and DRM notifications through a listener
//! registered at session-open time. [`PlayerEventSink`] models that listener
//! as an explicit interface with one method per event kind; the facade
//! implements it, and the host wires the facade to the platform's callback
//! mechanism.

use crate::error::RuntimeError;

/// Generic runtime notification with opaque payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeEvent {
    pub kind: String,
    pub data: String,
}

/// DRM notification delivered during license negotiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrmMessage {
    /// License challenge round-trip completed; `message` carries the license
    /// response to install
    Challenge { message: String },
    /// Any other DRM-system notification, forwarded as-is
    Other { name: String, data: String },
}

/// Listener interface for runtime callbacks, one method per event kind
pub trait PlayerEventSink {
    fn on_buffering_start(&mut self);

    fn on_buffering_progress(&mut self, percent: u32);

    fn on_buffering_complete(&mut self);

    /// Current playback position, milliseconds
    fn on_current_play_time(&mut self, position_ms: u64);

    /// Generic runtime event
    fn on_runtime_event(&mut self, event: RuntimeEvent);

    /// DRM-system event
    fn on_drm_event(&mut self, message: DrmMessage);

    /// Content played to the end
    fn on_stream_completed(&mut self);

    /// Runtime-reported error; informational only, the runtime has already
    /// handled or abandoned the operation
    fn on_error(&mut self, error: RuntimeError);
}

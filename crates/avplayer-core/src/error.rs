//! Error types for the playback facade

use crate::types::PlaybackState;
use thiserror::Error;

/// Result type alias for calls crossing the platform runtime boundary
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

/// Errors reported by the platform media/DRM runtime.
///
/// The facade never propagates these to its caller: synchronous failures are
/// caught at the call site, logged, and swallowed, and error events delivered
/// through the listener are logged only (see the error handling notes in the
/// crate docs).
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Operation not permitted in the session's current state
    #[error("operation '{operation}' not allowed in state {state}")]
    InvalidState {
        operation: &'static str,
        state: PlaybackState,
    },

    /// No playback session is open
    #[error("no open playback session")]
    NoSession,

    /// Malformed or rejected parameter (URL, property value, DRM payload)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Feature unavailable on this device or runtime build
    #[error("not supported: {0}")]
    NotSupported(String),

    /// DRM subsystem failure surfaced by the runtime
    #[error("DRM failure: {0}")]
    Drm(String),

    /// Any other platform-reported failure
    #[error("platform error: {0}")]
    Platform(String),
}

impl RuntimeError {
    /// Short stable code for log correlation
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::InvalidState { .. } => "INVALID_STATE",
            RuntimeError::NoSession => "NO_SESSION",
            RuntimeError::InvalidParameter(_) => "INVALID_PARAM",
            RuntimeError::NotSupported(_) => "NOT_SUPPORTED",
            RuntimeError::Drm(_) => "DRM",
            RuntimeError::Platform(_) => "PLATFORM",
        }
    }
}

//! Platform runtime boundary
//!
//! The facade is a consumer of the platform's media/DRM service: everything
//! hard (pipeline state machines, bitrate adaptation, license exchange,
//! retries) lives behind these traits and is not reimplemented here. Hosts
//! bind them to the real platform API; tests and the demo host supply
//! in-process implementations.

use crate::drm::{DrmOperation, DrmSystem};
use crate::error::RuntimeResult;
use crate::types::{DisplayRect, PlaybackState, StreamingProperty, TrackInfo, TrackKind};

/// Continuation invoked by the runtime when an asynchronous prepare finishes.
///
/// Fire-and-forget: there is no timeout or cancellation. If the runtime never
/// invokes it, playback never starts and no error is surfaced locally.
pub type PrepareCallback = Box<dyn FnOnce(&mut dyn AvPlayRuntime)>;

/// Call interface to the platform media/DRM runtime.
///
/// All methods are synchronous from the facade's point of view; the single
/// asynchronous boundary is [`prepare_async`](AvPlayRuntime::prepare_async),
/// whose continuation the runtime schedules on its own event loop.
pub trait AvPlayRuntime {
    /// Open a playback session for `url`
    fn open(&mut self, url: &str) -> RuntimeResult<()>;

    /// Current session state; never cached by callers
    fn state(&self) -> PlaybackState;

    /// Position the video surface, in output pixels
    fn set_display_rect(&mut self, rect: DisplayRect) -> RuntimeResult<()>;

    /// Synchronous prepare
    fn prepare(&mut self) -> RuntimeResult<()>;

    /// Asynchronous prepare; `on_prepared` runs on success
    fn prepare_async(&mut self, on_prepared: PrepareCallback) -> RuntimeResult<()>;

    /// Start or resume playback
    fn start(&mut self) -> RuntimeResult<()>;

    fn pause(&mut self) -> RuntimeResult<()>;

    /// Stop and tear down the session; always succeeds from the caller's view
    fn stop(&mut self);

    /// Relative seek forward, milliseconds
    fn jump_forward(&mut self, offset_ms: u64) -> RuntimeResult<()>;

    /// Relative seek backward, milliseconds
    fn jump_backward(&mut self, offset_ms: u64) -> RuntimeResult<()>;

    /// Select a track by kind and runtime-reported index; invalid indices
    /// surface as runtime errors, not facade validation
    fn select_track(&mut self, kind: TrackKind, index: u32) -> RuntimeResult<()>;

    /// Enumerate the open stream's tracks
    fn track_info(&self) -> RuntimeResult<Vec<TrackInfo>>;

    /// Query a string-keyed streaming property
    fn streaming_property(&self, property: StreamingProperty) -> RuntimeResult<String>;

    /// Set a string-keyed streaming property
    fn set_streaming_property(
        &mut self,
        property: StreamingProperty,
        value: &str,
    ) -> RuntimeResult<()>;

    /// DRM configuration call: (system, operation, payload) triple. Payload
    /// format is operation-defined (JSON for PlayReady operations).
    fn set_drm(
        &mut self,
        system: DrmSystem,
        operation: DrmOperation,
        payload: &str,
    ) -> RuntimeResult<()>;
}

/// Platform device-information service
pub trait DeviceInfo {
    /// Display resolution width in pixels; queried once at startup to scale
    /// the windowed display rect
    fn display_width(&self) -> RuntimeResult<u32>;

    /// Device identifier (ESN) for a DRM system
    fn device_id(&self, system: DrmSystem) -> RuntimeResult<String>;

    /// Whether the panel can display UHD content
    fn supports_uhd_panel(&self) -> bool;
}

//! AVPlayer Core - Smart-TV playback facade
//!
//! This crate provides the playback-side of a smart-TV sample application:
//! - A fixed catalog of DRM presets (clear, PlayReady, PlayReady challenge
//!   flow, Widevine classic)
//! - A playback facade translating host intent into platform runtime calls
//! - Typed property payloads for the runtime's string-keyed DRM and
//!   streaming-property interfaces
//! - Display-rect scaling from the 1920-wide reference design
//!
//! All streaming, buffering, bitrate adaptation, and license cryptography is
//! delegated to the external platform runtime behind [`AvPlayRuntime`]; this
//! crate configures it and reacts to its callbacks, nothing more.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     AVPlayer Core                      │
//! ├────────────────────────────────────────────────────────┤
//! │                                                        │
//! │  ┌────────────┐      ┌──────────────┐                  │
//! │  │   Preset   │─────▶│   Playback   │◀── host intent   │
//! │  │  Catalog   │      │    Facade    │    (keys/cli)    │
//! │  └────────────┘      └──────┬───────┘                  │
//! │                             │                          │
//! │        ┌────────────────────┼──────────────────┐       │
//! │        ▼                    ▼                  ▼       │
//! │  ┌───────────┐      ┌──────────────┐   ┌────────────┐  │
//! │  │  AvPlay   │      │  DeviceInfo  │   │   Player   │  │
//! │  │  Runtime  │      │   service    │   │  Surface   │  │
//! │  └───────────┘      └──────────────┘   └────────────┘  │
//! │   (platform)          (platform)          (host UI)    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod drm;
pub mod error;
pub mod events;
pub mod layout;
pub mod player;
pub mod runtime;
pub mod surface;
pub mod types;

pub use catalog::{Catalog, DrmConfig, Preset, PresetId};
pub use drm::{DrmOperation, DrmSystem, LicenseResponse, PlayReadyProperties};
pub use error::{RuntimeError, RuntimeResult};
pub use events::{DrmMessage, PlayerEventSink, RuntimeEvent};
pub use player::{VideoPlayer, SEEK_STEP_MS};
pub use runtime::{AvPlayRuntime, DeviceInfo, PrepareCallback};
pub use surface::PlayerSurface;
pub use types::{
    AdaptiveInfo, DisplayRect, PlaybackState, StreamingProperty, TrackInfo, TrackKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "AVPlayer Core initialized");
}

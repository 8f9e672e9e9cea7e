//! Core types shared across the facade

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Playback session states as reported by the platform runtime.
///
/// The facade never caches this: every decision point reads the state fresh
/// from the runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No session open
    #[default]
    None,
    /// Session open, nothing prepared
    Idle,
    /// Prepare issued (sync or async), not yet started
    Preparing,
    /// Content is playing
    Playing,
    /// Playback paused
    Paused,
}

impl PlaybackState {
    /// True when no usable session exists and playback must go through `play`
    pub fn needs_open(&self) -> bool {
        matches!(self, PlaybackState::None | PlaybackState::Idle)
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::None => write!(f, "none"),
            PlaybackState::Idle => write!(f, "idle"),
            PlaybackState::Preparing => write!(f, "preparing"),
            PlaybackState::Playing => write!(f, "playing"),
            PlaybackState::Paused => write!(f, "paused"),
        }
    }
}

/// Track categories in the runtime's track enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    Video,
    Audio,
    Text,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::Video => write!(f, "VIDEO"),
            TrackKind::Audio => write!(f, "AUDIO"),
            TrackKind::Text => write!(f, "TEXT"),
        }
    }
}

/// One entry of the runtime's track enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// Index to pass back when selecting this track
    pub index: u32,
    pub kind: TrackKind,
    /// Opaque runtime-formatted details (codec, language, bitrate...)
    pub extra_info: String,
}

/// Video surface placement in output pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DisplayRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

impl std::fmt::Display for DisplayRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// String-keyed streaming properties understood by the runtime.
///
/// Closed set instead of raw strings; `key()` yields the platform's wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamingProperty {
    /// Bitrate constraints, value built by [`AdaptiveInfo`]
    AdaptiveInfo,
    /// 4K streaming mode request
    Set4kMode,
    /// Widevine parameter blob (see `drm::widevine_parameter`)
    Widevine,
    AvailableBitrate,
    CurrentBandwidth,
    Duration,
    BufferSize,
    StartFragment,
    Cookie,
    CustomMessage,
}

impl StreamingProperty {
    /// Platform wire key
    pub fn key(&self) -> &'static str {
        match self {
            StreamingProperty::AdaptiveInfo => "ADAPTIVE_INFO",
            StreamingProperty::Set4kMode => "SET_MODE_4K",
            StreamingProperty::Widevine => "WIDEVINE",
            StreamingProperty::AvailableBitrate => "AVAILABLE_BITRATE",
            // sic: the platform's key really is misspelled
            StreamingProperty::CurrentBandwidth => "CURRENT_BANDWITH",
            StreamingProperty::Duration => "DURATION",
            StreamingProperty::BufferSize => "BUFFER_SIZE",
            StreamingProperty::StartFragment => "START_FRAGMENT",
            StreamingProperty::Cookie => "COOKIE",
            StreamingProperty::CustomMessage => "CUSTOM_MESSAGE",
        }
    }

    /// Properties shown by the stream-info query, in display order
    pub const REPORTED: [StreamingProperty; 7] = [
        StreamingProperty::AvailableBitrate,
        StreamingProperty::CurrentBandwidth,
        StreamingProperty::Duration,
        StreamingProperty::BufferSize,
        StreamingProperty::StartFragment,
        StreamingProperty::Cookie,
        StreamingProperty::CustomMessage,
    ];
}

impl std::fmt::Display for StreamingProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Adaptive-bitrate constraints submitted through the `ADAPTIVE_INFO` property.
///
/// Numeric semantics and units are runtime-defined; the facade forwards them
/// verbatim and performs no range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveInfo {
    /// Lower bound of the bitrate range
    pub from: u64,
    /// Upper bound of the bitrate range
    pub to: u64,
    /// Bitrate for the initial chunks, when hinted
    pub start: Option<u64>,
    /// Bitrate the runtime should skip over, when hinted
    pub skip: Option<u64>,
}

impl AdaptiveInfo {
    pub fn range(from: u64, to: u64) -> Self {
        Self { from, to, start: None, skip: None }
    }

    /// Render the property value; START/SKIP segments appear only when hinted.
    pub fn to_property_string(&self) -> String {
        let mut value = format!("|BITRATES={}~{}", self.from, self.to);
        if let Some(start) = self.start {
            let _ = write!(value, "|STARTBITRATE={start}");
        }
        if let Some(skip) = self.skip {
            let _ = write!(value, "|SKIPBITRATE={skip}");
        }
        value
    }
}

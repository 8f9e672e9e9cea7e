//! Playback facade
//!
//! Wraps a single platform playback session and translates host intent
//! (play, pause, seek, track/bitrate selection, fullscreen) into runtime
//! calls. Owns the two pieces of display state the runtime does not track:
//! the fullscreen flag and the UHD request flag.
//!
//! Error policy: every runtime failure is caught at the call site, logged,
//! and swallowed. Operations degrade silently instead of retrying; the only
//! invariant maintained here is "reflect the runtime's state on next query",
//! which is why playback state is read fresh from the runtime at every
//! decision point and never cached.

use crate::catalog::{Catalog, DrmConfig, Preset, PresetId};
use crate::drm::{
    widevine_parameter, DrmOperation, DrmSystem, LicenseResponse, PlayReadyProperties,
};
use crate::error::RuntimeError;
use crate::events::{DrmMessage, PlayerEventSink, RuntimeEvent};
use crate::layout;
use crate::runtime::{AvPlayRuntime, DeviceInfo};
use crate::surface::PlayerSurface;
use crate::types::{AdaptiveInfo, DisplayRect, PlaybackState, StreamingProperty, TrackKind};
use std::fmt::Write as _;
use tracing::{debug, info, trace, warn};
use url::Url;

/// Relative seek step for ff/rew, milliseconds
pub const SEEK_STEP_MS: u64 = 3000;

/// Playback facade over one platform session.
///
/// Generic over the three collaborator contracts so hosts bind the real
/// platform services and tests bind recording doubles.
pub struct VideoPlayer<R, D, S> {
    runtime: R,
    device: D,
    surface: S,
    catalog: Catalog,
    /// Currently selected preset; applied at the next `play`
    active: PresetId,
    is_fullscreen: bool,
    uhd_requested: bool,
    /// Windowed placement, scaled once at startup from the display width
    window_rect: DisplayRect,
}

impl<R, D, S> VideoPlayer<R, D, S>
where
    R: AvPlayRuntime,
    D: DeviceInfo,
    S: PlayerSurface,
{
    /// Create the facade around an unopened runtime session.
    ///
    /// Queries the display width once to scale the windowed rect from the
    /// 1920-wide reference; falls back to the reference width if the device
    /// service cannot answer.
    pub fn new(runtime: R, device: D, surface: S) -> Self {
        let display_width = match device.display_width() {
            Ok(width) => width,
            Err(error) => {
                warn!(%error, "display width unavailable, assuming reference width");
                layout::REFERENCE_WIDTH
            }
        };
        let window_rect = layout::scaled_window_rect(display_width);
        debug!(display_width, rect = %window_rect, "windowed display rect computed");

        Self {
            runtime,
            device,
            surface,
            catalog: Catalog::builtin(),
            active: PresetId::default(),
            is_fullscreen: false,
            uhd_requested: false,
            window_rect,
        }
    }

    // -------------------------------------------------------------------------
    // State accessors
    // -------------------------------------------------------------------------

    /// The preset applied at the next `play`
    pub fn active_preset(&self) -> &Preset {
        self.catalog.get(self.active)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn is_uhd_requested(&self) -> bool {
        self.uhd_requested
    }

    pub fn window_rect(&self) -> DisplayRect {
        self.window_rect
    }

    /// Direct access to the underlying runtime, for hosts that need to pump
    /// its event loop or inspect it
    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }

    /// The display surface this facade writes into
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // -------------------------------------------------------------------------
    // Playback operations
    // -------------------------------------------------------------------------

    /// Open a session and start playback.
    ///
    /// Without an explicit `url` the active preset's content URL is used.
    /// DRM properties for the active preset are applied between open and
    /// prepare; in the challenge flow playback starts from the async-prepare
    /// callback instead of synchronously.
    pub fn play(&mut self, url: Option<&Url>) {
        let preset = self.active_preset().clone();
        let url = url.cloned().unwrap_or_else(|| preset.url.clone());
        info!(preset = preset.name, %url, "starting playback");

        if let Err(error) = self.runtime.open(url.as_str()) {
            warn!(%error, code = error.code(), "failed to open playback session");
            return;
        }
        if let Err(error) = self.runtime.set_display_rect(self.window_rect) {
            warn!(%error, "failed to position video surface");
        }

        if self.uhd_requested {
            self.set_4k();
        }

        match &preset.drm {
            DrmConfig::None => {
                debug!("no DRM configured");
            }
            DrmConfig::PlayReady { license_server, custom_data } => {
                self.configure_playready(PlayReadyProperties::direct(
                    license_server.clone(),
                    custom_data.clone(),
                ));
            }
            DrmConfig::PlayReadyChallenge => {
                self.configure_playready(PlayReadyProperties::challenge());
                // No synchronous start in this branch: the runtime drives the
                // challenge round-trip and the callback starts playback once
                // prepare completes.
                let result = self.runtime.prepare_async(Box::new(|runtime| {
                    debug!("async prepare completed");
                    if let Err(error) = runtime.start() {
                        warn!(%error, "failed to start after async prepare");
                    }
                }));
                if let Err(error) = result {
                    warn!(%error, "async prepare failed");
                }
                return;
            }
            DrmConfig::Widevine { license_server, custom_data } => {
                self.configure_widevine(license_server, custom_data.as_deref());
            }
        }

        self.prepare_and_start();
    }

    /// Toggle between playing and paused; opens a fresh session when none
    /// exists (first start and post-stop restart)
    pub fn play_pause(&mut self) {
        match self.runtime.state() {
            PlaybackState::Playing | PlaybackState::Paused => self.pause(),
            _ => self.play(None),
        }
    }

    /// Pause when playing, start a session when none exists, resume otherwise
    pub fn pause(&mut self) {
        let state = self.runtime.state();
        if state == PlaybackState::Playing {
            if let Err(error) = self.runtime.pause() {
                warn!(%error, "pause failed");
            }
        } else if state.needs_open() {
            self.play(None);
        } else if let Err(error) = self.runtime.start() {
            warn!(%error, "resume failed");
        }
    }

    /// Stop the session, revert fullscreen, clear the info surface
    pub fn stop(&mut self) {
        info!("stopping playback");
        self.runtime.stop();
        if self.is_fullscreen {
            self.toggle_fullscreen();
        }
        self.surface.clear_info();
    }

    /// Jump forward by the fixed seek step
    pub fn ff(&mut self) {
        if let Err(error) = self.runtime.jump_forward(SEEK_STEP_MS) {
            warn!(%error, "jump forward failed");
        }
    }

    /// Jump backward by the fixed seek step
    pub fn rew(&mut self) {
        if let Err(error) = self.runtime.jump_backward(SEEK_STEP_MS) {
            warn!(%error, "jump backward failed");
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Select the preset applied at the next `play`; an already-open session
    /// is unaffected
    pub fn set_chosen_drm(&mut self, id: PresetId) {
        self.active = id;
        debug!(preset = self.active_preset().name, "preset selected");
    }

    /// Cycle to the next preset in catalog order
    pub fn next_preset(&mut self) {
        self.set_chosen_drm(self.active.next());
    }

    /// Cycle to the previous preset in catalog order
    pub fn prev_preset(&mut self) {
        self.set_chosen_drm(self.active.prev());
    }

    /// Record whether the next `play` should request 4K streaming mode
    pub fn set_uhd(&mut self, enabled: bool) {
        self.uhd_requested = enabled;
    }

    /// Flip the UHD request, honoring panel capability; returns the new flag
    pub fn toggle_uhd(&mut self) -> bool {
        if !self.uhd_requested {
            if self.device.supports_uhd_panel() {
                info!("4k enabled");
                self.uhd_requested = true;
            } else {
                info!("panel cannot display 4k content");
            }
        } else {
            info!("4k disabled");
            self.uhd_requested = false;
        }
        self.uhd_requested
    }

    /// Request 4K streaming mode from the runtime unconditionally
    pub fn set_4k(&mut self) {
        if let Err(error) = self
            .runtime
            .set_streaming_property(StreamingProperty::Set4kMode, "true")
        {
            warn!(%error, "failed to request 4k mode");
        }
    }

    /// Submit adaptive-bitrate constraints. Hints appear in the property
    /// string only when given; units are runtime-defined and unvalidated.
    pub fn set_bitrate(&mut self, from: u64, to: u64, start: Option<u64>, skip: Option<u64>) {
        let info = AdaptiveInfo { from, to, start, skip };
        let value = info.to_property_string();
        debug!(%value, "submitting bitrate constraints");
        if let Err(error) = self
            .runtime
            .set_streaming_property(StreamingProperty::AdaptiveInfo, &value)
        {
            warn!(%error, "failed to set bitrate constraints");
        }
    }

    /// Select a track by kind and runtime-reported index; bounds errors
    /// surface from the runtime and are logged
    pub fn set_track(&mut self, kind: TrackKind, index: u32) {
        if let Err(error) = self.runtime.select_track(kind, index) {
            warn!(%error, %kind, index, "track selection failed");
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Format the runtime's track enumeration and push it to the surface
    pub fn get_tracks(&mut self) -> String {
        match self.runtime.track_info() {
            Ok(tracks) => {
                let mut text = format!("{} tracks\n", tracks.len());
                for track in &tracks {
                    let _ = writeln!(
                        text,
                        "index: {} type: {} extra_info: {}",
                        track.index, track.kind, track.extra_info
                    );
                }
                self.surface.set_info_text(&text);
                text
            }
            Err(error) => {
                warn!(%error, "track enumeration failed");
                String::new()
            }
        }
    }

    /// Format the reported streaming properties and push them to the surface.
    /// Individually unavailable properties render empty.
    pub fn get_properties(&mut self) -> String {
        let mut text = String::new();
        for property in StreamingProperty::REPORTED {
            let value = match self.runtime.streaming_property(property) {
                Ok(value) => value,
                Err(error) => {
                    debug!(%property, %error, "streaming property unavailable");
                    String::new()
                }
            };
            let _ = writeln!(text, "{property}: {value}");
        }
        self.surface.set_info_text(&text);
        text
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Switch between fullscreen and the windowed rect.
    ///
    /// The restore call on exit may legitimately fail when no session is
    /// open; that failure is logged and swallowed.
    pub fn toggle_fullscreen(&mut self) {
        if self.is_fullscreen {
            if let Err(error) = self.runtime.set_display_rect(self.window_rect) {
                debug!(%error, "windowed rect restore failed");
            }
            self.surface.set_fullscreen(false);
            self.is_fullscreen = false;
        } else {
            if let Err(error) = self.runtime.set_display_rect(layout::FULLSCREEN_RECT) {
                warn!(%error, "fullscreen rect failed");
            }
            self.surface.set_fullscreen(true);
            self.is_fullscreen = true;
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn configure_playready(&mut self, properties: PlayReadyProperties) {
        match serde_json::to_string(&properties) {
            Ok(payload) => {
                debug!(%payload, "configuring PlayReady");
                if let Err(error) = self.runtime.set_drm(
                    DrmSystem::PlayReady,
                    DrmOperation::SetProperties,
                    &payload,
                ) {
                    warn!(%error, "failed to set PlayReady properties");
                }
            }
            Err(error) => warn!(%error, "failed to encode PlayReady properties"),
        }
    }

    fn configure_widevine(&mut self, license_server: &Url, custom_data: Option<&str>) {
        let device_id = match self.device.device_id(DrmSystem::Widevine) {
            Ok(id) => id,
            Err(error) => {
                warn!(%error, "Widevine device id unavailable");
                return;
            }
        };
        let parameter = widevine_parameter(&device_id, license_server, custom_data);
        debug!(%parameter, "configuring Widevine");
        if let Err(error) = self
            .runtime
            .set_streaming_property(StreamingProperty::Widevine, &parameter)
        {
            warn!(%error, "failed to set Widevine parameter");
        }
    }

    fn prepare_and_start(&mut self) {
        if let Err(error) = self.runtime.prepare() {
            warn!(%error, "prepare failed");
            return;
        }
        if let Err(error) = self.runtime.start() {
            warn!(%error, "start failed");
        }
    }
}

impl<R, D, S> PlayerEventSink for VideoPlayer<R, D, S>
where
    R: AvPlayRuntime,
    D: DeviceInfo,
    S: PlayerSurface,
{
    fn on_buffering_start(&mut self) {
        debug!("buffering start");
    }

    fn on_buffering_progress(&mut self, percent: u32) {
        trace!(percent, "buffering progress");
    }

    fn on_buffering_complete(&mut self) {
        debug!("buffering complete");
    }

    fn on_current_play_time(&mut self, position_ms: u64) {
        trace!(position_ms, "current play time");
    }

    fn on_runtime_event(&mut self, event: RuntimeEvent) {
        debug!(kind = %event.kind, data = %event.data, "runtime event");
    }

    fn on_drm_event(&mut self, message: DrmMessage) {
        match message {
            DrmMessage::Challenge { message } => {
                info!("installing license response from challenge round-trip");
                match serde_json::to_string(&LicenseResponse::new(message)) {
                    Ok(payload) => {
                        if let Err(error) = self.runtime.set_drm(
                            DrmSystem::PlayReady,
                            DrmOperation::InstallLicense,
                            &payload,
                        ) {
                            warn!(%error, "license installation failed");
                        }
                    }
                    Err(error) => warn!(%error, "failed to encode license response"),
                }
            }
            DrmMessage::Other { name, data } => {
                debug!(%name, %data, "DRM event");
            }
        }
    }

    fn on_stream_completed(&mut self) {
        info!("stream completed");
        self.stop();
    }

    fn on_error(&mut self, error: RuntimeError) {
        warn!(code = error.code(), %error, "runtime error event");
    }
}

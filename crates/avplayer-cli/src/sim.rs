//! Simulated platform services
//!
//! Stands in for the TV's media runtime and device-info service so the demo
//! host can exercise the facade off-device. The simulation honors the session
//! state machine and answers queries with canned data; the async-prepare
//! continuation fires immediately, as if the license round-trip were instant.

use avplayer_core::{
    AvPlayRuntime, DeviceInfo, DisplayRect, DrmOperation, DrmSystem, PlaybackState, PlayerSurface,
    PrepareCallback, RuntimeError, RuntimeResult, StreamingProperty, TrackInfo, TrackKind,
};
use tracing::info;

/// In-process stand-in for the platform media runtime
#[derive(Default)]
pub struct SimRuntime {
    state: PlaybackState,
    url: Option<String>,
    position_ms: u64,
    duration_ms: u64,
}

impl SimRuntime {
    pub fn new() -> Self {
        Self { duration_ms: 180_000, ..Default::default() }
    }

    fn require_session(&self, operation: &'static str) -> RuntimeResult<()> {
        if self.state == PlaybackState::None {
            return Err(RuntimeError::InvalidState { operation, state: self.state });
        }
        Ok(())
    }
}

impl AvPlayRuntime for SimRuntime {
    fn open(&mut self, url: &str) -> RuntimeResult<()> {
        if self.state != PlaybackState::None {
            return Err(RuntimeError::InvalidState { operation: "open", state: self.state });
        }
        info!(url, "sim: session opened");
        self.url = Some(url.to_string());
        self.state = PlaybackState::Idle;
        self.position_ms = 0;
        Ok(())
    }

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn set_display_rect(&mut self, rect: DisplayRect) -> RuntimeResult<()> {
        self.require_session("set_display_rect")?;
        info!(%rect, "sim: display rect");
        Ok(())
    }

    fn prepare(&mut self) -> RuntimeResult<()> {
        self.require_session("prepare")?;
        self.state = PlaybackState::Preparing;
        Ok(())
    }

    fn prepare_async(&mut self, on_prepared: PrepareCallback) -> RuntimeResult<()> {
        self.require_session("prepare_async")?;
        self.state = PlaybackState::Preparing;
        // instant license round-trip in the simulation
        on_prepared(self);
        Ok(())
    }

    fn start(&mut self) -> RuntimeResult<()> {
        self.require_session("start")?;
        info!("sim: playing");
        self.state = PlaybackState::Playing;
        Ok(())
    }

    fn pause(&mut self) -> RuntimeResult<()> {
        if self.state != PlaybackState::Playing {
            return Err(RuntimeError::InvalidState { operation: "pause", state: self.state });
        }
        info!("sim: paused");
        self.state = PlaybackState::Paused;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(url) = self.url.take() {
            info!(url, "sim: stopped");
        }
        self.state = PlaybackState::None;
        self.position_ms = 0;
    }

    fn jump_forward(&mut self, offset_ms: u64) -> RuntimeResult<()> {
        self.require_session("jump_forward")?;
        self.position_ms = (self.position_ms + offset_ms).min(self.duration_ms);
        info!(position_ms = self.position_ms, "sim: seek forward");
        Ok(())
    }

    fn jump_backward(&mut self, offset_ms: u64) -> RuntimeResult<()> {
        self.require_session("jump_backward")?;
        self.position_ms = self.position_ms.saturating_sub(offset_ms);
        info!(position_ms = self.position_ms, "sim: seek backward");
        Ok(())
    }

    fn select_track(&mut self, kind: TrackKind, index: u32) -> RuntimeResult<()> {
        self.require_session("select_track")?;
        let known = self.track_info()?;
        if !known.iter().any(|t| t.kind == kind && t.index == index) {
            return Err(RuntimeError::InvalidParameter(format!(
                "no {kind} track at index {index}"
            )));
        }
        info!(%kind, index, "sim: track selected");
        Ok(())
    }

    fn track_info(&self) -> RuntimeResult<Vec<TrackInfo>> {
        self.require_session("track_info")?;
        Ok(vec![
            TrackInfo { index: 0, kind: TrackKind::Video, extra_info: "h264 1280x720".into() },
            TrackInfo { index: 1, kind: TrackKind::Audio, extra_info: "aac en 2ch".into() },
            TrackInfo { index: 2, kind: TrackKind::Text, extra_info: "en captions".into() },
        ])
    }

    fn streaming_property(&self, property: StreamingProperty) -> RuntimeResult<String> {
        self.require_session("streaming_property")?;
        let value = match property {
            StreamingProperty::AvailableBitrate => "477000|1056000|2056000".to_string(),
            StreamingProperty::CurrentBandwidth => "2056000".to_string(),
            StreamingProperty::Duration => self.duration_ms.to_string(),
            StreamingProperty::BufferSize => "32768".to_string(),
            StreamingProperty::StartFragment => "1".to_string(),
            _ => String::new(),
        };
        Ok(value)
    }

    fn set_streaming_property(
        &mut self,
        property: StreamingProperty,
        value: &str,
    ) -> RuntimeResult<()> {
        self.require_session("set_streaming_property")?;
        info!(property = property.key(), value, "sim: streaming property set");
        Ok(())
    }

    fn set_drm(
        &mut self,
        system: DrmSystem,
        operation: DrmOperation,
        payload: &str,
    ) -> RuntimeResult<()> {
        self.require_session("set_drm")?;
        info!(%system, %operation, payload, "sim: drm call");
        Ok(())
    }
}

/// Fixed device answers for the simulation
pub struct SimDevice {
    pub display_width: u32,
    pub uhd_panel: bool,
}

impl DeviceInfo for SimDevice {
    fn display_width(&self) -> RuntimeResult<u32> {
        Ok(self.display_width)
    }

    fn device_id(&self, system: DrmSystem) -> RuntimeResult<String> {
        Ok(format!("SIM-{}-0001", system.name()))
    }

    fn supports_uhd_panel(&self) -> bool {
        self.uhd_panel
    }
}

/// Prints surface updates to stdout
#[derive(Default)]
pub struct ConsoleSurface;

impl PlayerSurface for ConsoleSurface {
    fn set_info_text(&mut self, text: &str) {
        println!("--- stream info ---");
        print!("{text}");
        println!("-------------------");
    }

    fn clear_info(&mut self) {
        println!("--- stream info cleared ---");
    }

    fn set_fullscreen(&mut self, enabled: bool) {
        println!("[display] fullscreen: {enabled}");
    }
}

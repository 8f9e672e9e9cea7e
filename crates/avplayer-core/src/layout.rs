//! Display-rect layout
//!
//! The windowed player rectangle is authored against a 1920-wide reference
//! design and scaled once at startup using the display width reported by the
//! device-info service.

use crate::types::DisplayRect;

/// Reference design resolution
pub const REFERENCE_WIDTH: u32 = 1920;
pub const REFERENCE_HEIGHT: u32 = 1080;

/// Windowed placement at reference resolution
const WINDOW_RECT: DisplayRect = DisplayRect::new(10, 300, 854, 480);

/// Full-surface rectangle used in fullscreen mode
pub const FULLSCREEN_RECT: DisplayRect =
    DisplayRect::new(0, 0, REFERENCE_WIDTH, REFERENCE_HEIGHT);

/// Scale the reference windowed rect to `display_width` output pixels.
///
/// Each component floors, matching the platform's integer pixel grid.
pub fn scaled_window_rect(display_width: u32) -> DisplayRect {
    let scale = |base: u32| ((base as u64 * display_width as u64) / REFERENCE_WIDTH as u64) as u32;
    DisplayRect::new(
        scale(WINDOW_RECT.x),
        scale(WINDOW_RECT.y),
        scale(WINDOW_RECT.width),
        scale(WINDOW_RECT.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_reference_width() {
        assert_eq!(scaled_window_rect(REFERENCE_WIDTH), WINDOW_RECT);
    }

    #[test]
    fn test_scaling_floors_components() {
        // 1280/1920 = 2/3: 10 -> 6 (6.66 floored), 300 -> 200, 854 -> 569, 480 -> 320
        let rect = scaled_window_rect(1280);
        assert_eq!(rect, DisplayRect::new(6, 200, 569, 320));
    }

    #[test]
    fn test_uhd_panel_scales_up() {
        let rect = scaled_window_rect(3840);
        assert_eq!(rect, DisplayRect::new(20, 600, 1708, 960));
    }
}

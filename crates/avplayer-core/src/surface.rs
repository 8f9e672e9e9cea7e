//! Display surface collaborator
//!
//! The host owns the actual rendering (DOM, terminal, whatever); the facade
//! only needs to push stream-info text and flip a fullscreen visual marker.

/// Visual surface the facade writes into
pub trait PlayerSurface {
    /// Replace the stream-info text
    fn set_info_text(&mut self, text: &str);

    /// Clear the stream-info text
    fn clear_info(&mut self);

    /// Apply or remove the fullscreen marker on the player and controls
    fn set_fullscreen(&mut self, enabled: bool);
}

//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the debug panel is visible
    pub ui_visible: bool,
    /// Message to display temporarily in the panel, with seconds left
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message, dropping it once expired.
    pub fn tick_message(&mut self, delta_secs: f32) {
        if let Some((_, remaining)) = &mut self.status_message {
            *remaining -= delta_secs;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// Actions that can be triggered from the debug panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    SkipStage,
    ToggleMusic,
    Close,
}

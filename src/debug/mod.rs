//! Debug tooling for fast iteration (enabled by the `dev-tools` feature).
//!
//! Features:
//! - Toggle the debug panel with F1 or backtick
//! - Skip the current stage with Ctrl+N
//! - Inspect stage, seed, companion and catches

mod state;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use state::{DebugAction, DebugState};

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_buttons, handle_debug_hotkeys, toggle_debug_ui, update_debug_info,
    update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    toggle_debug_ui,
                    handle_debug_hotkeys,
                    handle_debug_buttons,
                    update_status_message,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                update_debug_info.run_if(|state: Res<DebugState>| state.ui_visible),
            );
    }
}

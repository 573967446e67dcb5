//! Seek domain: find every hidden friend in the scene.

mod engine;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use engine::{ClickOutcome, SeekAndFind, SeekEvent};

use bevy::prelude::*;

use crate::core::Stage;
use crate::seek::systems::{
    begin_seek, end_seek, handle_start_scanning, handle_target_clicks, tick_seek,
};
use crate::seek::ui::{move_scanner_beam, spawn_seek_screen};

pub struct SeekPlugin;

impl Plugin for SeekPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Stage::SeekAndFind), (begin_seek, spawn_seek_screen))
            .add_systems(OnExit(Stage::SeekAndFind), end_seek)
            .add_systems(
                Update,
                (
                    handle_start_scanning,
                    handle_target_clicks,
                    tick_seek,
                    move_scanner_beam,
                )
                    .chain()
                    .run_if(in_state(Stage::SeekAndFind)),
            );
    }
}

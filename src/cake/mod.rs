//! Cake domain: a downward knife gesture that cuts the birthday cake once.

mod gesture;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use gesture::{BURST_DELAYS, CakeCut, CakeEvent, GestureSample};
pub use systems::CakePointer;

use bevy::prelude::*;

use crate::cake::systems::{begin_cake_cutting, end_cake_cutting, tick_cake, track_knife_drag};
use crate::cake::ui::{animate_cake, clear_split_progress, spawn_cake_screen};
use crate::core::Stage;

pub struct CakePlugin;

impl Plugin for CakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(Stage::CakeCutting),
            (begin_cake_cutting, spawn_cake_screen),
        )
        .add_systems(
            OnExit(Stage::CakeCutting),
            (end_cake_cutting, clear_split_progress),
        )
        .add_systems(
            Update,
            (track_knife_drag, tick_cake, animate_cake)
                .chain()
                .run_if(in_state(Stage::CakeCutting)),
        );
    }
}

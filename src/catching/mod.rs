//! Catching domain: drag-and-throw mini-game to catch a quota of creatures.

mod engine;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use engine::{
    CaptureTarget, CatchEngine, CatchEvent, CatchPhase, Projectile, capture_succeeds,
};
pub use systems::CatchAim;

use bevy::prelude::*;

use crate::catching::systems::{
    apply_catch_events, end_catch_round, handle_throw_input, start_catch_round, step_projectiles,
    tick_catch_delays,
};
use crate::catching::ui::{
    spawn_catch_screen, sync_aim_marker, sync_catch_hud, sync_creature_sprite, sync_projectiles,
};
use crate::core::Stage;

pub struct CatchingPlugin;

impl Plugin for CatchingPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CatchEvent>()
            .add_systems(
                OnEnter(Stage::Catching),
                (start_catch_round, spawn_catch_screen),
            )
            .add_systems(OnExit(Stage::Catching), end_catch_round)
            .add_systems(
                FixedUpdate,
                step_projectiles.run_if(in_state(Stage::Catching)),
            )
            .add_systems(
                Update,
                (
                    handle_throw_input,
                    tick_catch_delays,
                    apply_catch_events,
                    sync_catch_hud,
                    sync_creature_sprite,
                    sync_projectiles,
                    sync_aim_marker,
                )
                    .chain()
                    .run_if(in_state(Stage::Catching)),
            );
    }
}

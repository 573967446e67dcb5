//! Core domain: stage flow, session state, shared scheduling and randomness.

pub mod assets;
mod events;
mod random;
mod resources;
mod schedule;
mod selection;
mod sequencer;
mod state;
mod systems;
#[cfg(test)]
mod tests;
pub mod ui;

pub use assets::{AssetWatchlist, load_image};
pub use events::{CompanionChosenEvent, StageCompletedEvent};
pub use random::{RandomSource, SessionRng};
pub use resources::{CaughtCreature, CompanionChoice, Session};
pub use schedule::DelayQueue;
pub use selection::{CompanionSelection, SelectionEvent};
pub use sequencer::StageSequencer;
pub use state::Stage;

use bevy::prelude::*;

use crate::core::assets::report_failed_assets;
use crate::core::systems::{
    apply_stage_completions, begin_companion_selection, end_companion_selection,
    handle_continue_buttons, log_session_seed, setup_camera, spawn_companion_badge,
    tick_companion_selection,
};
use crate::core::ui::button_visuals;
use crate::core::ui::companion_select::{
    handle_companion_select_input, spawn_companion_select_ui, update_companion_cards,
};
use crate::core::ui::final_message::spawn_final_message;
use crate::core::ui::intro::spawn_intro_screen;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Stage>()
            .init_resource::<StageSequencer>()
            .init_resource::<Session>()
            .init_resource::<SessionRng>()
            .init_resource::<AssetWatchlist>()
            .add_message::<StageCompletedEvent>()
            .add_message::<CompanionChosenEvent>()
            .add_systems(Startup, (setup_camera, log_session_seed))
            .add_systems(OnEnter(Stage::Intro), spawn_intro_screen)
            .add_systems(
                OnEnter(Stage::Selection),
                (begin_companion_selection, spawn_companion_select_ui),
            )
            .add_systems(OnExit(Stage::Selection), end_companion_selection)
            .add_systems(OnEnter(Stage::Final), spawn_final_message)
            .add_systems(
                Update,
                (
                    handle_companion_select_input,
                    tick_companion_selection,
                    update_companion_cards,
                )
                    .chain()
                    .run_if(in_state(Stage::Selection)),
            )
            .add_systems(
                Update,
                (
                    button_visuals,
                    handle_continue_buttons,
                    spawn_companion_badge,
                    report_failed_assets,
                    apply_stage_completions,
                )
                    .chain(),
            );
    }
}

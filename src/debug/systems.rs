//! Debug domain: debug systems for input and runtime tweaks.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::MusicCommand;
use crate::core::{AssetWatchlist, Session, SessionRng, StageCompletedEvent, StageSequencer};
use crate::debug::state::{DebugAction, DebugState};
use crate::debug::ui::{DebugButton, DebugInfoText, DebugStatusMessage, DebugUI, spawn_debug_ui};

/// Toggle the debug panel with F1 or backtick key
pub(crate) fn toggle_debug_ui(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);

    if toggle {
        debug_state.ui_visible = !debug_state.ui_visible;

        if debug_state.ui_visible {
            spawn_debug_ui(&mut commands);
        } else {
            for entity in &existing_ui {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Report the active stage as complete, as if its win condition was met.
fn skip_stage(
    sequencer: &StageSequencer,
    debug_state: &mut DebugState,
    completed: &mut MessageWriter<StageCompletedEvent>,
) {
    let stage = sequencer.current();
    if stage.is_terminal() {
        debug_state.set_message("Already at the final stage", 2.0);
        return;
    }
    completed.write(StageCompletedEvent { stage });
    debug_state.set_message(format!("Skipped {}", stage.name()), 2.0);
    info!("[DEBUG] Skipping stage '{}'", stage.name());
}

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    sequencer: Res<StageSequencer>,
    mut debug_state: ResMut<DebugState>,
    mut completed: MessageWriter<StageCompletedEvent>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    // Ctrl+N: complete the current stage
    if ctrl && keyboard.just_pressed(KeyCode::KeyN) {
        skip_stage(&sequencer, &mut debug_state, &mut completed);
    }
}

pub(crate) fn handle_debug_buttons(
    mut commands: Commands,
    buttons: Query<(&Interaction, &DebugButton), Changed<Interaction>>,
    sequencer: Res<StageSequencer>,
    mut debug_state: ResMut<DebugState>,
    existing_ui: Query<Entity, With<DebugUI>>,
    mut completed: MessageWriter<StageCompletedEvent>,
    mut music: MessageWriter<MusicCommand>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button.action {
            DebugAction::SkipStage => skip_stage(&sequencer, &mut debug_state, &mut completed),
            DebugAction::ToggleMusic => {
                music.write(MusicCommand::Toggle);
            }
            DebugAction::Close => {
                debug_state.ui_visible = false;
                for entity in &existing_ui {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}

pub(crate) fn update_status_message(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    mut text: Query<&mut Text, With<DebugStatusMessage>>,
) {
    debug_state.tick_message(time.delta_secs());

    if let Ok(mut text) = text.single_mut() {
        let message = debug_state
            .status_message
            .as_ref()
            .map(|(message, _)| message.as_str())
            .unwrap_or_default();
        if **text != message {
            **text = message.to_string();
        }
    }
}

pub(crate) fn update_debug_info(
    sequencer: Res<StageSequencer>,
    session: Res<Session>,
    rng: Res<SessionRng>,
    watchlist: Res<AssetWatchlist>,
    mut text: Query<&mut Text, (With<DebugInfoText>, Without<DebugStatusMessage>)>,
) {
    let Ok(mut text) = text.single_mut() else {
        return;
    };

    let companion = session
        .companion()
        .map(|c| c.name.as_str())
        .unwrap_or("none");
    **text = format!(
        "Stage: {} ({}/{})\nSeed: {}\nCompanion: {}\nCaught: {}\nAssets loading: {}",
        sequencer.current().name(),
        sequencer.current().index() + 1,
        crate::core::Stage::ORDER.len(),
        rng.seed(),
        companion,
        session.caught().len(),
        watchlist.len(),
    );
}

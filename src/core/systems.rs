//! Core domain: stage flow systems and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{ContentRegistry, GameplayDefaults};
use crate::core::events::{CompanionChosenEvent, StageCompletedEvent};
use crate::core::random::SessionRng;
use crate::core::resources::{CompanionChoice, Session};
use crate::core::selection::{CompanionSelection, SelectionEvent};
use crate::core::sequencer::StageSequencer;
use crate::core::state::Stage;
use crate::core::ui::companion_select::{ConfirmationSlot, spawn_confirmation_card};
use crate::core::ui::{ContinueButton, spawn_text};

/// Small persistent badge showing the chosen companion
#[derive(Component, Debug)]
pub struct CompanionBadge;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn log_session_seed(rng: Res<SessionRng>) {
    info!("Starting greeting session with seed: {}", rng.seed());
}

/// Move the sequencer forward for each completion report and mirror the
/// result into the Bevy state.
pub(crate) fn apply_stage_completions(
    mut events: MessageReader<StageCompletedEvent>,
    mut sequencer: ResMut<StageSequencer>,
    mut next_stage: ResMut<NextState<Stage>>,
) {
    for event in events.read() {
        match sequencer.complete(event.stage) {
            Some(next) => {
                info!("Stage '{}' complete, entering '{}'", event.stage.name(), next.name());
                next_stage.set(next);
            }
            None => {
                debug!(
                    "Ignoring completion of '{}' while '{}' is active",
                    event.stage.name(),
                    sequencer.current().name()
                );
            }
        }
    }
}

pub(crate) fn handle_continue_buttons(
    query: Query<(&Interaction, &ContinueButton), Changed<Interaction>>,
    mut completed: MessageWriter<StageCompletedEvent>,
) {
    for (interaction, button) in &query {
        if *interaction == Interaction::Pressed {
            completed.write(StageCompletedEvent {
                stage: button.stage,
            });
        }
    }
}

pub(crate) fn begin_companion_selection(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    defaults: Res<GameplayDefaults>,
) {
    commands.insert_resource(CompanionSelection::new(
        registry.companions.len(),
        defaults.selection.clone(),
    ));
}

pub(crate) fn end_companion_selection(mut commands: Commands) {
    commands.remove_resource::<CompanionSelection>();
}

pub(crate) fn tick_companion_selection(
    mut commands: Commands,
    time: Res<Time>,
    selection: Option<ResMut<CompanionSelection>>,
    registry: Res<ContentRegistry>,
    mut session: ResMut<Session>,
    slot: Query<Entity, With<ConfirmationSlot>>,
    mut chosen: MessageWriter<CompanionChosenEvent>,
    mut completed: MessageWriter<StageCompletedEvent>,
) {
    let Some(mut selection) = selection else {
        return;
    };

    for event in selection.tick(time.delta()) {
        match event {
            SelectionEvent::Confirmed(index) => {
                let (Some(companion), Ok(slot)) = (registry.companions.get(index), slot.single())
                else {
                    continue;
                };
                spawn_confirmation_card(&mut commands, slot, companion);
            }
            SelectionEvent::Committed(index) => {
                let Some(def) = registry.companions.get(index) else {
                    warn!("Committed companion index {} has no definition", index);
                    continue;
                };
                let companion = CompanionChoice::from_def(def);
                if session.choose_companion(companion.clone()) {
                    chosen.write(CompanionChosenEvent { companion });
                }
                completed.write(StageCompletedEvent {
                    stage: Stage::Selection,
                });
            }
        }
    }
}

pub(crate) fn spawn_companion_badge(
    mut commands: Commands,
    mut events: MessageReader<CompanionChosenEvent>,
    existing: Query<(), With<CompanionBadge>>,
) {
    for event in events.read() {
        if !existing.is_empty() {
            continue;
        }
        let companion = &event.companion;

        commands
            .spawn((
                CompanionBadge,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(12.0),
                    top: Val::Px(12.0),
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::all(companion.accent),
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.85)),
                GlobalZIndex(50),
            ))
            .with_children(|badge| {
                spawn_text(badge, companion.name.clone(), 16.0, companion.accent);
                spawn_text(
                    badge,
                    format!("{} companion", companion.category),
                    11.0,
                    Color::srgb(0.45, 0.45, 0.5),
                );
            });
    }
}

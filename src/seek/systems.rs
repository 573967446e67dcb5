//! Seek domain: hunt lifecycle and click handling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::{ContentRegistry, GameplayDefaults};
use crate::core::{Stage, StageCompletedEvent};
use crate::effects::ConfettiBurst;
use crate::seek::engine::{ClickOutcome, SeekAndFind, SeekEvent};
use crate::seek::ui::{
    BriefingPanel, FoundCounterText, HiddenTargetButton, HintEntry, StartScanButton,
    VictoryBanner, refresh_found_targets,
};

pub(crate) fn begin_seek(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    defaults: Res<GameplayDefaults>,
) {
    let ids = registry
        .hidden_targets
        .iter()
        .map(|target| target.id.clone())
        .collect();
    commands.insert_resource(SeekAndFind::new(ids, defaults.seek.clone()));
}

pub(crate) fn end_seek(mut commands: Commands) {
    commands.remove_resource::<SeekAndFind>();
}

pub(crate) fn handle_start_scanning(
    mut commands: Commands,
    buttons: Query<&Interaction, (Changed<Interaction>, With<StartScanButton>)>,
    panels: Query<Entity, With<BriefingPanel>>,
    seek: Option<ResMut<SeekAndFind>>,
) {
    let Some(mut seek) = seek else {
        return;
    };
    if !buttons.iter().any(|i| *i == Interaction::Pressed) {
        return;
    }

    if seek.start_scanning() {
        info!("Scanning for {} hidden friends", seek.total());
        for entity in &panels {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn handle_target_clicks(
    buttons: Query<(&Interaction, &HiddenTargetButton), Changed<Interaction>>,
    seek: Option<ResMut<SeekAndFind>>,
    mut targets: Query<(&HiddenTargetButton, &mut ImageNode, &mut BorderColor)>,
    mut hints: Query<(&HintEntry, &mut Text, &mut TextColor), Without<FoundCounterText>>,
    mut counter: Query<&mut Text, With<FoundCounterText>>,
) {
    let Some(mut seek) = seek else {
        return;
    };

    let mut changed = false;
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match seek.click(&button.id) {
            ClickOutcome::Found { remaining } => {
                info!("Found '{}', {} left", button.id, remaining);
                changed = true;
            }
            outcome => debug!("Click on '{}' ignored: {:?}", button.id, outcome),
        }
    }

    if changed {
        refresh_found_targets(&seek, &mut targets, &mut hints, &mut counter);
    }
}

pub(crate) fn tick_seek(
    time: Res<Time>,
    seek: Option<ResMut<SeekAndFind>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut banner: Query<&mut Visibility, With<VictoryBanner>>,
    mut confetti: MessageWriter<ConfettiBurst>,
    mut completed: MessageWriter<StageCompletedEvent>,
) {
    let Some(mut seek) = seek else {
        return;
    };

    for event in seek.tick(time.delta()) {
        match event {
            SeekEvent::ConfettiShown => {
                if let Ok(mut visibility) = banner.single_mut() {
                    *visibility = Visibility::Inherited;
                }
                let size = windows
                    .single()
                    .map(|w| Vec2::new(w.width(), w.height()))
                    .unwrap_or(Vec2::new(1280.0, 720.0));
                for x in [0.2, 0.5, 0.8] {
                    confetti.write(
                        ConfettiBurst::new(Vec2::new(x, 0.4) * size).with_particle_count(60),
                    );
                }
            }
            SeekEvent::ConfettiHidden => {
                if let Ok(mut visibility) = banner.single_mut() {
                    *visibility = Visibility::Hidden;
                }
            }
            SeekEvent::Completed => {
                info!("Every hidden friend found");
                completed.write(StageCompletedEvent {
                    stage: Stage::SeekAndFind,
                });
            }
        }
    }
}

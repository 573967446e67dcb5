//! Catching domain: round lifecycle, pointer input and engine ticking.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::audio::{PlaySfx, Sfx};
use crate::catching::engine::{CatchEngine, CatchEvent};
use crate::catching::ui::{CatchScreen, CreatureSprite, spawn_completion_overlay};
use crate::content::{ContentRegistry, GameplayDefaults};
use crate::core::{CaughtCreature, Session, SessionRng, Stage, StageCompletedEvent};
use crate::effects::ConfettiBurst;

/// Where the current drag started, in window pixels
#[derive(Resource, Debug, Default)]
pub struct CatchAim {
    pub origin: Option<Vec2>,
}

pub(crate) fn start_catch_round(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    defaults: Res<GameplayDefaults>,
    mut rng: ResMut<SessionRng>,
    mut completed: MessageWriter<StageCompletedEvent>,
) {
    let engine = CatchEngine::new(
        registry.creatures.clone(),
        defaults.catching.clone(),
        &mut *rng,
    );

    let Some(engine) = engine else {
        error!("No creatures to catch, skipping the catching stage");
        completed.write(StageCompletedEvent {
            stage: Stage::Catching,
        });
        return;
    };

    info!(
        "Catch round started: catch {} creatures, first up is {}",
        engine.quota(),
        engine.target().name
    );
    commands.insert_resource(engine);
    commands.init_resource::<CatchAim>();
}

pub(crate) fn end_catch_round(mut commands: Commands) {
    commands.remove_resource::<CatchEngine>();
    commands.remove_resource::<CatchAim>();
}

/// Press starts aiming, release throws toward the release point.
pub(crate) fn handle_throw_input(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    engine: Option<ResMut<CatchEngine>>,
    aim: Option<ResMut<CatchAim>>,
    mut sfx: MessageWriter<PlaySfx>,
) {
    let (Some(mut engine), Some(mut aim)) = (engine, aim) else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) && engine.accepts_throws() {
        aim.origin = Some(cursor);
    }

    if mouse.just_released(MouseButton::Left) {
        let Some(origin) = aim.origin.take() else {
            return;
        };
        if let Some(id) = engine.throw(origin, cursor) {
            debug!("Projectile {} thrown from {} toward {}", id, origin, cursor);
            sfx.write(PlaySfx(Sfx::Throw));
        }
    }
}

pub(crate) fn step_projectiles(
    engine: Option<ResMut<CatchEngine>>,
    mut rng: ResMut<SessionRng>,
    mut events: MessageWriter<CatchEvent>,
) {
    let Some(mut engine) = engine else {
        return;
    };
    for event in engine.step(&mut *rng) {
        events.write(event);
    }
}

pub(crate) fn tick_catch_delays(
    time: Res<Time>,
    engine: Option<ResMut<CatchEngine>>,
    mut rng: ResMut<SessionRng>,
    mut events: MessageWriter<CatchEvent>,
) {
    let Some(mut engine) = engine else {
        return;
    };
    for event in engine.tick_delays(time.delta(), &mut *rng) {
        events.write(event);
    }
}

pub(crate) fn apply_catch_events(
    mut commands: Commands,
    mut events: MessageReader<CatchEvent>,
    mut session: ResMut<Session>,
    roots: Query<Entity, With<CatchScreen>>,
    creature: Query<&Node, With<CreatureSprite>>,
    mut sfx: MessageWriter<PlaySfx>,
    mut confetti: MessageWriter<ConfettiBurst>,
) {
    for event in events.read() {
        match event {
            CatchEvent::Caught { creature: caught, total } => {
                info!("Caught {} ({} so far)", caught.name, total);
                session.record_caught(CaughtCreature {
                    id: caught.id.clone(),
                    name: caught.name.clone(),
                    image: caught.image.clone(),
                });
                sfx.write(PlaySfx(Sfx::Celebration));

                let origin = creature
                    .single()
                    .ok()
                    .and_then(|node| match (node.left, node.top) {
                        (Val::Px(left), Val::Px(top)) => Some(Vec2::new(left, top)),
                        _ => None,
                    })
                    .unwrap_or(Vec2::new(640.0, 240.0));
                confetti.write(ConfettiBurst::new(origin).with_colors(vec![
                    caught.rarity.color(),
                    Color::srgb(0.98, 0.8, 0.22),
                    Color::WHITE,
                ]));
            }
            CatchEvent::Escaped { creature, health } => {
                debug!("{} broke free, health now {}", creature, health);
            }
            CatchEvent::NewTarget { creature } => {
                info!("A wild {} appeared", creature.name);
            }
            CatchEvent::Completed => {
                info!("Catch quota reached");
                if let Ok(root) = roots.single() {
                    spawn_completion_overlay(&mut commands, root, session.caught());
                }
            }
            CatchEvent::BattleResumed | CatchEvent::NoticeCleared => {}
        }
    }
}

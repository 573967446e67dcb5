//! Cake domain: pointer sampling and reacting to the cut.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::audio::{PlaySfx, Sfx};
use crate::cake::gesture::{CakeCut, CakeEvent, GestureSample};
use crate::cake::ui::{CakeCaption, CakeScreen, spawn_cake_continue};
use crate::content::GameplayDefaults;
use crate::effects::ConfettiBurst;

/// Burst origins as fractions of the window size
const BURST_ORIGINS: [Vec2; 4] = [
    Vec2::new(0.25, 0.3),
    Vec2::new(0.75, 0.3),
    Vec2::new(0.35, 0.6),
    Vec2::new(0.65, 0.6),
];

/// Pointer history for the drag in progress
#[derive(Resource, Debug, Default)]
pub struct CakePointer {
    pub start: Option<Vec2>,
    last_dy: f32,
    last_secs: f64,
}

pub(crate) fn begin_cake_cutting(mut commands: Commands, defaults: Res<GameplayDefaults>) {
    commands.insert_resource(CakeCut::new(defaults.cake.clone()));
    commands.init_resource::<CakePointer>();
    info!("Cake is ready to cut");
}

pub(crate) fn end_cake_cutting(mut commands: Commands) {
    commands.remove_resource::<CakeCut>();
    commands.remove_resource::<CakePointer>();
}

/// Sample the pointer while the button is held and feed the gesture.
pub(crate) fn track_knife_drag(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cut: Option<ResMut<CakeCut>>,
    pointer: Option<ResMut<CakePointer>>,
    mut sfx: MessageWriter<PlaySfx>,
) {
    let (Some(mut cut), Some(mut pointer)) = (cut, pointer) else {
        return;
    };
    let now = time.elapsed_secs_f64();

    if mouse.just_released(MouseButton::Left) {
        if pointer.start.take().is_some() && !cut.is_committed() {
            debug!("Knife released before the cut");
        }
        cut.end_drag();
        return;
    }

    let Some(cursor) = windows.single().ok().and_then(|w| w.cursor_position()) else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) && !cut.is_committed() {
        pointer.start = Some(cursor);
        pointer.last_dy = 0.0;
        pointer.last_secs = now;
        cut.begin_drag();
        return;
    }

    let Some(start) = pointer.start else {
        return;
    };
    if !mouse.pressed(MouseButton::Left) {
        return;
    }

    let elapsed_ms = ((now - pointer.last_secs) * 1000.0) as f32;
    if elapsed_ms <= 0.0 {
        return;
    }

    let offset = cursor - start;
    let velocity = (offset.y - pointer.last_dy) / elapsed_ms;
    pointer.last_dy = offset.y;
    pointer.last_secs = now;

    for event in cut.update(GestureSample::new(offset.x, offset.y, velocity)) {
        match event {
            CakeEvent::KnifeContact => {
                sfx.write(PlaySfx(Sfx::Knife));
            }
            CakeEvent::Committed => {
                info!("Cake cut with velocity {:.2} px/ms", velocity);
                pointer.start = None;
                sfx.write(PlaySfx(Sfx::Celebration));
            }
            _ => {}
        }
    }
}

pub(crate) fn tick_cake(
    mut commands: Commands,
    time: Res<Time>,
    cut: Option<ResMut<CakeCut>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    roots: Query<Entity, With<CakeScreen>>,
    mut caption: Query<&mut Text, With<CakeCaption>>,
    mut confetti: MessageWriter<ConfettiBurst>,
) {
    let Some(mut cut) = cut else {
        return;
    };

    for event in cut.tick(time.delta()) {
        match event {
            CakeEvent::Burst(index) => {
                let size = windows
                    .single()
                    .map(|w| Vec2::new(w.width(), w.height()))
                    .unwrap_or(Vec2::new(1280.0, 720.0));
                let origin = BURST_ORIGINS[index % BURST_ORIGINS.len()] * size;
                confetti.write(ConfettiBurst::new(origin).with_particle_count(50));
            }
            CakeEvent::SliceSettled => {
                if let Ok(mut text) = caption.single_mut() {
                    **text = "Make a wish!".to_string();
                }
            }
            CakeEvent::ContinueReady => {
                if let Ok(root) = roots.single() {
                    spawn_cake_continue(&mut commands, root);
                }
            }
            CakeEvent::KnifeContact | CakeEvent::Committed => {}
        }
    }
}

//! Cake domain: the cake, the knife and the split animation.

use bevy::prelude::*;

use crate::cake::gesture::CakeCut;
use crate::content::GameplayDefaults;
use crate::core::Stage;
use crate::core::ui::{MUTED_TEXT, TEXT_COLOR, TITLE_COLOR, screen_root, spawn_continue_button, spawn_text};

const CAKE_WIDTH: f32 = 320.0;
const CAKE_HEIGHT: f32 = 200.0;
/// How far each half slides away once cut
const SPLIT_DISTANCE: f32 = 40.0;

const SPONGE: Color = Color::srgb(0.98, 0.87, 0.7);
const FROSTING: Color = Color::srgb(0.98, 0.62, 0.78);
const SLICE_SHADOW: Color = Color::srgb(0.45, 0.25, 0.2);
const KNIFE: Color = Color::srgb(0.78, 0.8, 0.84);

/// Marker for the cake screen root
#[derive(Component, Debug)]
pub struct CakeScreen;

#[derive(Component, Debug)]
pub struct CakeCaption;

/// One half of the cake; `side` is -1 for left and 1 for right
#[derive(Component, Debug)]
pub struct CakeHalf {
    pub side: f32,
}

#[derive(Component, Debug)]
pub struct SliceGap;

#[derive(Component, Debug)]
pub struct Knife;

/// Seconds since the cut, drives the split animation
#[derive(Resource, Debug, Default)]
pub struct SplitProgress {
    pub elapsed: f32,
}

pub(crate) fn spawn_cake_screen(mut commands: Commands) {
    commands.insert_resource(SplitProgress::default());

    commands
        .spawn((CakeScreen, screen_root(Stage::CakeCutting)))
        .with_children(|parent| {
            spawn_text(parent, "Time to cut the cake!", 40.0, TITLE_COLOR);
            parent.spawn((
                CakeCaption,
                Text::new("Drag the knife down through the cake"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
            ));

            // Cake body with the knife hovering above the middle
            parent
                .spawn(Node {
                    width: Val::Px(CAKE_WIDTH + SPLIT_DISTANCE * 2.0),
                    height: Val::Px(CAKE_HEIGHT + 140.0),
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                })
                .with_children(|stage| {
                    for side in [-1.0, 1.0] {
                        spawn_cake_half(stage, side);
                    }

                    stage.spawn((
                        SliceGap,
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Px(SPLIT_DISTANCE + CAKE_WIDTH / 2.0 - 2.0),
                            top: Val::Px(140.0),
                            width: Val::Px(4.0),
                            height: Val::Px(0.0),
                            ..default()
                        },
                        BackgroundColor(SLICE_SHADOW),
                    ));

                    stage.spawn((
                        Knife,
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Px(SPLIT_DISTANCE + CAKE_WIDTH / 2.0 - 6.0),
                            top: Val::Px(0.0),
                            width: Val::Px(12.0),
                            height: Val::Px(110.0),
                            ..default()
                        },
                        BackgroundColor(KNIFE),
                        ZIndex(5),
                    ));
                });
        });
}

fn spawn_cake_half(parent: &mut ChildSpawnerCommands, side: f32) {
    let left = if side < 0.0 {
        SPLIT_DISTANCE
    } else {
        SPLIT_DISTANCE + CAKE_WIDTH / 2.0
    };

    parent
        .spawn((
            CakeHalf { side },
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(140.0),
                width: Val::Px(CAKE_WIDTH / 2.0),
                height: Val::Px(CAKE_HEIGHT),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(SPONGE),
        ))
        .with_children(|half| {
            half.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(36.0),
                    ..default()
                },
                BackgroundColor(FROSTING),
            ));
        });
}

/// Move the knife with the drag, grow the slice, and part the halves after
/// the cut.
pub(crate) fn animate_cake(
    time: Res<Time>,
    cut: Option<Res<CakeCut>>,
    defaults: Res<GameplayDefaults>,
    mut progress: ResMut<SplitProgress>,
    mut knife: Query<(&mut Node, &mut Visibility), (With<Knife>, Without<CakeHalf>, Without<SliceGap>)>,
    mut gap: Query<&mut Node, (With<SliceGap>, Without<CakeHalf>)>,
    mut halves: Query<(&CakeHalf, &mut Node)>,
) {
    let Some(cut) = cut else {
        return;
    };

    if let Ok((mut node, mut visibility)) = knife.single_mut() {
        let offset = cut.offset();
        node.left = Val::Px(SPLIT_DISTANCE + CAKE_WIDTH / 2.0 - 6.0 + offset.x);
        node.top = Val::Px(offset.y.max(0.0).min(CAKE_HEIGHT + 30.0));
        *visibility = if cut.is_committed() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
    }

    if let Ok(mut node) = gap.single_mut() {
        let height = if cut.is_committed() {
            CAKE_HEIGHT
        } else {
            cut.slice_reveal()
        };
        node.height = Val::Px(height);
    }

    if !cut.is_committed() {
        return;
    }

    let settle = defaults.cake.settle_secs.max(0.01);
    progress.elapsed = (progress.elapsed + time.delta_secs()).min(settle);
    let t = progress.elapsed / settle;
    let eased = 1.0 - (1.0 - t) * (1.0 - t);

    for (half, mut node) in &mut halves {
        let base = if half.side < 0.0 {
            SPLIT_DISTANCE
        } else {
            SPLIT_DISTANCE + CAKE_WIDTH / 2.0
        };
        node.left = Val::Px(base + half.side * SPLIT_DISTANCE * eased);
    }
}

pub(crate) fn spawn_cake_continue(commands: &mut Commands, root: Entity) {
    commands.entity(root).with_children(|parent| {
        spawn_text(parent, "Happy cake day!", 24.0, TEXT_COLOR);
        spawn_continue_button(parent, "Continue", Stage::CakeCutting);
    });
}

pub(crate) fn clear_split_progress(mut commands: Commands) {
    commands.remove_resource::<SplitProgress>();
}

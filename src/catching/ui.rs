//! Catching domain: battle screen, HUD and projectile rendering.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::catching::engine::{CatchEngine, CatchPhase};
use crate::catching::systems::CatchAim;
use crate::core::ui::{
    ACCENT_GOLD, MUTED_TEXT, PANEL_COLOR, TEXT_COLOR, TITLE_COLOR, screen_root,
    spawn_continue_button, spawn_text,
};
use crate::core::{AssetWatchlist, CaughtCreature, Stage, load_image};

/// Creature anchor as a fraction of the window size
const CREATURE_ANCHOR: Vec2 = Vec2::new(0.5, 0.32);
const CREATURE_SIZE: f32 = 140.0;
const BALL_SIZE: f32 = 26.0;

const HEALTH_HIGH: Color = Color::srgb(0.2, 0.78, 0.35);
const HEALTH_MID: Color = Color::srgb(0.96, 0.75, 0.2);
const HEALTH_LOW: Color = Color::srgb(0.9, 0.25, 0.25);
const BALL_COLOR: Color = Color::srgb(0.92, 0.2, 0.24);

/// Marker for the catching screen root
#[derive(Component, Debug)]
pub struct CatchScreen;

/// The creature image; remembers which creature it shows
#[derive(Component, Debug, Default)]
pub struct CreatureSprite {
    pub shown_id: String,
}

#[derive(Component, Debug)]
pub struct CatchCounterText;

#[derive(Component, Debug)]
pub struct TargetNameText;

#[derive(Component, Debug)]
pub struct HealthBarFill;

#[derive(Component, Debug)]
pub struct NoticeText;

#[derive(Component, Debug)]
pub struct CaughtListText;

#[derive(Component, Debug)]
pub struct ProjectileSprite {
    pub id: u32,
}

#[derive(Component, Debug)]
pub struct AimMarker;

pub(crate) fn spawn_catch_screen(mut commands: Commands) {
    commands
        .spawn((CatchScreen, screen_root(Stage::Catching)))
        .with_children(|parent| {
            // HUD across the top
            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(16.0),
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|hud| {
                    spawn_text(hud, "Catch them for the party!", 30.0, TITLE_COLOR);
                    hud.spawn((
                        CatchCounterText,
                        Text::new(""),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    hud.spawn((
                        CaughtListText,
                        Text::new(""),
                        TextFont {
                            font_size: 15.0,
                            ..default()
                        },
                        TextColor(MUTED_TEXT),
                    ));
                });

            // Target panel with name and health
            parent
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        right: Val::Px(24.0),
                        top: Val::Px(120.0),
                        width: Val::Px(240.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(12.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        row_gap: Val::Px(6.0),
                        ..default()
                    },
                    BorderColor::all(ACCENT_GOLD),
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        TargetNameText,
                        Text::new(""),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                    panel
                        .spawn((
                            Node {
                                width: Val::Percent(100.0),
                                height: Val::Px(10.0),
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.85, 0.85, 0.88)),
                        ))
                        .with_children(|bar| {
                            bar.spawn((
                                HealthBarFill,
                                Node {
                                    width: Val::Percent(100.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                                BackgroundColor(HEALTH_HIGH),
                            ));
                        });
                    panel.spawn((
                        NoticeText,
                        Text::new(""),
                        TextFont {
                            font_size: 15.0,
                            ..default()
                        },
                        TextColor(HEALTH_LOW),
                    ));
                });

            parent.spawn((
                CreatureSprite::default(),
                ImageNode::default(),
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(CREATURE_SIZE),
                    height: Val::Px(CREATURE_SIZE),
                    ..default()
                },
            ));

            parent.spawn((
                AimMarker,
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(BALL_SIZE),
                    height: Val::Px(BALL_SIZE),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::all(BALL_COLOR),
                Visibility::Hidden,
            ));

            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(24.0),
                    ..default()
                },
                Text::new("Press, drag and release to throw"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
            ));
        });
}

fn health_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        HEALTH_HIGH
    } else if fraction > 0.2 {
        HEALTH_MID
    } else {
        HEALTH_LOW
    }
}

/// Mirror the engine state into the HUD every frame.
pub(crate) fn sync_catch_hud(
    engine: Option<Res<CatchEngine>>,
    mut counter: Query<
        &mut Text,
        (
            With<CatchCounterText>,
            Without<TargetNameText>,
            Without<NoticeText>,
            Without<CaughtListText>,
        ),
    >,
    mut name: Query<
        (&mut Text, &mut TextColor),
        (With<TargetNameText>, Without<NoticeText>, Without<CaughtListText>),
    >,
    mut notice: Query<&mut Text, (With<NoticeText>, Without<CaughtListText>)>,
    mut caught_list: Query<&mut Text, With<CaughtListText>>,
    mut health: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
) {
    let Some(engine) = engine else {
        return;
    };
    let target = engine.target();

    if let Ok(mut text) = counter.single_mut() {
        **text = format!("Caught: {}/{}", engine.caught().len(), engine.quota());
    }

    if let Ok((mut text, mut color)) = name.single_mut() {
        **text = format!("{} ({})", target.name, target.rarity.name());
        color.0 = target.rarity.color();
    }

    if let Ok(mut text) = notice.single_mut() {
        **text = match engine.phase() {
            CatchPhase::JustCaught => format!("Gotcha! {} was caught!", target.name),
            _ => engine.notice().unwrap_or_default().to_string(),
        };
    }

    if let Ok(mut text) = caught_list.single_mut() {
        let names: Vec<_> = engine.caught().iter().map(|c| c.name.as_str()).collect();
        **text = names.join("  ");
    }

    if let Ok((mut node, mut color)) = health.single_mut() {
        let fraction = target.health_fraction();
        node.width = Val::Percent(fraction * 100.0);
        color.0 = health_color(fraction);
    }
}

/// Place the creature at its anchor plus wander offset and swap its image
/// when a new target appears.
pub(crate) fn sync_creature_sprite(
    engine: Option<Res<CatchEngine>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    asset_server: Res<AssetServer>,
    mut watchlist: ResMut<AssetWatchlist>,
    mut sprite: Query<(&mut CreatureSprite, &mut ImageNode, &mut Node, &mut Visibility)>,
) {
    let Some(engine) = engine else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((mut creature, mut image, mut node, mut visibility)) = sprite.single_mut() else {
        return;
    };

    let target = engine.target();
    if creature.shown_id != target.id {
        creature.shown_id = target.id.clone();
        image.image = load_image(&asset_server, &mut watchlist, &target.image);
    }

    let anchor = Vec2::new(window.width(), window.height()) * CREATURE_ANCHOR;
    let center = anchor + engine.wander_offset();
    node.left = Val::Px(center.x - CREATURE_SIZE / 2.0);
    node.top = Val::Px(center.y - CREATURE_SIZE / 2.0);

    *visibility = if engine.phase() == CatchPhase::Complete {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
}

/// Keep one ball node per projectile in flight.
pub(crate) fn sync_projectiles(
    mut commands: Commands,
    engine: Option<Res<CatchEngine>>,
    roots: Query<Entity, With<CatchScreen>>,
    mut sprites: Query<(Entity, &ProjectileSprite, &mut Node)>,
) {
    let Some(engine) = engine else {
        return;
    };
    let Ok(root) = roots.single() else {
        return;
    };

    let mut drawn = Vec::new();
    for (entity, sprite, mut node) in &mut sprites {
        match engine.projectiles().iter().find(|p| p.id == sprite.id) {
            Some(projectile) => {
                node.left = Val::Px(projectile.position.x - BALL_SIZE / 2.0);
                node.top = Val::Px(projectile.position.y - BALL_SIZE / 2.0);
                drawn.push(sprite.id);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for projectile in engine.projectiles() {
        if drawn.contains(&projectile.id) {
            continue;
        }
        commands.entity(root).with_children(|parent| {
            parent.spawn((
                ProjectileSprite { id: projectile.id },
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(projectile.position.x - BALL_SIZE / 2.0),
                    top: Val::Px(projectile.position.y - BALL_SIZE / 2.0),
                    width: Val::Px(BALL_SIZE),
                    height: Val::Px(BALL_SIZE),
                    border: UiRect::all(Val::Px(3.0)),
                    ..default()
                },
                BorderColor::all(Color::srgb(0.15, 0.15, 0.15)),
                BackgroundColor(BALL_COLOR),
            ));
        });
    }
}

/// Show a ring at the drag origin while aiming.
pub(crate) fn sync_aim_marker(
    aim: Option<Res<CatchAim>>,
    mut marker: Query<(&mut Node, &mut Visibility), With<AimMarker>>,
) {
    let Ok((mut node, mut visibility)) = marker.single_mut() else {
        return;
    };

    match aim.and_then(|aim| aim.origin) {
        Some(origin) => {
            node.left = Val::Px(origin.x - BALL_SIZE / 2.0);
            node.top = Val::Px(origin.y - BALL_SIZE / 2.0);
            *visibility = Visibility::Inherited;
        }
        None => *visibility = Visibility::Hidden,
    }
}

pub(crate) fn spawn_completion_overlay(
    commands: &mut Commands,
    root: Entity,
    caught: &[CaughtCreature],
) {
    commands.entity(root).with_children(|parent| {
        parent
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(12.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 0.97, 0.99, 0.92)),
                ZIndex(10),
            ))
            .with_children(|overlay| {
                spawn_text(overlay, "Amazing catching!", 44.0, TITLE_COLOR);
                spawn_text(
                    overlay,
                    format!("You caught {} friends for the party", caught.len()),
                    22.0,
                    TEXT_COLOR,
                );
                for creature in caught {
                    spawn_text(overlay, creature.name.clone(), 18.0, MUTED_TEXT);
                }
                spawn_continue_button(overlay, "Continue", Stage::Catching);
            });
    });
}

//! Seek domain: briefing panel, play area, hint list and scanner beam.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::ContentRegistry;
use crate::core::ui::{
    ACCENT_GOLD, MUTED_TEXT, PANEL_COLOR, TEXT_COLOR, TITLE_COLOR, screen_root, spawn_button,
    spawn_text,
};
use crate::core::{AssetWatchlist, Stage, load_image};
use crate::seek::engine::SeekAndFind;

const TARGET_SIZE: f32 = 64.0;
const BEAM_SIZE: f32 = 120.0;
const FOUND_COLOR: Color = Color::srgb(0.2, 0.7, 0.35);
const PLAY_AREA: Color = Color::srgb(0.78, 0.9, 0.78);

#[derive(Component, Debug)]
pub struct SeekScreen;

#[derive(Component, Debug)]
pub struct BriefingPanel;

#[derive(Component, Debug)]
pub struct StartScanButton;

/// A clickable hidden target in the play area
#[derive(Component, Debug)]
pub struct HiddenTargetButton {
    pub id: String,
}

/// Entry in the hint list for one target
#[derive(Component, Debug)]
pub struct HintEntry {
    pub id: String,
    pub name: String,
    pub hint: String,
}

#[derive(Component, Debug)]
pub struct FoundCounterText;

#[derive(Component, Debug)]
pub struct ScannerBeam;

#[derive(Component, Debug)]
pub struct VictoryBanner;

pub(crate) fn spawn_seek_screen(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    asset_server: Res<AssetServer>,
    mut watchlist: ResMut<AssetWatchlist>,
) {
    let targets: Vec<_> = registry
        .hidden_targets
        .iter()
        .map(|target| {
            (
                target.clone(),
                load_image(&asset_server, &mut watchlist, &target.image),
            )
        })
        .collect();

    commands
        .spawn((SeekScreen, screen_root(Stage::SeekAndFind)))
        .with_children(|parent| {
            spawn_text(parent, "Seek and Find", 38.0, TITLE_COLOR);
            parent.spawn((
                FoundCounterText,
                Text::new(format!("Found: 0/{}", targets.len())),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(24.0),
                    ..default()
                })
                .with_children(|row| {
                    // Play area, targets placed by percentage
                    row.spawn((
                        Node {
                            width: Val::Px(720.0),
                            height: Val::Px(440.0),
                            border: UiRect::all(Val::Px(4.0)),
                            ..default()
                        },
                        BorderColor::all(ACCENT_GOLD),
                        BackgroundColor(PLAY_AREA),
                    ))
                    .with_children(|area| {
                        for (target, image) in &targets {
                            area.spawn((
                                HiddenTargetButton {
                                    id: target.id.clone(),
                                },
                                Button,
                                ImageNode::new(image.clone())
                                    .with_color(Color::srgba(1.0, 1.0, 1.0, 0.35)),
                                Node {
                                    position_type: PositionType::Absolute,
                                    left: Val::Percent(target.left_percent),
                                    top: Val::Percent(target.top_percent),
                                    width: Val::Px(TARGET_SIZE),
                                    height: Val::Px(TARGET_SIZE),
                                    border: UiRect::all(Val::Px(3.0)),
                                    ..default()
                                },
                                BorderColor::all(Color::NONE),
                            ));
                        }
                    });

                    // Hint list
                    row.spawn((
                        Node {
                            width: Val::Px(260.0),
                            flex_direction: FlexDirection::Column,
                            padding: UiRect::all(Val::Px(14.0)),
                            row_gap: Val::Px(10.0),
                            ..default()
                        },
                        BackgroundColor(PANEL_COLOR),
                    ))
                    .with_children(|list| {
                        spawn_text(list, "Hints", 22.0, TITLE_COLOR);
                        for (target, _) in &targets {
                            list.spawn((
                                HintEntry {
                                    id: target.id.clone(),
                                    name: target.name.clone(),
                                    hint: target.hint.clone(),
                                },
                                Text::new(target.hint.clone()),
                                TextFont {
                                    font_size: 15.0,
                                    ..default()
                                },
                                TextColor(TEXT_COLOR),
                            ));
                        }
                    });
                });

            parent.spawn((
                ScannerBeam,
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(BEAM_SIZE),
                    height: Val::Px(BEAM_SIZE),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::all(Color::srgba(0.3, 0.6, 1.0, 0.8)),
                BackgroundColor(Color::srgba(0.3, 0.6, 1.0, 0.12)),
                Visibility::Hidden,
                ZIndex(20),
            ));

            parent
                .spawn((
                    VictoryBanner,
                    Node {
                        position_type: PositionType::Absolute,
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(4.0)),
                        ..default()
                    },
                    BorderColor::all(ACCENT_GOLD),
                    BackgroundColor(PANEL_COLOR),
                    Visibility::Hidden,
                    ZIndex(30),
                ))
                .with_children(|banner| {
                    spawn_text(banner, "You found them all!", 36.0, TITLE_COLOR);
                });

            // Briefing panel over everything until scanning starts
            parent
                .spawn((
                    BriefingPanel,
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
                    BackgroundColor(Color::srgba(0.1, 0.12, 0.2, 0.88)),
                    ZIndex(40),
                ))
                .with_children(|panel| {
                    spawn_text(panel, "Scanner ready", 40.0, ACCENT_GOLD);
                    spawn_text(
                        panel,
                        format!(
                            "{} friends are hiding nearby. Use the hints to find them all!",
                            targets.len()
                        ),
                        20.0,
                        Color::WHITE,
                    );
                    spawn_button(panel, "Start scanning", StartScanButton);
                });
        });
}

/// Restyle targets and hints after a find.
pub(crate) fn refresh_found_targets(
    seek: &SeekAndFind,
    targets: &mut Query<(&HiddenTargetButton, &mut ImageNode, &mut BorderColor)>,
    hints: &mut Query<(&HintEntry, &mut Text, &mut TextColor), Without<FoundCounterText>>,
    counter: &mut Query<&mut Text, With<FoundCounterText>>,
) {
    for (target, mut image, mut border) in targets.iter_mut() {
        if seek.is_found(&target.id) {
            image.color = Color::WHITE;
            *border = BorderColor::all(FOUND_COLOR);
        }
    }

    for (entry, mut text, mut color) in hints.iter_mut() {
        if seek.is_found(&entry.id) {
            **text = format!("Found {}: {}", entry.name, entry.hint);
            color.0 = MUTED_TEXT;
        }
    }

    if let Ok(mut text) = counter.single_mut() {
        **text = format!("Found: {}/{}", seek.found_count(), seek.total());
    }
}

/// The beam follows the cursor while the hunt is on.
pub(crate) fn move_scanner_beam(
    seek: Option<Res<SeekAndFind>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut beam: Query<(&mut Node, &mut Visibility), With<ScannerBeam>>,
) {
    let Ok((mut node, mut visibility)) = beam.single_mut() else {
        return;
    };
    let active = seek.is_some_and(|seek| seek.is_scanning() && !seek.is_locked());
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());

    match (active, cursor) {
        (true, Some(cursor)) => {
            node.left = Val::Px(cursor.x - BEAM_SIZE / 2.0);
            node.top = Val::Px(cursor.y - BEAM_SIZE / 2.0);
            *visibility = Visibility::Inherited;
        }
        _ => *visibility = Visibility::Hidden,
    }
}

//! Core domain: the closing birthday message. Terminal stage.

use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::assets::{AssetWatchlist, load_image};
use crate::core::resources::Session;
use crate::core::state::Stage;
use crate::core::ui::{ACCENT_GOLD, MUTED_TEXT, PANEL_COLOR, TEXT_COLOR, TITLE_COLOR, screen_root, spawn_text};

pub(crate) fn spawn_final_message(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    session: Res<Session>,
    asset_server: Res<AssetServer>,
    mut watchlist: ResMut<AssetWatchlist>,
) {
    let greeting = &registry.greeting;

    let featured: Vec<_> = greeting
        .featured_target_ids
        .iter()
        .filter_map(|id| registry.hidden_target(id))
        .map(|target| {
            (
                target.name.clone(),
                load_image(&asset_server, &mut watchlist, &target.image),
            )
        })
        .collect();

    commands
        .spawn(screen_root(Stage::Final))
        .with_children(|parent| {
            spawn_text(parent, greeting.headline.clone(), 52.0, TITLE_COLOR);
            spawn_text(parent, format!("Dear {},", greeting.recipient), 26.0, TEXT_COLOR);

            parent
                .spawn((
                    Node {
                        max_width: Val::Px(640.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(4.0)),
                        row_gap: Val::Px(10.0),
                        ..default()
                    },
                    BorderColor::all(ACCENT_GOLD),
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|card| {
                    for line in &greeting.lines {
                        card.spawn((
                            Text::new(line.clone()),
                            TextFont {
                                font_size: 20.0,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                            TextLayout::new_with_justify(Justify::Center),
                        ));
                    }
                });

            if let Some(companion) = session.companion() {
                spawn_text(
                    parent,
                    format!("With {} by your side, every day is an adventure.", companion.name),
                    18.0,
                    companion.accent,
                );
            }

            if !session.caught().is_empty() {
                let names: Vec<_> = session.caught().iter().map(|c| c.name.as_str()).collect();
                spawn_text(
                    parent,
                    format!("Friends caught today: {}", names.join(", ")),
                    16.0,
                    MUTED_TEXT,
                );
            }

            // Featured hidden targets from the seek-and-find
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(18.0),
                    margin: UiRect::top(Val::Px(12.0)),
                    ..default()
                })
                .with_children(|row| {
                    for (name, image) in featured {
                        row.spawn(Node {
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::Center,
                            ..default()
                        })
                        .with_children(|cell| {
                            cell.spawn((
                                ImageNode::new(image),
                                Node {
                                    width: Val::Px(72.0),
                                    height: Val::Px(72.0),
                                    ..default()
                                },
                            ));
                            spawn_text(cell, name, 14.0, MUTED_TEXT);
                        });
                    }
                });
        });

    info!(
        "Final message shown ({} creatures caught)",
        session.caught().len()
    );
}

//! Gallery domain: trading cards of the birthday person in creature form.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::MusicCommand;
use crate::content::{ContentRegistry, GalleryCardDef};
use crate::core::ui::{MUTED_TEXT, PANEL_COLOR, TEXT_COLOR, TITLE_COLOR, screen_root, spawn_continue_button, spawn_text};
use crate::core::{AssetWatchlist, Stage, load_image};

pub struct GalleryPlugin;

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Stage::Gallery), spawn_gallery)
            .add_systems(OnExit(Stage::Gallery), stop_music_after_gallery);
    }
}

fn spawn_gallery(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    asset_server: Res<AssetServer>,
    mut watchlist: ResMut<AssetWatchlist>,
) {
    let cards: Vec<_> = registry
        .gallery_cards
        .iter()
        .map(|card| {
            (
                card,
                load_image(&asset_server, &mut watchlist, &card.image),
            )
        })
        .collect();

    commands
        .spawn(screen_root(Stage::Gallery))
        .with_children(|parent| {
            spawn_text(parent, registry.greeting.gallery_title.clone(), 40.0, TITLE_COLOR);

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(18.0),
                    row_gap: Val::Px(18.0),
                    max_width: Val::Px(1100.0),
                    ..default()
                })
                .with_children(|row| {
                    for (card, image) in cards {
                        spawn_gallery_card(row, card, image);
                    }
                });

            spawn_continue_button(parent, "Continue", Stage::Gallery);
        });
}

fn spawn_gallery_card(parent: &mut ChildSpawnerCommands, card: &GalleryCardDef, image: Handle<Image>) {
    let (r, g, b) = card.accent;
    let accent = Color::srgb_u8(r, g, b);

    parent
        .spawn((
            Node {
                width: Val::Px(230.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                border: UiRect::all(Val::Px(6.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
            BorderColor::all(accent),
            BackgroundColor(PANEL_COLOR),
        ))
        .with_children(|card_node| {
            // Name and HP header
            card_node
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                })
                .with_children(|header| {
                    spawn_text(header, card.name.clone(), 20.0, TEXT_COLOR);
                    spawn_text(header, format!("HP {}", card.hp), 16.0, TITLE_COLOR);
                });

            card_node.spawn((
                ImageNode::new(image),
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(150.0),
                    ..default()
                },
                BackgroundColor(accent.with_alpha(0.3)),
            ));

            spawn_text(card_node, card.category.clone(), 13.0, MUTED_TEXT);

            for ability in &card.abilities {
                card_node
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    })
                    .with_children(|line| {
                        spawn_text(line, ability.name.clone(), 15.0, TEXT_COLOR);
                        spawn_text(line, ability.power.clone(), 15.0, TEXT_COLOR);
                    });
            }

            card_node.spawn((
                Text::new(card.description.clone()),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
            ));
        });
}

fn stop_music_after_gallery(mut music: MessageWriter<MusicCommand>) {
    info!("Leaving the gallery, music off");
    music.write(MusicCommand::Stop);
}

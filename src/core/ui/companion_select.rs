//! Core domain: companion selection UI and input handling.

use bevy::prelude::*;

use crate::content::{CompanionDef, ContentRegistry};
use crate::core::assets::{AssetWatchlist, load_image};
use crate::core::selection::CompanionSelection;
use crate::core::state::Stage;
use crate::core::ui::{MUTED_TEXT, PANEL_COLOR, TEXT_COLOR, TITLE_COLOR, screen_root, spawn_text};

/// Clickable card for one companion
#[derive(Component, Debug)]
pub struct CompanionCard {
    pub index: usize,
    pub accent: Color,
}

/// Container the confirmation card is attached to
#[derive(Component, Debug)]
pub struct ConfirmationSlot;

const CARD_COLOR: Color = PANEL_COLOR;
const CARD_HOVER: Color = Color::srgb(1.0, 0.96, 0.98);
const CARD_FADED: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);

pub(crate) fn spawn_companion_select_ui(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    asset_server: Res<AssetServer>,
    mut watchlist: ResMut<AssetWatchlist>,
) {
    commands
        .spawn(screen_root(Stage::Selection))
        .with_children(|parent| {
            spawn_text(parent, "Choose Your Companion", 44.0, TITLE_COLOR);
            spawn_text(
                parent,
                "Every trainer needs a partner for the journey",
                20.0,
                MUTED_TEXT,
            );

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Stretch,
                    column_gap: Val::Px(24.0),
                    margin: UiRect::vertical(Val::Px(24.0)),
                    ..default()
                })
                .with_children(|cards| {
                    for (index, companion) in registry.companions.iter().enumerate() {
                        let image = load_image(&asset_server, &mut watchlist, &companion.image);
                        spawn_companion_card(cards, index, companion, image);
                    }
                });

            parent.spawn((ConfirmationSlot, Node::default()));

            spawn_text(
                parent,
                format!("Press 1-{} or click to choose", registry.companions.len()),
                16.0,
                MUTED_TEXT,
            );
        });
}

fn spawn_companion_card(
    parent: &mut ChildSpawnerCommands,
    index: usize,
    companion: &CompanionDef,
    image: Handle<Image>,
) {
    let (r, g, b) = companion.accent;
    let accent = Color::srgb_u8(r, g, b);
    let stats = &companion.stats;

    parent
        .spawn((
            CompanionCard { index, accent },
            Button,
            Node {
                width: Val::Px(200.0),
                min_height: Val::Px(280.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(16.0)),
                border: UiRect::all(Val::Px(4.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
            BorderColor::all(accent.with_alpha(0.6)),
            BackgroundColor(CARD_COLOR),
        ))
        .with_children(|card| {
            spawn_text(card, format!("[{}]", index + 1), 14.0, MUTED_TEXT);

            card.spawn((
                ImageNode::new(image),
                Node {
                    width: Val::Px(96.0),
                    height: Val::Px(96.0),
                    ..default()
                },
                BackgroundColor(accent.with_alpha(0.25)),
            ));

            spawn_text(card, companion.name.clone(), 22.0, TEXT_COLOR);
            spawn_text(card, companion.category.clone(), 14.0, accent);
            card.spawn((
                Text::new(companion.description.clone()),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(MUTED_TEXT),
                TextLayout::new_with_justify(Justify::Center),
            ));
            spawn_text(
                card,
                format!(
                    "HP {}  ATK {}  DEF {}",
                    stats.hp, stats.attack, stats.defense
                ),
                13.0,
                TEXT_COLOR,
            );
        });
}

fn pressed_digit(keyboard: &ButtonInput<KeyCode>) -> Option<usize> {
    const KEYS: [(KeyCode, KeyCode); 9] = [
        (KeyCode::Digit1, KeyCode::Numpad1),
        (KeyCode::Digit2, KeyCode::Numpad2),
        (KeyCode::Digit3, KeyCode::Numpad3),
        (KeyCode::Digit4, KeyCode::Numpad4),
        (KeyCode::Digit5, KeyCode::Numpad5),
        (KeyCode::Digit6, KeyCode::Numpad6),
        (KeyCode::Digit7, KeyCode::Numpad7),
        (KeyCode::Digit8, KeyCode::Numpad8),
        (KeyCode::Digit9, KeyCode::Numpad9),
    ];

    KEYS.iter()
        .position(|(digit, numpad)| keyboard.just_pressed(*digit) || keyboard.just_pressed(*numpad))
}

pub(crate) fn handle_companion_select_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    interactions: Query<(&Interaction, &CompanionCard), Changed<Interaction>>,
    registry: Res<ContentRegistry>,
    selection: Option<ResMut<CompanionSelection>>,
) {
    let Some(mut selection) = selection else {
        return;
    };

    let clicked = interactions
        .iter()
        .find(|(interaction, _)| **interaction == Interaction::Pressed)
        .map(|(_, card)| card.index);

    let Some(index) = clicked.or_else(|| pressed_digit(&keyboard)) else {
        return;
    };

    if selection.choose(index) {
        if let Some(companion) = registry.companions.get(index) {
            info!("Companion chosen: {}", companion.name);
        }
    } else {
        debug!("Ignoring companion choice {}", index);
    }
}

/// Highlight the hovered card until a choice is made, then fade the rest.
pub(crate) fn update_companion_cards(
    selection: Option<Res<CompanionSelection>>,
    mut cards: Query<(
        &CompanionCard,
        &Interaction,
        &mut BackgroundColor,
        &mut BorderColor,
    )>,
) {
    let chosen = selection.and_then(|s| s.chosen());

    for (card, interaction, mut bg, mut border) in &mut cards {
        let (background, outline) = match (chosen, interaction) {
            (Some(index), _) if index == card.index => (CARD_HOVER, card.accent),
            (Some(_), _) => (CARD_FADED, card.accent.with_alpha(0.2)),
            (None, Interaction::Hovered | Interaction::Pressed) => (CARD_HOVER, card.accent),
            (None, Interaction::None) => (CARD_COLOR, card.accent.with_alpha(0.6)),
        };
        *bg = BackgroundColor(background);
        *border = BorderColor::all(outline);
    }
}

/// Attach the "ready for adventure" card under the companion cards.
pub(crate) fn spawn_confirmation_card(
    commands: &mut Commands,
    slot: Entity,
    companion: &CompanionDef,
) {
    let (r, g, b) = companion.accent;
    let accent = Color::srgb_u8(r, g, b);

    commands.entity(slot).with_children(|parent| {
        parent
            .spawn((
                Node {
                    padding: UiRect::axes(Val::Px(28.0), Val::Px(14.0)),
                    border: UiRect::all(Val::Px(3.0)),
                    ..default()
                },
                BorderColor::all(accent),
                BackgroundColor(accent.with_alpha(0.15)),
            ))
            .with_children(|card| {
                spawn_text(
                    card,
                    format!("{} is ready for adventure!", companion.name),
                    26.0,
                    TEXT_COLOR,
                );
            });
    });
}

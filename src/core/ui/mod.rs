//! Core domain: shared UI building blocks and the screens owned by core.

pub mod companion_select;
pub mod final_message;
pub mod intro;

use bevy::prelude::*;

use crate::core::state::Stage;

pub const SCREEN_BACKGROUND: Color = Color::srgb(0.99, 0.95, 0.97);
pub const PANEL_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TITLE_COLOR: Color = Color::srgb(0.86, 0.24, 0.46);
pub const TEXT_COLOR: Color = Color::srgb(0.2, 0.16, 0.24);
pub const MUTED_TEXT: Color = Color::srgb(0.48, 0.44, 0.52);
pub const ACCENT_GOLD: Color = Color::srgb(0.98, 0.8, 0.22);

const NORMAL_BUTTON: Color = Color::srgb(0.93, 0.33, 0.55);
const HOVERED_BUTTON: Color = Color::srgb(0.97, 0.45, 0.65);
const PRESSED_BUTTON: Color = Color::srgb(0.78, 0.22, 0.44);

/// Button styled by [`button_visuals`]
#[derive(Component, Debug)]
pub struct StyledButton;

/// Completes `stage` when pressed
#[derive(Component, Debug, Clone, Copy)]
pub struct ContinueButton {
    pub stage: Stage,
}

/// Full-screen column that every stage screen is built on.
pub fn screen_root(stage: Stage) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Val::Px(16.0),
            ..default()
        },
        BackgroundColor(SCREEN_BACKGROUND),
        DespawnOnExit(stage),
    )
}

pub fn spawn_text(parent: &mut ChildSpawnerCommands, text: impl Into<String>, size: f32, color: Color) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    ));
}

/// Spawn a styled button carrying `marker`.
pub fn spawn_button(parent: &mut ChildSpawnerCommands, label: &str, marker: impl Bundle) {
    parent
        .spawn((
            marker,
            StyledButton,
            Button,
            Node {
                min_width: Val::Px(220.0),
                height: Val::Px(52.0),
                padding: UiRect::horizontal(Val::Px(24.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(3.0)),
                margin: UiRect::top(Val::Px(12.0)),
                ..default()
            },
            BorderColor::all(ACCENT_GOLD),
            BackgroundColor(NORMAL_BUTTON),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn spawn_continue_button(parent: &mut ChildSpawnerCommands, label: &str, stage: Stage) {
    spawn_button(parent, label, ContinueButton { stage });
}

pub(crate) fn button_visuals(
    mut query: Query<
        (&Interaction, &mut BackgroundColor, &mut BorderColor),
        (Changed<Interaction>, With<StyledButton>),
    >,
) {
    for (interaction, mut bg, mut border) in &mut query {
        match *interaction {
            Interaction::Pressed => {
                *bg = PRESSED_BUTTON.into();
                *border = BorderColor::all(Color::WHITE);
            }
            Interaction::Hovered => {
                *bg = HOVERED_BUTTON.into();
                *border = BorderColor::all(Color::WHITE);
            }
            Interaction::None => {
                *bg = NORMAL_BUTTON.into();
                *border = BorderColor::all(ACCENT_GOLD);
            }
        }
    }
}

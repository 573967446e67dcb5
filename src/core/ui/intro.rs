//! Core domain: intro title card.

use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::state::Stage;
use crate::core::ui::{
    ACCENT_GOLD, MUTED_TEXT, PANEL_COLOR, TEXT_COLOR, TITLE_COLOR, screen_root,
    spawn_continue_button, spawn_text,
};

pub(crate) fn spawn_intro_screen(mut commands: Commands, registry: Res<ContentRegistry>) {
    let greeting = &registry.greeting;

    commands
        .spawn(screen_root(Stage::Intro))
        .with_children(|parent| {
            // Trading card frame
            parent
                .spawn((
                    Node {
                        width: Val::Px(420.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(28.0)),
                        border: UiRect::all(Val::Px(8.0)),
                        row_gap: Val::Px(12.0),
                        ..default()
                    },
                    BorderColor::all(ACCENT_GOLD),
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|card| {
                    spawn_text(card, "BIRTHDAY EDITION", 14.0, MUTED_TEXT);
                    spawn_text(card, greeting.intro_title.clone(), 44.0, TITLE_COLOR);
                    spawn_text(card, greeting.intro_tagline.clone(), 20.0, TEXT_COLOR);
                });

            spawn_continue_button(parent, &greeting.start_label, Stage::Intro);
        });

    debug!("Intro screen shown for {}", greeting.recipient);
}

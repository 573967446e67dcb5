//! Audio domain: looping background music and one-shot sound effects.

use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::core::ui::{StyledButton, spawn_text};
use crate::core::{AssetWatchlist, CompanionChosenEvent};

#[cfg(test)]
mod tests;

/// Background music control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    Start,
    Toggle,
    Stop,
}

impl Message for MusicCommand {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Throw,
    Knife,
    Celebration,
}

/// Play a sound effect once
#[derive(Debug, Clone, Copy)]
pub struct PlaySfx(pub Sfx);

impl Message for PlaySfx {}

#[derive(Resource, Debug)]
struct AudioHandles {
    music: Handle<AudioSource>,
    throw: Handle<AudioSource>,
    knife: Handle<AudioSource>,
    celebration: Handle<AudioSource>,
}

impl AudioHandles {
    fn effect(&self, sfx: Sfx) -> Handle<AudioSource> {
        match sfx {
            Sfx::Throw => self.throw.clone(),
            Sfx::Knife => self.knife.clone(),
            Sfx::Celebration => self.celebration.clone(),
        }
    }
}

/// Where the background music is in its lifecycle
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MusicState {
    #[default]
    Idle,
    Playing,
    Paused,
    Stopped,
}

impl MusicState {
    /// State after applying `command`. Stopped music never restarts.
    pub fn apply(self, command: MusicCommand) -> MusicState {
        match (self, command) {
            (MusicState::Idle, MusicCommand::Start) => MusicState::Playing,
            (MusicState::Playing, MusicCommand::Toggle) => MusicState::Paused,
            (MusicState::Paused, MusicCommand::Toggle | MusicCommand::Start) => MusicState::Playing,
            (MusicState::Stopped, _) => MusicState::Stopped,
            (_, MusicCommand::Stop) => MusicState::Stopped,
            (state, _) => state,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MusicState::Playing => "Music: On",
            MusicState::Paused => "Music: Off",
            MusicState::Idle | MusicState::Stopped => "Music: -",
        }
    }
}

#[derive(Component, Debug)]
struct BackgroundMusic;

#[derive(Component, Debug)]
struct MusicToggleButton;

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MusicState>()
            .add_message::<MusicCommand>()
            .add_message::<PlaySfx>()
            .add_systems(Startup, (load_audio, spawn_music_toggle))
            .add_systems(
                Update,
                (
                    start_music_on_companion,
                    handle_music_toggle,
                    apply_music_commands,
                    play_sound_effects,
                    update_music_label,
                )
                    .chain(),
            );
    }
}

fn load_audio(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    defaults: Res<GameplayDefaults>,
    mut watchlist: ResMut<AssetWatchlist>,
) {
    let audio = &defaults.audio;
    let mut load = |path: &str| -> Handle<AudioSource> {
        let handle: Handle<AudioSource> = asset_server.load(path.to_string());
        watchlist.watch(path, handle.clone().untyped());
        handle
    };

    commands.insert_resource(AudioHandles {
        music: load(&audio.music_path),
        throw: load(&audio.throw_path),
        knife: load(&audio.knife_path),
        celebration: load(&audio.celebration_path),
    });
}

fn spawn_music_toggle(mut commands: Commands) {
    commands
        .spawn((
            MusicToggleButton,
            StyledButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(Color::WHITE),
            BackgroundColor(Color::srgb(0.93, 0.33, 0.55)),
            GlobalZIndex(60),
        ))
        .with_children(|button| {
            spawn_text(button, MusicState::Idle.label(), 14.0, Color::WHITE);
        });
}

/// The first committed choice is the moment music may start.
fn start_music_on_companion(
    mut events: MessageReader<CompanionChosenEvent>,
    mut music: MessageWriter<MusicCommand>,
) {
    for _ in events.read() {
        music.write(MusicCommand::Start);
    }
}

fn handle_music_toggle(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<MusicToggleButton>)>,
    mut music: MessageWriter<MusicCommand>,
) {
    let clicked = buttons.iter().any(|i| *i == Interaction::Pressed);
    if clicked || keyboard.just_pressed(KeyCode::KeyM) {
        music.write(MusicCommand::Toggle);
    }
}

fn apply_music_commands(
    mut commands: Commands,
    mut events: MessageReader<MusicCommand>,
    mut state: ResMut<MusicState>,
    handles: Option<Res<AudioHandles>>,
    defaults: Res<GameplayDefaults>,
    players: Query<(Entity, Option<&AudioSink>), With<BackgroundMusic>>,
) {
    for command in events.read() {
        let previous = *state;
        let next = previous.apply(*command);
        if next == previous {
            continue;
        }

        match next {
            MusicState::Playing if previous == MusicState::Idle => {
                let Some(handles) = handles.as_ref() else {
                    warn!("Audio handles missing, music not started");
                    continue;
                };
                commands.spawn((
                    BackgroundMusic,
                    AudioPlayer::new(handles.music.clone()),
                    PlaybackSettings::LOOP
                        .with_volume(Volume::Linear(defaults.audio.music_volume)),
                ));
            }
            MusicState::Playing => {
                for sink in players.iter().filter_map(|(_, sink)| sink) {
                    sink.play();
                }
            }
            MusicState::Paused => {
                for sink in players.iter().filter_map(|(_, sink)| sink) {
                    sink.pause();
                }
            }
            MusicState::Stopped => {
                for (entity, _) in &players {
                    commands.entity(entity).despawn();
                }
            }
            MusicState::Idle => {}
        }

        info!("Music {:?} -> {:?}", previous, next);
        *state = next;
    }
}

fn play_sound_effects(
    mut commands: Commands,
    mut events: MessageReader<PlaySfx>,
    handles: Option<Res<AudioHandles>>,
    defaults: Res<GameplayDefaults>,
) {
    let Some(handles) = handles else {
        events.clear();
        return;
    };

    for PlaySfx(sfx) in events.read() {
        debug!("Playing {:?}", sfx);
        commands.spawn((
            AudioPlayer::new(handles.effect(*sfx)),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(defaults.audio.effects_volume)),
        ));
    }
}

fn update_music_label(
    state: Res<MusicState>,
    buttons: Query<&Children, With<MusicToggleButton>>,
    mut texts: Query<&mut Text>,
) {
    if !state.is_changed() {
        return;
    }
    for children in &buttons {
        for child in children.iter() {
            if let Ok(mut text) = texts.get_mut(child) {
                **text = state.label().to_string();
            }
        }
    }
}

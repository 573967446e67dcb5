mod audio;
mod cake;
mod catching;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod gallery;
mod seek;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Birthday Quest".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        audio::AudioPlugin,
        effects::EffectsPlugin,
        catching::CatchingPlugin,
        cake::CakePlugin,
        gallery::GalleryPlugin,
        seek::SeekPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}

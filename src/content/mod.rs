//! Content domain: data-driven companions, creatures, hidden targets, gallery
//! cards, greeting text and gameplay tuning.

mod data;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use data::*;
pub use loader::{ContentLoadError, builtin_content, load_all_content};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content, validate_defaults};

use bevy::prelude::*;
use std::path::Path;

/// Directory the data files are read from, relative to the working directory.
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let (registry, defaults) = load_content(Path::new(CONTENT_DIR));

        for error in validate_content(&registry)
            .iter()
            .chain(validate_defaults(&defaults).iter())
        {
            warn!("Content validation: {}", error);
        }
        info!("{}", registry.summary());

        app.insert_resource(registry)
            .insert_resource(defaults)
            .register_type::<CompanionDef>()
            .register_type::<CompanionStatsDef>()
            .register_type::<CreatureDef>()
            .register_type::<Rarity>()
            .register_type::<HiddenTargetDef>()
            .register_type::<GalleryCardDef>()
            .register_type::<AbilityDef>()
            .register_type::<GreetingDef>();
    }
}

/// Load content from disk, falling back to the embedded copies when any
/// file is missing or malformed.
fn load_content(base_path: &Path) -> (ContentRegistry, GameplayDefaults) {
    match load_all_content(base_path) {
        Ok(content) => return content,
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            warn!(
                "Falling back to built-in content after {} load error(s)",
                errors.len()
            );
        }
    }

    match builtin_content() {
        Ok(content) => content,
        Err(errors) => {
            for error in &errors {
                error!("Built-in content: {}", error);
            }
            (ContentRegistry::default(), GameplayDefaults::default())
        }
    }
}

//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

pub const COMPANIONS_FILE: &str = "companions.ron";
pub const CREATURES_FILE: &str = "creatures.ron";
pub const HIDDEN_TARGETS_FILE: &str = "hidden_targets.ron";
pub const GALLERY_CARDS_FILE: &str = "gallery_cards.ron";
pub const GREETING_FILE: &str = "greeting.ron";
pub const GAMEPLAY_DEFAULTS_FILE: &str = "gameplay_defaults.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Copies of the data files compiled into the binary.
fn embedded_file(file: &str) -> Option<&'static str> {
    match file {
        COMPANIONS_FILE => Some(include_str!("../../assets/data/companions.ron")),
        CREATURES_FILE => Some(include_str!("../../assets/data/creatures.ron")),
        HIDDEN_TARGETS_FILE => Some(include_str!("../../assets/data/hidden_targets.ron")),
        GALLERY_CARDS_FILE => Some(include_str!("../../assets/data/gallery_cards.ron")),
        GREETING_FILE => Some(include_str!("../../assets/data/greeting.ron")),
        GAMEPLAY_DEFAULTS_FILE => Some(include_str!("../../assets/data/gameplay_defaults.ron")),
        _ => None,
    }
}

/// Load all content from `base_path` (normally assets/data).
/// Returns errors for any files that fail to load.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    load_with(|file| read_file(&base_path.join(file)))
}

/// Load the copies of the data files embedded at build time.
pub fn builtin_content() -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    load_with(|file| {
        embedded_file(file)
            .map(str::to_string)
            .ok_or_else(|| ContentLoadError {
                file: file.to_string(),
                message: "not embedded".to_string(),
            })
    })
}

fn load_with<F>(mut read: F) -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>>
where
    F: FnMut(&str) -> Result<String, ContentLoadError>,
{
    let mut errors = Vec::new();

    // Helper macro to reduce boilerplate
    macro_rules! load_list {
        ($file:expr, $type:ty) => {
            match read($file).and_then(|contents| parse_data_file::<$type>($file, &contents)) {
                Ok(items) => items,
                Err(e) => {
                    errors.push(e);
                    Vec::new()
                }
            }
        };
    }

    macro_rules! load_single {
        ($file:expr, $type:ty) => {
            match read($file).and_then(|contents| parse_single::<$type>($file, &contents)) {
                Ok(item) => Some(item),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        };
    }

    let companions = load_list!(COMPANIONS_FILE, CompanionDef);
    let creatures = load_list!(CREATURES_FILE, CreatureDef);
    let hidden_targets = load_list!(HIDDEN_TARGETS_FILE, HiddenTargetDef);
    let gallery_cards = load_list!(GALLERY_CARDS_FILE, GalleryCardDef);
    let greeting = load_single!(GREETING_FILE, GreetingDef);
    let gameplay_defaults = load_single!(GAMEPLAY_DEFAULTS_FILE, GameplayDefaults);

    let (Some(greeting), Some(gameplay_defaults)) = (greeting, gameplay_defaults) else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok((
        ContentRegistry {
            companions,
            creatures,
            hidden_targets,
            gallery_cards,
            greeting,
        },
        gameplay_defaults,
    ))
}

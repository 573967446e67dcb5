//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Companions (companions.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct CompanionStatsDef {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CompanionDef {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub stats: CompanionStatsDef,
    pub accent: (u8, u8, u8),
}

// ============================================================================
// Creatures (creatures.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect, Default)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn name(&self) -> &str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Tint used for the creature name and glow
    pub fn color(&self) -> Color {
        match self {
            Rarity::Common => Color::srgb(0.13, 0.77, 0.37),
            Rarity::Rare => Color::srgb(0.23, 0.51, 0.96),
            Rarity::Legendary => Color::srgb(0.66, 0.33, 0.97),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CreatureDef {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub max_health: u32,
    pub capture_probability: f32,
    pub rarity: Rarity,
}

// ============================================================================
// Hidden targets (hidden_targets.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct HiddenTargetDef {
    pub id: String,
    pub name: String,
    pub hint: String,
    pub image: String,
    /// Horizontal position as a percentage of the play area
    pub left_percent: f32,
    /// Vertical position as a percentage of the play area
    pub top_percent: f32,
}

// ============================================================================
// Gallery cards (gallery_cards.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct AbilityDef {
    pub name: String,
    pub power: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct GalleryCardDef {
    pub id: String,
    pub name: String,
    pub category: String,
    pub hp: u32,
    pub image: String,
    pub description: String,
    pub abilities: Vec<AbilityDef>,
    pub accent: (u8, u8, u8),
}

// ============================================================================
// Greeting text (greeting.ron)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize, Reflect)]
pub struct GreetingDef {
    pub recipient: String,
    pub intro_title: String,
    pub intro_tagline: String,
    pub start_label: String,
    pub gallery_title: String,
    pub headline: String,
    pub lines: Vec<String>,
    /// Hidden targets shown again next to the final message
    pub featured_target_ids: Vec<String>,
}

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub selection: SelectionTuning,
    pub catching: CatchTuning,
    pub cake: CakeTuning,
    pub seek: SeekTuning,
    pub audio: AudioTuning,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionTuning {
    /// Delay between the click and the confirmation card
    pub confirmation_secs: f32,
    /// Delay between the click and committing the choice
    pub commit_secs: f32,
}

impl Default for SelectionTuning {
    fn default() -> Self {
        Self {
            confirmation_secs: 0.5,
            commit_secs: 3.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatchTuning {
    /// Creatures to catch before the round completes
    pub catch_quota: usize,
    /// Health removed from a creature when it breaks free
    pub escape_damage: u32,
    /// Projectile travel per animation tick, in pixels
    pub projectile_speed: f32,
    /// Remaining distance below which a projectile counts as a hit
    pub hit_radius: f32,
    pub celebration_secs: f32,
    pub next_target_secs: f32,
    pub escaped_notice_secs: f32,
    pub wander_interval_secs: f32,
    pub wander_step: (f32, f32),
    pub wander_limit: (f32, f32),
}

impl Default for CatchTuning {
    fn default() -> Self {
        Self {
            catch_quota: 3,
            escape_damage: 20,
            projectile_speed: 12.0,
            hit_radius: 30.0,
            celebration_secs: 2.0,
            next_target_secs: 2.0,
            escaped_notice_secs: 1.5,
            wander_interval_secs: 3.0,
            wander_step: (15.0, 7.5),
            wander_limit: (50.0, 20.0),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CakeTuning {
    /// Downward drag at which the knife touches the cake
    pub contact_threshold: f32,
    pub max_slice_reveal: f32,
    /// Downward drag beyond which a fast enough stroke cuts
    pub commit_threshold: f32,
    /// Minimum downward velocity in pixels per millisecond
    pub min_velocity: f32,
    pub settle_secs: f32,
    pub continue_secs: f32,
}

impl Default for CakeTuning {
    fn default() -> Self {
        Self {
            contact_threshold: 80.0,
            max_slice_reveal: 120.0,
            commit_threshold: 180.0,
            min_velocity: 0.5,
            settle_secs: 1.5,
            continue_secs: 3.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SeekTuning {
    pub confetti_delay_secs: f32,
    pub confetti_secs: f32,
    pub fade_secs: f32,
}

impl Default for SeekTuning {
    fn default() -> Self {
        Self {
            confetti_delay_secs: 0.5,
            confetti_secs: 2.0,
            fade_secs: 0.2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioTuning {
    pub music_path: String,
    pub music_volume: f32,
    pub effects_volume: f32,
    pub throw_path: String,
    pub knife_path: String,
    pub celebration_path: String,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self {
            music_path: "audio/theme.ogg".to_string(),
            music_volume: 0.5,
            effects_volume: 0.6,
            throw_path: "audio/throw.ogg".to_string(),
            knife_path: "audio/knife.ogg".to_string(),
            celebration_path: "audio/celebration.ogg".to_string(),
        }
    }
}

//! Validation for ranges, uniqueness and cross-references between content
//! definitions.

use std::collections::HashSet;

use super::data::*;
use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $field:expr, $($problem:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: format!($($problem)+),
            });
        }
    };
}

fn check_unique_ids<'a>(
    errors: &mut Vec<ValidationError>,
    source_type: &'static str,
    ids: impl Iterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        check!(errors, seen.insert(id), source_type, id, "id", "duplicate id");
    }
}

fn check_percent(errors: &mut Vec<ValidationError>, target: &HiddenTargetDef) {
    check!(
        errors,
        (0.0..=100.0).contains(&target.left_percent),
        "HiddenTarget",
        target.id,
        "left_percent",
        "{} is outside 0-100",
        target.left_percent
    );
    check!(
        errors,
        (0.0..=100.0).contains(&target.top_percent),
        "HiddenTarget",
        target.id,
        "top_percent",
        "{} is outside 0-100",
        target.top_percent
    );
}

/// Validate all content in the registry.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        !registry.companions.is_empty(),
        "Registry",
        "companions",
        "companions",
        "no companions to choose from"
    );
    check!(
        errors,
        !registry.creatures.is_empty(),
        "Registry",
        "creatures",
        "creatures",
        "creature pool is empty"
    );

    check_unique_ids(
        &mut errors,
        "Companion",
        registry.companions.iter().map(|c| c.id.as_str()),
    );
    check_unique_ids(
        &mut errors,
        "Creature",
        registry.creatures.iter().map(|c| c.id.as_str()),
    );
    check_unique_ids(
        &mut errors,
        "HiddenTarget",
        registry.hidden_targets.iter().map(|t| t.id.as_str()),
    );
    check_unique_ids(
        &mut errors,
        "GalleryCard",
        registry.gallery_cards.iter().map(|c| c.id.as_str()),
    );

    // Validate creatures
    for creature in &registry.creatures {
        check!(
            errors,
            (0.0..=1.0).contains(&creature.capture_probability),
            "Creature",
            creature.id,
            "capture_probability",
            "{} is outside 0-1",
            creature.capture_probability
        );
        check!(
            errors,
            creature.max_health > 0,
            "Creature",
            creature.id,
            "max_health",
            "must be positive"
        );
    }

    // Validate hidden targets
    for target in &registry.hidden_targets {
        check_percent(&mut errors, target);
    }

    // Validate greeting references
    for target_id in &registry.greeting.featured_target_ids {
        check!(
            errors,
            registry.hidden_target(target_id).is_some(),
            "Greeting",
            registry.greeting.recipient,
            "featured_target_ids",
            "references missing HiddenTarget '{}'",
            target_id
        );
    }

    errors
}

/// Validate the tuning values that the mini-games rely on.
pub fn validate_defaults(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let catching = &defaults.catching;
    check!(
        errors,
        catching.catch_quota > 0,
        "GameplayDefaults",
        "catching",
        "catch_quota",
        "must be positive"
    );
    check!(
        errors,
        catching.projectile_speed > 0.0,
        "GameplayDefaults",
        "catching",
        "projectile_speed",
        "must be positive"
    );

    let cake = &defaults.cake;
    check!(
        errors,
        cake.commit_threshold > cake.contact_threshold,
        "GameplayDefaults",
        "cake",
        "commit_threshold",
        "{} must exceed contact_threshold {}",
        cake.commit_threshold,
        cake.contact_threshold
    );

    errors
}

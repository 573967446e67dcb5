//! Content domain: tests for parsing and validating the shipped data files.

use std::path::Path;

use super::loader::{CREATURES_FILE, parse_data_file, parse_single};
use super::*;

fn shipped_content() -> (ContentRegistry, GameplayDefaults) {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONTENT_DIR);
    match load_all_content(&base) {
        Ok(content) => content,
        Err(errors) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            panic!("shipped content failed to load");
        }
    }
}

#[test]
fn test_shipped_content_loads() {
    let (registry, defaults) = shipped_content();

    assert_eq!(registry.companions.len(), 3);
    assert_eq!(registry.creatures.len(), 5);
    assert_eq!(registry.hidden_targets.len(), 5);
    assert_eq!(registry.gallery_cards.len(), 4);
    assert_eq!(registry.total_count(), 17);
    assert!(!registry.greeting.recipient.is_empty());

    assert_eq!(defaults.catching.catch_quota, 3);
    assert_eq!(defaults.cake.commit_threshold, 180.0);
}

#[test]
fn test_shipped_content_validates() {
    let (registry, defaults) = shipped_content();

    let errors = validate_content(&registry);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert!(validate_defaults(&defaults).is_empty());
}

#[test]
fn test_builtin_content_matches_disk() {
    let (disk, _) = shipped_content();
    let (builtin, _) = builtin_content().expect("embedded content parses");

    let disk_ids: Vec<_> = disk.creatures.iter().map(|c| c.id.clone()).collect();
    let builtin_ids: Vec<_> = builtin.creatures.iter().map(|c| c.id.clone()).collect();
    assert_eq!(disk_ids, builtin_ids);
    assert_eq!(disk.greeting.headline, builtin.greeting.headline);
}

#[test]
fn test_lookup_by_id() {
    let (registry, _) = shipped_content();

    let creature = registry.creature("creature_mindstorm").expect("exists");
    assert_eq!(creature.rarity, Rarity::Legendary);
    assert!((creature.capture_probability - 0.1).abs() < f32::EPSILON);

    assert!(registry.companion("companion_sproutling").is_some());
    assert!(registry.hidden_target("target_fluffkit").is_some());
    assert!(registry.creature("creature_missing").is_none());
}

#[test]
fn test_missing_directory_reports_every_file() {
    let errors = load_all_content(Path::new("does/not/exist")).expect_err("nothing to read");
    assert_eq!(errors.len(), 6);
    assert!(errors[0].to_string().contains("companions.ron"));
}

#[test]
fn test_parse_error_names_file() {
    let result = parse_data_file::<CreatureDef>(CREATURES_FILE, "(schema_version: 1, items: [(id: ");
    let error = result.expect_err("truncated input");
    assert_eq!(error.file, CREATURES_FILE);
    assert!(error.message.starts_with("Parse error"));
}

#[test]
fn test_partial_tuning_uses_defaults() {
    let defaults: GameplayDefaults = parse_single(
        "gameplay_defaults.ron",
        "(catching: (catch_quota: 5), cake: (min_velocity: 0.8))",
    )
    .expect("partial tuning parses");

    assert_eq!(defaults.catching.catch_quota, 5);
    assert_eq!(defaults.catching.escape_damage, 20);
    assert_eq!(defaults.cake.min_velocity, 0.8);
    assert_eq!(defaults.cake.contact_threshold, 80.0);
    assert_eq!(defaults.seek.confetti_secs, 2.0);
    assert_eq!(defaults.selection.commit_secs, 3.5);
}

#[test]
fn test_validation_catches_bad_probability_and_dangling_reference() {
    let (mut registry, _) = shipped_content();
    registry.creatures[0].capture_probability = 1.5;
    registry
        .greeting
        .featured_target_ids
        .push("target_nowhere".to_string());

    let errors = validate_content(&registry);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.field == "capture_probability"));
    assert!(
        errors
            .iter()
            .any(|e| e.field == "featured_target_ids" && e.problem.contains("target_nowhere"))
    );
}

#[test]
fn test_validation_catches_duplicates_and_empty_pool() {
    let (mut registry, _) = shipped_content();
    let duplicate = registry.hidden_targets[0].clone();
    registry.hidden_targets.push(duplicate);
    registry.creatures.clear();

    let errors = validate_content(&registry);
    assert!(errors.iter().any(|e| e.source_type == "HiddenTarget" && e.field == "id"));
    assert!(errors.iter().any(|e| e.field == "creatures"));
}

#[test]
fn test_validation_catches_inverted_cake_thresholds() {
    let mut defaults = GameplayDefaults::default();
    defaults.cake.commit_threshold = 50.0;
    defaults.catching.catch_quota = 0;

    let errors = validate_defaults(&defaults);
    assert_eq!(errors.len(), 2);
}

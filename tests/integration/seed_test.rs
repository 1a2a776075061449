//! Integration tests for seed loading and configuration.

use pretty_assertions::assert_eq;

use studio_core::config::AppConfig;
use studio_core::config::explorer::ExplorerConfig;
use studio_core::error::ErrorKind;
use studio_entity::item::seed_id;
use studio_service::seed::{demo_id, demo_seed, load_seed, manager_from_config};

#[test]
fn test_bundled_seed_matches_demo() {
    let items = load_seed("config/seed.json").unwrap();
    assert_eq!(items, demo_seed());
}

#[test]
fn test_manager_from_configured_seed() {
    let config = ExplorerConfig {
        seed_path: Some("config/seed.json".to_string()),
        ..ExplorerConfig::default()
    };

    let manager = manager_from_config(&config).unwrap();
    assert_eq!(manager.len(), 5);
    assert_eq!(
        manager.get(&demo_id(4)).unwrap().parent_id,
        Some(demo_id(1))
    );
}

#[test]
fn test_file_parent_in_seed_is_rejected() {
    let config = ExplorerConfig {
        seed_path: Some("tests/fixtures/broken_seed.json".to_string()),
        ..ExplorerConfig::default()
    };

    let err = manager_from_config(&config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn test_seed_with_plain_keys_loads() {
    let config = ExplorerConfig {
        seed_path: Some("tests/fixtures/legacy_seed.json".to_string()),
        ..ExplorerConfig::default()
    };

    let manager = manager_from_config(&config).unwrap();
    assert_eq!(manager.len(), 5);

    let designs = seed_id::from_key("1");
    let sock = seed_id::from_key("4");
    assert_eq!(manager.get(&sock).unwrap().parent_id, Some(designs));
    assert_eq!(manager.get(&designs).unwrap().name, "My Designs");
    assert_eq!(manager.list_children(Some(designs)).len(), 1);
    assert_eq!(manager.list_children(None).len(), 4);

    let again = load_seed("tests/fixtures/legacy_seed.json").unwrap();
    let ids: Vec<_> = again.iter().map(|item| item.id).collect();
    let expected: Vec<_> = ["1", "2", "3", "4", "5"].into_iter().map(seed_id::from_key).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_default_config_file() {
    let config = AppConfig::load_from("config/default.toml").unwrap();
    assert_eq!(config.explorer.root_label, "All Projects");
    assert_eq!(config.explorer.default_folder_name, "New Folder");
    assert!(config.explorer.seed_path.is_none());
    assert!(config.explorer.folders_first);
}

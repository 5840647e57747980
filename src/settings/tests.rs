use super::defaults::default_document;
use super::migrate::{merge_tables, migrate, needs_migration, stored_version};
use super::*;
use crate::common::constants::SETTINGS_VERSION;
use serial_test::serial;
use tempfile::tempdir;

fn table(src: &str) -> Table {
    src.parse().unwrap()
}

// # Merge semantics

#[test]
fn merge_user_scalar_wins() {
    let defaults = table("night_theme = \"Adwaita-dark\"");
    let user = table("night_theme = \"Nordic\"");
    let merged = merge_tables(&defaults, user);
    assert_eq!(
        merged.get("night_theme").and_then(Value::as_str),
        Some("Nordic")
    );
}

#[test]
fn merge_defaults_fill_missing_keys() {
    let defaults = table("a = 1\nb = 2");
    let user = table("a = 10");
    let merged = merge_tables(&defaults, user);
    assert_eq!(merged.get("a").and_then(Value::as_integer), Some(10));
    assert_eq!(merged.get("b").and_then(Value::as_integer), Some(2));
}

#[test]
fn merge_nested_tables_recursively() {
    let defaults = table("[misc]\nnotifications = true\nquiet_hours = false");
    let user = table("[misc]\nnotifications = false");
    let merged = merge_tables(&defaults, user);
    let misc = merged.get("misc").and_then(Value::as_table).unwrap();
    assert_eq!(misc.get("notifications").and_then(Value::as_bool), Some(false));
    assert_eq!(misc.get("quiet_hours").and_then(Value::as_bool), Some(false));
}

#[test]
fn merge_user_sequence_wins_wholesale() {
    let defaults = table("providers = [\"gnome\", \"kde\"]");
    let user = table("providers = [\"gnome\"]");
    let merged = merge_tables(&defaults, user);
    let providers = merged.get("providers").and_then(Value::as_array).unwrap();
    assert_eq!(providers.len(), 1);
}

#[test]
fn merge_preserves_user_only_keys() {
    let defaults = table("a = 1");
    let user = table("a = 1\ncustom_section = { flag = true }");
    let merged = merge_tables(&defaults, user);
    assert!(merged.contains_key("custom_section"));
}

#[test]
fn merge_type_conflict_takes_user_value() {
    // Default has a table where the user kept a scalar; the user wins.
    let defaults = table("[themes]\nname = \"x\"");
    let user = table("themes = \"flat-string\"");
    let merged = merge_tables(&defaults, user);
    assert_eq!(merged.get("themes").and_then(Value::as_str), Some("flat-string"));
}

// # Migration

#[test]
fn migrate_is_noop_at_current_version() {
    let doc = table(&format!(
        "version = {SETTINGS_VERSION:?}\ncustom = \"kept\"\n[themes]\nlight = \"X\""
    ));
    let migrated = migrate(doc.clone(), &default_document(), SETTINGS_VERSION);
    assert_eq!(migrated, doc);
}

#[test]
fn migrate_stamps_missing_version_and_fills_defaults() {
    let doc = table("[misc]\nnotifications = false");
    let migrated = migrate(doc, &default_document(), SETTINGS_VERSION);
    assert_eq!(stored_version(&migrated), Some(SETTINGS_VERSION));

    // Every default key is present, user override survives.
    for key in default_document().keys() {
        assert!(migrated.contains_key(key), "missing default key {key}");
    }
    let misc = migrated.get("misc").and_then(Value::as_table).unwrap();
    assert_eq!(misc.get("notifications").and_then(Value::as_bool), Some(false));
}

#[test]
fn migrate_without_version_skips_legacy_transform() {
    // Unknown provenance: flat keys are preserved as user data, not reshaped.
    let doc = table("[themes]\nlight = \"Adwaita\"");
    let migrated = migrate(doc, &default_document(), SETTINGS_VERSION);
    let themes = migrated.get("themes").and_then(Value::as_table).unwrap();
    assert_eq!(themes.get("light").and_then(Value::as_str), Some("Adwaita"));
}

#[test]
fn legacy_flat_theme_names_relocated() {
    let doc = table("version = 1.0\n[themes]\nlight = \"Adwaita\"\ndark = \"Adwaita-dark\"");
    let migrated = migrate(doc, &default_document(), SETTINGS_VERSION);

    let themes = migrated.get("themes").and_then(Value::as_table).unwrap();
    assert!(!themes.contains_key("light"));
    assert!(!themes.contains_key("dark"));

    let settings = Settings::from_table(migrated);
    assert_eq!(settings.theme_name("gnome", "light"), Some("Adwaita"));
    assert_eq!(settings.theme_name("gnome", "dark"), Some("Adwaita-dark"));
    // Default-merge filled in the rest of the provider table.
    assert!(
        settings
            .as_table()
            .get("themes")
            .and_then(Value::as_table)
            .and_then(|t| t.get("gnome"))
            .and_then(Value::as_table)
            .and_then(|t| t.get("light"))
            .and_then(Value::as_table)
            .map(|t| t.contains_key("icons"))
            .unwrap_or(false)
    );
}

#[test]
fn legacy_transform_applies_at_threshold() {
    let doc = table("version = 1.2\n[themes]\nlight = \"Breeze\"");
    let migrated = migrate(doc, &default_document(), SETTINGS_VERSION);
    let settings = Settings::from_table(migrated);
    assert_eq!(settings.theme_name("gnome", "light"), Some("Breeze"));
}

#[test]
fn legacy_transform_skipped_above_threshold() {
    let doc = table("version = 1.5\n[themes]\nlight = \"Breeze\"");
    let migrated = migrate(doc, &default_document(), SETTINGS_VERSION);
    let themes = migrated.get("themes").and_then(Value::as_table).unwrap();
    assert_eq!(themes.get("light").and_then(Value::as_str), Some("Breeze"));
    assert_eq!(stored_version(&migrated), Some(SETTINGS_VERSION));
}

#[test]
fn migrate_twice_equals_migrate_once() {
    let doc = table("version = 1.0\n[themes]\nlight = \"Adwaita\"\ndark = \"Adwaita-dark\"");
    let defaults = default_document();
    let once = migrate(doc, &defaults, SETTINGS_VERSION);
    let twice = migrate(once.clone(), &defaults, SETTINGS_VERSION);
    assert_eq!(once, twice);
    assert!(!needs_migration(&once, SETTINGS_VERSION));
}

#[test]
fn integer_typed_version_is_tolerated() {
    let doc = table("version = 1\n[themes]\nlight = \"Adwaita\"");
    assert_eq!(stored_version(&doc), Some(1.0));
    let migrated = migrate(doc, &default_document(), SETTINGS_VERSION);
    let settings = Settings::from_table(migrated);
    assert_eq!(settings.theme_name("gnome", "light"), Some("Adwaita"));
}

// # Loading

#[test]
fn load_missing_file_signals_missing() {
    let dir = tempdir().unwrap();
    let err = Settings::load_from_path(&dir.path().join("themr.toml")).unwrap_err();
    assert!(err.downcast_ref::<SettingsError>().is_some());
}

#[test]
fn load_corrupt_file_degrades_to_empty_document() {
    crate::logger::Log::set_enabled(false);
    let dir = tempdir().unwrap();
    let path = dir.path().join("themr.toml");
    std::fs::write(&path, "this is [not valid toml").unwrap();

    let settings = Settings::load_from_path(&path).unwrap();
    assert!(settings.as_table().is_empty());
}

#[test]
fn save_and_reload_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("themr.toml");
    let settings = Settings::from_table(default_document());

    settings.save_to_path(&path).unwrap();
    let reloaded = Settings::load_from_path(&path).unwrap();
    assert_eq!(settings, reloaded);
}

// # Accessors

#[test]
fn notifications_default_to_enabled() {
    let settings = Settings::from_table(Table::new());
    assert!(settings.notifications_enabled());
}

#[test]
fn coordinates_accept_integer_values() {
    let settings = Settings::from_table(table("[location]\nlatitude = 52\nlongitude = 13"));
    assert_eq!(settings.latitude(), Some(52.0));
    assert_eq!(settings.longitude(), Some(13.0));
}

#[test]
fn theme_name_walks_nested_tables() {
    let settings = Settings::from_table(default_document());
    assert_eq!(settings.theme_name("gnome", "light"), Some("Adwaita"));
    assert_eq!(settings.theme_name("gnome", "dark"), Some("Adwaita-dark"));
    assert_eq!(settings.theme_name("kde", "light"), None);
}

// # Bootstrap (touches the process-wide config dir, keep serial)

#[test]
#[serial]
fn first_run_bootstraps_then_loads_cleanly() {
    crate::logger::Log::set_enabled(false);
    let dir = tempdir().unwrap();
    set_config_dir(Some(dir.path().to_string_lossy().into_owned())).unwrap();

    let (settings, events) = load_or_init().unwrap();
    assert_eq!(events, vec![ConfigEvent::FirstRun]);
    assert_eq!(settings.version(), Some(SETTINGS_VERSION));
    assert!(get_settings_path().unwrap().exists());

    // Second load: no bootstrap, no migration.
    let (reloaded, events) = load_or_init().unwrap();
    assert!(events.is_empty());
    assert_eq!(reloaded, settings);
}

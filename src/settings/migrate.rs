//! Settings document migration.
//!
//! Two layers cooperate here:
//!
//! 1. **Legacy structural transforms** — named, one-shot reshapes keyed by a
//!    version range, registered in [`LEGACY_STEPS`]. They run before the
//!    generic merge and only for documents that positively declare an old
//!    enough version.
//! 2. **Recursive default-merge** — every key present in the bundled
//!    defaults ends up present in the result; user-supplied scalars and
//!    sequences win over defaults; mappings merge recursively. Keys only the
//!    user has are preserved.
//!
//! A document whose `version` already equals the current version is returned
//! unchanged, which makes migration idempotent. A document with no `version`
//! at all is treated as "needs migration" rather than an error; since its
//! provenance is unknown, the legacy transforms are skipped for it.

use toml::{Table, Value};

use crate::common::constants::FLAT_THEMES_MAX_VERSION;

/// A one-shot structural transform for documents at or below `max_version`.
struct LegacyStep {
    max_version: f64,
    name: &'static str,
    apply: fn(&mut Table),
}

/// Registered legacy transforms, oldest first. New steps compose by
/// appending here instead of entangling the merge below.
const LEGACY_STEPS: &[LegacyStep] = &[LegacyStep {
    max_version: FLAT_THEMES_MAX_VERSION,
    name: "relocate flat theme names under themes.gnome",
    apply: relocate_flat_theme_names,
}];

/// Read the document version, tolerating integer-typed values.
pub fn stored_version(doc: &Table) -> Option<f64> {
    match doc.get("version") {
        Some(Value::Float(v)) => Some(*v),
        Some(Value::Integer(v)) => Some(*v as f64),
        _ => None,
    }
}

/// Whether [`migrate`] would change this document.
pub fn needs_migration(doc: &Table, current_version: f64) -> bool {
    stored_version(doc) != Some(current_version)
}

/// Migrate a document against the bundled defaults.
///
/// Returns the document unchanged when its version already matches.
/// Otherwise applies any legacy transforms the stored version calls for,
/// merges defaults underneath the user's values, and stamps the current
/// version. The caller persists the result.
pub fn migrate(mut doc: Table, defaults: &Table, current_version: f64) -> Table {
    if stored_version(&doc) == Some(current_version) {
        return doc;
    }

    if let Some(version) = stored_version(&doc) {
        for step in LEGACY_STEPS {
            if version <= step.max_version {
                log_indented!("Applying legacy transform: {}", step.name);
                (step.apply)(&mut doc);
            }
        }
    }

    let mut merged = merge_tables(defaults, doc);
    merged.insert("version".to_string(), Value::Float(current_version));
    merged
}

/// Merge `user` over `defaults`: defaults fill gaps, user leaves win,
/// nested tables merge recursively, user-only keys survive.
pub(crate) fn merge_tables(defaults: &Table, mut user: Table) -> Table {
    let mut merged = Table::new();
    for (key, default_value) in defaults {
        let value = match user.remove(key) {
            Some(user_value) => merge_value(default_value, user_value),
            None => default_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    for (key, user_value) in user {
        merged.insert(key, user_value);
    }
    merged
}

fn merge_value(default: &Value, user: Value) -> Value {
    match (default, user) {
        (Value::Table(default_table), Value::Table(user_table)) => {
            Value::Table(merge_tables(default_table, user_table))
        }
        // Scalars and sequences: the user's value wins wholesale, even when
        // the variants disagree.
        (_, user) => user,
    }
}

/// v1.2 layout kept single flat `themes.light` / `themes.dark` names.
/// Relocate them to `themes.gnome.{light,dark}.gtk` and drop the flat keys;
/// the following default-merge fills in the rest of the provider table.
fn relocate_flat_theme_names(doc: &mut Table) {
    let Some(Value::Table(themes)) = doc.get_mut("themes") else {
        return;
    };

    let light = themes.remove("light");
    let dark = themes.remove("dark");
    if light.is_none() && dark.is_none() {
        return;
    }

    let mut gnome = match themes.remove("gnome") {
        Some(Value::Table(existing)) => existing,
        _ => Table::new(),
    };

    for (variant, name) in [("light", light), ("dark", dark)] {
        if let Some(name @ Value::String(_)) = name {
            let mut slot = Table::new();
            slot.insert("gtk".to_string(), name);
            gnome.insert(variant.to_string(), Value::Table(slot));
        }
    }

    themes.insert("gnome".to_string(), Value::Table(gnome));
}

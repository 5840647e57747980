//! Versioned settings store.
//!
//! themr keeps its configuration as an untyped TOML document so user-defined
//! sections survive upgrades untouched. The recognized top-level sections are:
//!
//! ```toml
//! version = 2.0            # document version, stamped on every migration
//!
//! [location]               # coordinates for the sun-time provider
//! latitude = 40.7128
//! longitude = -74.0060
//!
//! [themes.gnome.light]     # per-provider theme names, one table per verdict
//! gtk = "Adwaita"
//!
//! [misc]
//! notifications = true     # attach the notifying observer
//!
//! [extras.vscode]          # per-feature enable flags
//! enabled = false
//! ```
//!
//! ## Loading semantics
//!
//! - No file at all is a [`SettingsError::Missing`] error; the caller
//!   bootstraps from the bundled defaults.
//! - A file that exists but is not valid TOML loads as an EMPTY document.
//!   The following migration then fills it back in from defaults, so one
//!   corrupted file never takes theme switching down with it.
//!
//! ## Migration
//!
//! Documents whose `version` differs from the current one are migrated:
//! named legacy transforms run first for old enough documents, then a
//! recursive default-merge guarantees every default key exists while user
//! overrides win. See [`migrate`].

pub mod defaults;
pub mod migrate;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use toml::{Table, Value};

use crate::common::constants::{SETTINGS_FILE_NAME, SETTINGS_VERSION};
use crate::common::utils::private_path;
use crate::gateway::ConfigEvent;

/// Custom configuration directory, set once at startup via `--config`.
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// Can only be called once, typically during argument handling.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Directory containing themr.toml (and, with `--config`, the cache too).
pub fn get_config_base_dir() -> Result<PathBuf> {
    if let Some(custom) = get_custom_config_dir() {
        return Ok(custom);
    }
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("themr"))
}

/// Full path of the settings file.
pub fn get_settings_path() -> Result<PathBuf> {
    Ok(get_config_base_dir()?.join(SETTINGS_FILE_NAME))
}

/// Settings file absent entirely. Recoverable: bootstrap from defaults.
#[derive(Debug)]
pub struct SettingsError {
    /// Path that was probed.
    pub path: PathBuf,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No settings file found at {}", self.path.display())
    }
}

impl std::error::Error for SettingsError {}

/// The loaded settings document with typed accessors over the untyped tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    doc: Table,
}

impl Settings {
    pub fn from_table(doc: Table) -> Self {
        Self { doc }
    }

    pub fn as_table(&self) -> &Table {
        &self.doc
    }

    pub fn into_table(self) -> Table {
        self.doc
    }

    /// Load from the resolved settings path.
    pub fn load() -> Result<Self> {
        let path = get_settings_path()?;
        Self::load_from_path(&path)
    }

    /// Load from a specific path.
    ///
    /// A missing file is a [`SettingsError`]; an unparseable file degrades
    /// to an empty document so the caller's migration can rebuild it.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SettingsError {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", private_path(path)))?;

        match content.parse::<Table>() {
            Ok(doc) => Ok(Self { doc }),
            Err(e) => {
                log_pipe!();
                log_warning!("Settings file is not valid TOML, treating as empty: {e}");
                log_indented!("{}", private_path(path));
                Ok(Self { doc: Table::new() })
            }
        }
    }

    /// Persist to the resolved settings path.
    pub fn save(&self) -> Result<()> {
        let path = get_settings_path()?;
        self.save_to_path(&path)
    }

    /// Persist atomically: write a sibling temp file, then rename over the
    /// target so a concurrent reader sees old or new content, never partial.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .context("Settings path has no parent directory")?;
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;

        let content =
            toml::to_string_pretty(&self.doc).context("Failed to serialize settings document")?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .context("Failed to create temporary settings file")?;
        tmp.write_all(content.as_bytes())
            .context("Failed to write settings document")?;
        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to persist settings to {}", private_path(path)))?;
        Ok(())
    }

    /// Stored document version, if the document declares one.
    pub fn version(&self) -> Option<f64> {
        migrate::stored_version(&self.doc)
    }

    /// `misc.notifications` flag; enabled when unset, matching the defaults.
    pub fn notifications_enabled(&self) -> bool {
        self.lookup(&["misc", "notifications"])
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.lookup(&["location", "latitude"]).and_then(value_as_f64)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.lookup(&["location", "longitude"])
            .and_then(value_as_f64)
    }

    /// GTK theme name for a provider ("gnome") and variant ("light"/"dark").
    pub fn theme_name(&self, provider: &str, variant: &str) -> Option<&str> {
        self.lookup(&["themes", provider, variant, "gtk"])
            .and_then(Value::as_str)
    }

    /// Walk a nested key path through the document.
    fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.doc.get(*first)?;
        for key in rest {
            current = current.as_table()?.get(*key)?;
        }
        Some(current)
    }

    /// Log the effective configuration in block form.
    pub fn log_summary(&self) {
        let version = self
            .version()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        log_block_start!("Loaded settings (version {version})");
        if let Ok(path) = get_settings_path() {
            log_indented!("{}", private_path(&path));
        }

        match (self.latitude(), self.longitude()) {
            (Some(lat), Some(lon)) => {
                let lat_dir = if lat >= 0.0 { "N" } else { "S" };
                let lon_dir = if lon >= 0.0 { "E" } else { "W" };
                log_indented!(
                    "Location: {:.3}°{}, {:.3}°{}",
                    lat.abs(),
                    lat_dir,
                    lon.abs(),
                    lon_dir
                );
            }
            _ => log_indented!("Location: not configured"),
        }

        log_indented!(
            "Notifications: {}",
            if self.notifications_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );

        if let Some(Value::Table(themes)) = self.doc.get("themes") {
            for provider in themes.keys() {
                if let (Some(light), Some(dark)) = (
                    self.theme_name(provider, "light"),
                    self.theme_name(provider, "dark"),
                ) {
                    log_indented!("Themes ({provider}): {light} / {dark}");
                }
            }
        }
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        Value::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

/// Load the settings document, bootstrapping and migrating as needed.
///
/// Returns the effective settings plus the config events that occurred, in
/// order, for the caller to hand to its observers. The migrated document is
/// written back before it is returned so the same migration never runs twice.
pub fn load_or_init() -> Result<(Settings, Vec<ConfigEvent>)> {
    let mut events = Vec::new();
    let path = get_settings_path()?;

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) if err.downcast_ref::<SettingsError>().is_some() => {
            log_block_start!("No settings file found, creating one");
            log_indented!("{}", private_path(&path));
            let fresh = Settings::from_table(defaults::default_document());
            fresh.save()?;
            events.push(ConfigEvent::FirstRun);
            fresh
        }
        Err(err) => return Err(err),
    };

    if !migrate::needs_migration(settings.as_table(), SETTINGS_VERSION) {
        return Ok((settings, events));
    }

    log_block_start!("Migrating settings to version {SETTINGS_VERSION}");
    let defaults = defaults::default_document();
    let migrated = Settings::from_table(migrate::migrate(
        settings.into_table(),
        &defaults,
        SETTINGS_VERSION,
    ));
    migrated.save()?;
    events.push(ConfigEvent::Migrated);
    Ok((migrated, events))
}

#[cfg(test)]
mod tests;

//! Bundled default settings document.

use toml::Table;

/// Default document written on first run and merged underneath user
/// documents during migration. Every key here is guaranteed present in a
/// migrated document.
pub(crate) const DEFAULT_SETTINGS: &str = r##"version = 2.0

# Geographic coordinates for the sun-time provider (decimal degrees).
# themr skips its run until both are set.
[location]
# latitude = 40.7128
# longitude = -74.0060

[themes.gnome.light]
gtk = "Adwaita"
shell = ""
icons = "Adwaita"

[themes.gnome.dark]
gtk = "Adwaita-dark"
shell = ""
icons = "Adwaita"

[misc]
notifications = true

[extras.vscode]
enabled = false
light = "Default Light+"
dark = "Default Dark+"

[extras.atom]
enabled = false
light = "one-light-ui"
dark = "one-dark-ui"
"##;

/// Parse the bundled defaults.
pub fn default_document() -> Table {
    DEFAULT_SETTINGS
        .parse()
        .expect("bundled default settings must be valid TOML")
}

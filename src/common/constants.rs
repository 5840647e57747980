//! Application-wide constants.

/// Version stamped into settings documents written by this build.
pub const SETTINGS_VERSION: f64 = 2.0;

/// Documents at or below this version still carry the flat
/// `themes.light` / `themes.dark` layout and need the structural rename.
pub const FLAT_THEMES_MAX_VERSION: f64 = 1.2;

/// Settings file name inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "themr.toml";

/// Serialized sunrise/sunset pair inside the cache directory.
pub const SUN_TIMES_FILE_NAME: &str = "sun_times.json";

/// Advisory lock file guarding against overlapping scheduler firings.
pub const LOCK_FILE_NAME: &str = "themr.lock";

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

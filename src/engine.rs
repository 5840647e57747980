//! Day/night decision engine.
//!
//! Classifies a moment into exactly one of two theme states by comparing
//! wall-clock times of day. The date component of the cached sunrise/sunset
//! pair is deliberately discarded: only the time of day matters, and keeping
//! the cache fresh across days is the external scheduler's job.

use chrono::NaiveTime;

/// The binary theme classification for the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVerdict {
    Light,
    Dark,
}

impl ThemeVerdict {
    /// Variant key used to look theme names up in the settings document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVerdict::Light => "light",
            ThemeVerdict::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeVerdict::Light => write!(f, "Light"),
            ThemeVerdict::Dark => write!(f, "Dark"),
        }
    }
}

/// Classify `now` against the day's sunrise and sunset times.
///
/// `Light` on the half-open interval `[sunrise, sunset)`, `Dark` everywhere
/// else. A degenerate pair with `sunset <= sunrise` is not expected from the
/// provider, but the comparison stays total: the interval is empty and the
/// verdict is `Dark`.
pub fn decide(now: NaiveTime, sunrise: NaiveTime, sunset: NaiveTime) -> ThemeVerdict {
    if sunrise <= now && now < sunset {
        ThemeVerdict::Light
    } else {
        ThemeVerdict::Dark
    }
}

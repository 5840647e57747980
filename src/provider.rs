//! Sun-time provider seam.
//!
//! Computing sunrise/sunset is an external concern: the default provider
//! delegates the astronomy to the `sunrise` crate and only adapts its output
//! to the cache's shape. `compute` returning `Ok(None)` means the provider
//! cannot produce times this run (typically unconfigured coordinates); the
//! pipeline skips the invocation and the scheduler retries later.

use anyhow::Result;
use chrono::{DateTime, Local};
use sunrise::{Coordinates, SolarDay, SolarEvent};

use crate::settings::Settings;
use crate::suncache::SunTimes;

#[cfg_attr(test, mockall::automock)]
pub trait SunTimeProvider {
    /// Compute the sunrise/sunset pair for the location in `settings`.
    fn compute(&self, settings: &Settings) -> Result<Option<SunTimes>>;
}

/// Provider backed by the `sunrise` crate, using the current local date.
pub struct SolarProvider;

impl SunTimeProvider for SolarProvider {
    fn compute(&self, settings: &Settings) -> Result<Option<SunTimes>> {
        let (lat, lon) = match (settings.latitude(), settings.longitude()) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                log_pipe!();
                log_warning!("No coordinates configured, cannot compute sun times");
                log_indented!("Add latitude and longitude to the [location] settings section");
                return Ok(None);
            }
        };

        let Some(coord) = Coordinates::new(lat, lon) else {
            log_pipe!();
            log_warning!("Coordinates {lat:.4}, {lon:.4} are out of range");
            return Ok(None);
        };

        let today = Local::now().date_naive();
        let solar_day = SolarDay::new(coord, today);
        let sunrise_utc = solar_day.event_time(SolarEvent::Sunrise);
        let sunset_utc = solar_day.event_time(SolarEvent::Sunset);

        let sunrise: DateTime<Local> = sunrise_utc.with_timezone(&Local);
        let sunset: DateTime<Local> = sunset_utc.with_timezone(&Local);

        if sunrise >= sunset {
            // Polar day/night: the solar calculation degenerates and there
            // is no meaningful boundary pair for this date.
            log_pipe!();
            log_warning!("Sun does not rise and set normally at {lat:.4}° today");
            log_indented!("Skipping sun time computation for this date");
            return Ok(None);
        }

        Ok(Some(SunTimes::new(sunrise, sunset)?))
    }
}

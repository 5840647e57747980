//! `themr update` - force-refresh the sun times cache.
//!
//! The cache itself carries no TTL; this command is the explicit lever a
//! scheduler (or user) pulls to discard yesterday's boundary times.

use anyhow::Result;

use crate::gateway::{ConfigEvent, ConfigObserver, LogObserver};
use crate::provider::{SolarProvider, SunTimeProvider};
use crate::settings;
use crate::suncache::SunTimesCache;

pub fn run() -> Result<()> {
    let (settings, _events) = settings::load_or_init()?;
    let cache = SunTimesCache::at_default_location()?;
    cache.remove()?;

    log_block_start!("Recomputing sun times");
    match SolarProvider.compute(&settings)? {
        Some(times) => {
            cache.write(&times)?;
            log_indented!("Sunrise: {}", times.sunrise.format("%H:%M:%S"));
            log_indented!("Sunset:  {}", times.sunset.format("%H:%M:%S"));
            if settings.notifications_enabled() {
                LogObserver.on_config_event(ConfigEvent::CacheRebuilt);
            }
        }
        None => {
            log_block_start!("Provider could not compute sun times, cache left empty");
        }
    }
    Ok(())
}

//! `themr status` - show effective settings and the would-be verdict
//! without applying anything.

use anyhow::{Context, Result};
use chrono::Local;

use crate::engine;
use crate::settings;
use crate::suncache::SunTimesCache;

pub fn run() -> Result<()> {
    let (settings, _events) = settings::load_or_init()?;
    settings.log_summary();

    let cache = SunTimesCache::at_default_location()?;
    if !cache.is_present() {
        log_block_start!("No sun times cache, run 'themr update' to create one");
        return Ok(());
    }

    let times = cache
        .read()
        .context("Run 'themr update' to rebuild the sun times cache")?;
    let now = Local::now();
    let verdict = engine::decide(now.time(), times.sunrise.time(), times.sunset.time());

    log_block_start!("Sun times");
    log_indented!("Sunrise: {}", times.sunrise.format("%H:%M:%S"));
    log_indented!("Sunset:  {}", times.sunset.format("%H:%M:%S"));
    log_block_start!("Verdict at {}: {verdict}", now.format("%H:%M:%S"));
    Ok(())
}

//! Themr application: the run-to-completion decision pipeline.
//!
//! One invocation does: load and migrate settings → populate the sun-times
//! cache if absent → classify "now" against the cached pair → hand the
//! verdict to the theme-application collaborator. The pipeline is
//! single-threaded and short-lived; an external scheduler (systemd timer,
//! cron) invokes it periodically.

use anyhow::Result;
use chrono::Local;

use crate::engine::{self, ThemeVerdict};
use crate::gateway::{ConfigEvent, ConfigObserver, LogApplier, LogObserver, ThemeApplier};
use crate::provider::{SolarProvider, SunTimeProvider};
use crate::settings::{self, Settings};
use crate::suncache::{CacheError, SunTimesCache};

pub struct Themr {
    settings: Settings,
    cache: SunTimesCache,
    provider: Box<dyn SunTimeProvider>,
    applier: Box<dyn ThemeApplier>,
    observers: Vec<Box<dyn ConfigObserver>>,
}

impl Themr {
    /// Load settings (bootstrapping and migrating as needed), wire the
    /// default collaborators, and deliver any config events that occurred
    /// during loading.
    pub fn new() -> Result<Self> {
        let (settings, events) = settings::load_or_init()?;
        let cache = SunTimesCache::at_default_location()?;

        let mut observers: Vec<Box<dyn ConfigObserver>> = Vec::new();
        if settings.notifications_enabled() {
            observers.push(Box::new(LogObserver));
        }

        let themr = Self {
            settings,
            cache,
            provider: Box::new(SolarProvider),
            applier: Box::new(LogApplier),
            observers,
        };
        for event in events {
            themr.notify(event);
        }
        Ok(themr)
    }

    /// Assemble a pipeline with explicit collaborators.
    ///
    /// The caller owns the wiring; nothing registers itself globally.
    pub fn with_collaborators(
        settings: Settings,
        cache: SunTimesCache,
        provider: Box<dyn SunTimeProvider>,
        applier: Box<dyn ThemeApplier>,
        observers: Vec<Box<dyn ConfigObserver>>,
    ) -> Self {
        Self {
            settings,
            cache,
            provider,
            applier,
            observers,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn notify(&self, event: ConfigEvent) {
        for observer in &self.observers {
            observer.on_config_event(event);
        }
    }

    /// Run the decision pipeline once.
    ///
    /// A provider that cannot supply times skips the invocation with a
    /// notice instead of failing, so the host scheduler is undisturbed. A
    /// corrupt cache is surfaced as an error rather than silently rebuilt.
    pub fn run(&self) -> Result<()> {
        self.settings.log_summary();

        if !self.cache.is_present() {
            log_block_start!("No sun times cache found, querying provider");
            match self.provider.compute(&self.settings)? {
                Some(times) => {
                    self.cache.write(&times)?;
                    self.notify(ConfigEvent::CacheRebuilt);
                }
                None => {
                    log_block_start!("Sun time provider unavailable, skipping this run");
                    return Ok(());
                }
            }
        }

        let times = self.cache.read().map_err(|err| {
            match err.downcast_ref::<CacheError>() {
                Some(CacheError::Corrupt(_)) => {
                    err.context("Run 'themr update' to rebuild the sun times cache")
                }
                _ => err,
            }
        })?;

        // Only the local time of day matters; the record's date is ignored.
        let now = Local::now();
        let verdict = engine::decide(now.time(), times.sunrise.time(), times.sunset.time());

        log_block_start!(
            "Sunrise {} · Sunset {} · Now {}",
            times.sunrise.format("%H:%M:%S"),
            times.sunset.format("%H:%M:%S"),
            now.format("%H:%M:%S")
        );
        self.apply(verdict);
        Ok(())
    }

    fn apply(&self, verdict: ThemeVerdict) {
        self.applier.on_verdict(verdict, &self.settings);
    }
}

//! Collaborator gateway: the seams to theme-application and notification
//! collaborators.
//!
//! The core only ever produces a verdict and structured config events. It
//! never performs a theme switch itself, never blocks on a collaborator, and
//! never depends on one succeeding, which is why the trait methods here
//! return `()` and implementations swallow their own failures.
//!
//! Observers are wired explicitly by the caller instead of registering
//! themselves into process-wide state, so a settings flag can decide which
//! collaborators participate in a given run.

use crate::engine::ThemeVerdict;
use crate::settings::Settings;

/// Notable configuration lifecycle events, surfaced for logging or user
/// notification by whichever observers the caller attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigEvent {
    /// No settings file existed; the bundled defaults were written.
    FirstRun,
    /// The settings document was migrated to the current version.
    Migrated,
    /// The sun-times cache was (re)populated from the provider.
    CacheRebuilt,
}

impl ConfigEvent {
    pub fn describe(&self) -> &'static str {
        match self {
            ConfigEvent::FirstRun => "No settings file found, created one from defaults",
            ConfigEvent::Migrated => "Settings migrated to the current version",
            ConfigEvent::CacheRebuilt => "Sun times cache rebuilt",
        }
    }
}

/// Outward seam for the theme-application collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeApplier {
    /// Hand the verdict (and the settings it was derived under) downstream.
    fn on_verdict(&self, verdict: ThemeVerdict, settings: &Settings);
}

/// Seam for notification/logging collaborators interested in config events.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigObserver {
    fn on_config_event(&self, event: ConfigEvent);
}

/// Applier that logs the verdict and the theme names it selects.
///
/// This is the default downstream in a build without a real desktop
/// integration; a GNOME or D-Bus applier would slot in behind the same
/// trait.
pub struct LogApplier;

impl ThemeApplier for LogApplier {
    fn on_verdict(&self, verdict: ThemeVerdict, settings: &Settings) {
        log_block_start!("Theme verdict: {verdict}");
        let mut any_named = false;
        if let Some(toml::Value::Table(themes)) = settings.as_table().get("themes") {
            for provider in themes.keys() {
                if let Some(name) = settings.theme_name(provider, verdict.as_str()) {
                    log_indented!("{provider}: {name}");
                    any_named = true;
                }
            }
        }
        if !any_named {
            log_indented!("No theme names configured for this verdict");
        }
    }
}

/// Observer that logs config events in block form.
pub struct LogObserver;

impl ConfigObserver for LogObserver {
    fn on_config_event(&self, event: ConfigEvent) {
        log_pipe!();
        log_info!("{}", event.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn observers_receive_events_in_order() {
        let mut observer = MockConfigObserver::new();
        let mut seq = mockall::Sequence::new();
        observer
            .expect_on_config_event()
            .with(eq(ConfigEvent::FirstRun))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        observer
            .expect_on_config_event()
            .with(eq(ConfigEvent::CacheRebuilt))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        for event in [ConfigEvent::FirstRun, ConfigEvent::CacheRebuilt] {
            observer.on_config_event(event);
        }
    }

    #[test]
    fn applier_receives_verdict() {
        let mut applier = MockThemeApplier::new();
        applier
            .expect_on_verdict()
            .withf(|verdict, _| *verdict == ThemeVerdict::Dark)
            .times(1)
            .return_const(());

        let settings = Settings::from_table(toml::Table::new());
        applier.on_verdict(ThemeVerdict::Dark, &settings);
    }
}

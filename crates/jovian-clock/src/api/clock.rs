use chrono::{DateTime, Utc};

use crate::api::config::ClockConfig;
use crate::api::types::Moon;
use crate::core::time::{RefreshSchedule, TickAction};
use crate::ephemeris::dataset::Dataset;
use crate::ephemeris::lookup::minute_key;
use crate::ephemeris::state::EphemerisState;
use crate::error::Result;
use crate::renderer::traits::Surface;
use crate::systems::header::{header_for, HeaderText};
use crate::systems::snapshot::render_snapshot;
use crate::systems::timeline::render_timeline;

/// Surfaces to paint on one update. Any slot may be absent; its view is
/// simply skipped.
#[derive(Default)]
pub struct RenderTargets<'s> {
    pub snapshot: Option<&'s mut dyn Surface>,
    /// Timeline strips indexed by [`Moon::index`].
    pub timelines: [Option<&'s mut dyn Surface>; Moon::COUNT],
}

/// Summary of one update.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub header: HeaderText,
    /// Index of the displayed row.
    pub row: usize,
    /// False when the current minute had no row and a fallback was used.
    pub exact: bool,
}

/// The clock: configuration, the held ephemeris and the refresh schedule.
///
/// Owns no platform resources. The host drives it with [`Clock::tick`],
/// feeds load results to [`Clock::apply_load`] and hands surfaces to
/// [`Clock::render`].
pub struct Clock {
    config: ClockConfig,
    state: EphemerisState,
    schedule: RefreshSchedule,
}

impl Clock {
    pub fn new(config: ClockConfig) -> Self {
        let schedule = RefreshSchedule::new(config.refresh);
        Self {
            config,
            state: EphemerisState::new(),
            schedule,
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn state(&self) -> &EphemerisState {
        &self.state
    }

    pub fn has_data(&self) -> bool {
        self.state.is_loaded()
    }

    /// URL to fetch for a load started at `now`.
    pub fn request_url(&self, now: DateTime<Utc>) -> String {
        self.config.source.request_url(now.timestamp_millis())
    }

    /// Record the outcome of a fetch. Returns true if the dataset changed.
    pub fn apply_load(&mut self, outcome: Result<Dataset>) -> bool {
        self.state.apply(outcome)
    }

    /// Parse and apply a fetched body.
    pub fn apply_json(&mut self, body: &str) -> bool {
        self.apply_load(Dataset::from_json(body))
    }

    /// Advance the refresh timer by one period.
    pub fn tick(&mut self) -> TickAction {
        self.schedule.tick(self.state.is_loaded())
    }

    /// Draw the row for `now` on every target present. Returns `None` and
    /// touches nothing when no dataset has been loaded yet.
    pub fn render(&self, now: DateTime<Utc>, targets: &mut RenderTargets<'_>) -> Option<FrameReport> {
        let dataset = self.state.current()?;
        let key = minute_key(now, self.config.lookup.basis);
        let hit = dataset.lookup(&key, self.config.lookup.policy);

        if let Some(surface) = targets.snapshot.as_deref_mut() {
            render_snapshot(surface, hit.entry, &self.config.snapshot, &self.config.palette);
        }
        for (moon, slot) in Moon::ALL.into_iter().zip(targets.timelines.iter_mut()) {
            if let Some(surface) = slot.as_deref_mut() {
                render_timeline(
                    surface,
                    moon,
                    &dataset,
                    hit.index,
                    &self.config.timeline,
                    &self.config.palette,
                );
            }
        }

        Some(FrameReport {
            header: header_for(hit.entry),
            row: hit.index,
            exact: hit.exact,
        })
    }
}

use serde::{Deserialize, Serialize};

/// Timer cadence for redraws and dataset reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between redraws (default: 10).
    pub interval_secs: u32,
    /// Re-fetch the dataset every N ticks even when one is held.
    /// 0 disables periodic reloads; a missing dataset is always retried.
    pub reload_every_ticks: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: 10,
            // hourly at the default interval
            reload_every_ticks: 360,
        }
    }
}

impl RefreshConfig {
    /// Timer period in milliseconds, never below one second.
    pub fn interval_ms(&self) -> i32 {
        let secs = self.interval_secs.max(1).min(i32::MAX as u32 / 1000);
        (secs * 1000) as i32
    }
}

/// What a timer tick should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickAction {
    /// Start a dataset fetch.
    pub reload: bool,
    /// Redraw from the held dataset.
    pub render: bool,
}

/// Counts timer ticks and decides when to reload.
#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    config: RefreshConfig,
    ticks: u64,
}

impl RefreshSchedule {
    pub fn new(config: RefreshConfig) -> Self {
        Self { config, ticks: 0 }
    }

    /// Advance one tick. `loaded` says whether a dataset is currently held.
    pub fn tick(&mut self, loaded: bool) -> TickAction {
        self.ticks += 1;
        let every = u64::from(self.config.reload_every_ticks);
        let periodic = every > 0 && self.ticks % every == 0;
        TickAction {
            reload: !loaded || periodic,
            render: loaded,
        }
    }
}

//! Mapping "now" onto a dataset row.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::dataset::{Dataset, Entry};

/// Format used for `Entry::time` keys.
pub const MINUTE_KEY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Which clock the dataset's time keys are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBasis {
    #[default]
    Utc,
    Local,
}

/// How to pick a row when no key equals the current minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Exact minute match, else the first row.
    #[default]
    ExactOrFirst,
    /// Exact match, else the latest row keyed before now; the first row if
    /// now precedes the whole table.
    LatestNotAfter,
}

/// Render `now` as a minute key in the given basis.
pub fn minute_key(now: DateTime<Utc>, basis: TimeBasis) -> String {
    match basis {
        TimeBasis::Utc => now.format(MINUTE_KEY_FORMAT).to_string(),
        TimeBasis::Local => now.with_timezone(&Local).format(MINUTE_KEY_FORMAT).to_string(),
    }
}

/// Result of a lookup: the chosen row, its index, and whether it was an
/// exact hit for the requested minute.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    pub index: usize,
    pub entry: &'a Entry,
    pub exact: bool,
}

impl Dataset {
    /// Select the row for minute key `key` under `policy`. Never fails: a
    /// dataset always has a first row to fall back to.
    pub fn lookup(&self, key: &str, policy: LookupPolicy) -> Lookup<'_> {
        if let Some(index) = self.position(key) {
            return Lookup { index, entry: &self.entries()[index], exact: true };
        }

        let index = match policy {
            LookupPolicy::ExactOrFirst => 0,
            LookupPolicy::LatestNotAfter => {
                // Keys sort chronologically, so the rows before `key` form a prefix.
                let before = self.entries().partition_point(|e| e.time.as_str() < key);
                before.saturating_sub(1)
            }
        };
        log::debug!(
            "no ephemeris row for {key}, falling back to {}",
            self.entries()[index].time
        );
        Lookup { index, entry: &self.entries()[index], exact: false }
    }

    /// The row to display at `now`.
    pub fn find_entry(&self, now: DateTime<Utc>, basis: TimeBasis, policy: LookupPolicy) -> &Entry {
        self.lookup(&minute_key(now, basis), policy).entry
    }
}

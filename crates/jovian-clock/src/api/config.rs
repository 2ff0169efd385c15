use serde::{Deserialize, Serialize};

use crate::api::types::Palette;
use crate::core::time::RefreshConfig;
use crate::ephemeris::lookup::{LookupPolicy, TimeBasis};
use crate::ephemeris::source::EphemerisSource;
use crate::error::{ClockError, Result};
use crate::systems::snapshot::SnapshotStyle;
use crate::systems::timeline::TimelineStyle;

/// Row selection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub policy: LookupPolicy,
    pub basis: TimeBasis,
}

/// Configuration for the clock, provided by the host page.
///
/// Every field has a default, so `{}` (or no config at all) reproduces the
/// stock clock: `positions.json`, 10 s redraws, UTC minute keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub source: EphemerisSource,
    pub refresh: RefreshConfig,
    pub lookup: LookupConfig,
    pub palette: Palette,
    pub snapshot: SnapshotStyle,
    pub timeline: TimelineStyle,
}

impl ClockConfig {
    /// Parse a JSON config; blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(ClockError::invalid_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::timeline::TimelineMode;

    #[test]
    fn blank_config_is_default() {
        assert_eq!(ClockConfig::from_json("").unwrap(), ClockConfig::default());
        assert_eq!(ClockConfig::from_json("{}").unwrap(), ClockConfig::default());
    }

    #[test]
    fn defaults_match_stock_clock() {
        let cfg = ClockConfig::default();
        assert_eq!(cfg.source.url, "positions.json");
        assert_eq!(cfg.refresh.interval_secs, 10);
        assert_eq!(cfg.lookup.policy, LookupPolicy::ExactOrFirst);
        assert_eq!(cfg.lookup.basis, TimeBasis::Utc);
        assert_eq!(cfg.snapshot.span_floor, 300.0);
        assert_eq!(cfg.snapshot.reach, 0.42);
        assert_eq!(cfg.timeline.mode, TimelineMode::Positional);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = ClockConfig::from_json(
            r#"{
                "source": { "url": "/data/jupiter.json" },
                "lookup": { "policy": "latest_not_after" },
                "timeline": { "mode": "temporal" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.source.url, "/data/jupiter.json");
        assert_eq!(cfg.source.cache_param, "cache");
        assert_eq!(cfg.lookup.policy, LookupPolicy::LatestNotAfter);
        assert_eq!(cfg.lookup.basis, TimeBasis::Utc);
        assert_eq!(cfg.timeline.mode, TimelineMode::Temporal);
        assert_eq!(cfg.timeline.dot_radius, 3.0);
    }

    #[test]
    fn bad_config_is_reported() {
        let err = ClockConfig::from_json(r#"{"refresh":{"interval_secs":"soon"}}"#).unwrap_err();
        assert!(matches!(err, ClockError::InvalidConfig(_)));
    }
}

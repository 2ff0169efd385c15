use serde::{Deserialize, Deserializer, Serialize};

use crate::api::types::Moon;
use crate::error::{ClockError, Result};

/// Signed angular offset of each moon from Jupiter's center, in arcseconds.
/// Positive values are east of the planet on the rendered axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Positions {
    #[serde(rename = "Io")]
    pub io: f64,
    #[serde(rename = "Europa")]
    pub europa: f64,
    #[serde(rename = "Ganymede")]
    pub ganymede: f64,
    #[serde(rename = "Callisto")]
    pub callisto: f64,
}

impl Positions {
    pub fn new(io: f64, europa: f64, ganymede: f64, callisto: f64) -> Self {
        Self { io, europa, ganymede, callisto }
    }

    pub fn get(&self, moon: Moon) -> f64 {
        match moon {
            Moon::Io => self.io,
            Moon::Europa => self.europa,
            Moon::Ganymede => self.ganymede,
            Moon::Callisto => self.callisto,
        }
    }

    /// `(moon, arcsec)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Moon, f64)> + '_ {
        Moon::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Largest absolute offset; NaN values are ignored.
    pub fn max_abs(&self) -> f64 {
        self.iter().map(|(_, v)| v.abs()).fold(0.0, f64::max)
    }
}

/// Optional human-readable event per moon (eclipse, shadow transit, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Events {
    #[serde(rename = "Io", default, skip_serializing_if = "Option::is_none")]
    pub io: Option<String>,
    #[serde(rename = "Europa", default, skip_serializing_if = "Option::is_none")]
    pub europa: Option<String>,
    #[serde(rename = "Ganymede", default, skip_serializing_if = "Option::is_none")]
    pub ganymede: Option<String>,
    #[serde(rename = "Callisto", default, skip_serializing_if = "Option::is_none")]
    pub callisto: Option<String>,
}

impl Events {
    /// The event text for `moon`, or `None` when absent or blank.
    pub fn get(&self, moon: Moon) -> Option<&str> {
        let slot = match moon {
            Moon::Io => &self.io,
            Moon::Europa => &self.europa,
            Moon::Ganymede => &self.ganymede,
            Moon::Callisto => &self.callisto,
        };
        slot.as_deref().filter(|s| !s.is_empty())
    }

    pub fn set(&mut self, moon: Moon, text: impl Into<String>) {
        let slot = match moon {
            Moon::Io => &mut self.io,
            Moon::Europa => &mut self.europa,
            Moon::Ganymede => &mut self.ganymede,
            Moon::Callisto => &mut self.callisto,
        };
        *slot = Some(text.into());
    }

    /// Moons that have an event, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Moon, &str)> + '_ {
        Moon::ALL
            .into_iter()
            .filter_map(move |m| self.get(m).map(|text| (m, text)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// One timestamped row of the ephemeris.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Minute-resolution key, `YYYY-MM-DD HH:MM`.
    pub time: String,
    pub positions: Positions,
    /// Absent or `null` both mean no events.
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Events,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Entry {
    pub fn new(time: impl Into<String>, positions: Positions) -> Self {
        Self {
            time: time.into(),
            positions,
            events: Events::default(),
        }
    }

    pub fn with_event(mut self, moon: Moon, text: impl Into<String>) -> Self {
        self.events.set(moon, text);
        self
    }
}

/// An immutable, non-empty ephemeris snapshot.
///
/// Rows are expected in ascending `time` order; the producer guarantees it
/// and nothing here re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(rename = "dataset")]
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
struct RawDocument {
    dataset: Vec<Entry>,
}

impl Dataset {
    /// Wrap `entries`, rejecting an empty table.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ClockError::data_unavailable("ephemeris dataset is empty"));
        }
        Ok(Self { entries })
    }

    /// Parse a `{ "dataset": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: RawDocument = serde_json::from_str(json)
            .map_err(|e| ClockError::data_unavailable(format!("malformed ephemeris JSON: {e}")))?;
        Self::new(doc.dataset)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Always present; a dataset is never empty.
    pub fn first(&self) -> &Entry {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the row keyed by `time`.
    pub fn position(&self, time: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.time == time)
    }

    /// Largest absolute offset over every row and every moon.
    pub fn max_abs(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.positions.max_abs())
            .fold(0.0, f64::max)
    }
}

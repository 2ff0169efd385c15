//! Headless core of the Galilean moon clock.
//!
//! Loads an ephemeris of Io, Europa, Ganymede and Callisto offsets from
//! Jupiter, picks the row for the current minute and draws it onto any
//! [`Surface`]: a snapshot of the system along one axis, a strip per moon
//! showing the whole table, and the header text. Platform glue (canvas,
//! fetch, timers) lives in `jovian-web`.

pub mod api;
pub mod core;
pub mod ephemeris;
pub mod error;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::clock::{Clock, FrameReport, RenderTargets};
pub use api::config::{ClockConfig, LookupConfig};
pub use api::types::{Moon, Palette, JUPITER_COLOR};
pub use core::time::{RefreshConfig, RefreshSchedule, TickAction};
pub use ephemeris::{
    minute_key, Dataset, Entry, EphemerisSource, EphemerisState, Events, Lookup, LookupPolicy,
    Positions, TimeBasis,
};
pub use error::ClockError;
pub use renderer::{fit_span, DrawList, DrawOp, Rgb, Surface, TextAlign, TextStyle, ViewScale};
pub use systems::{
    header_for, render_snapshot, render_timeline, HeaderText, SnapshotLayout, SnapshotStyle,
    TimelineMode, TimelineStyle,
};

//! Ephemeris data model, lookup and the loader-side state container.

pub mod dataset;
pub mod lookup;
pub mod source;
pub mod state;

pub use dataset::{Dataset, Entry, Events, Positions};
pub use lookup::{minute_key, Lookup, LookupPolicy, TimeBasis, MINUTE_KEY_FORMAT};
pub use source::EphemerisSource;
pub use state::EphemerisState;

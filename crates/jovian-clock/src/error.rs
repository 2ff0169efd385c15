use std::fmt::Display;

use thiserror::Error;

/// Errors surfaced by the clock core.
#[derive(Debug, Error)]
pub enum ClockError {
    /// The ephemeris could not be fetched or parsed. Callers keep the last
    /// good dataset and try again on the next refresh tick.
    #[error("ephemeris data unavailable: {0}")]
    DataUnavailable(String),

    /// The host page handed us a configuration we could not parse.
    #[error("invalid clock configuration: {0}")]
    InvalidConfig(String),

    /// A page element the clock needs is missing or of the wrong kind.
    #[error("cannot bind to page: {0}")]
    Binding(String),
}

impl ClockError {
    pub fn data_unavailable(reason: impl Display) -> Self {
        Self::DataUnavailable(reason.to_string())
    }

    pub fn invalid_config(reason: impl Display) -> Self {
        Self::InvalidConfig(reason.to_string())
    }

    pub fn binding(reason: impl Display) -> Self {
        Self::Binding(reason.to_string())
    }

    /// True for the recoverable, log-and-continue class of failure.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable(_))
    }
}

pub type Result<T, E = ClockError> = std::result::Result<T, E>;

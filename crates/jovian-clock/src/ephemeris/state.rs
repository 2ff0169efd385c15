use std::sync::Arc;

use super::dataset::Dataset;
use crate::error::Result;

/// Holds the last good ephemeris snapshot.
///
/// The snapshot is swapped whole; readers clone the `Arc` and keep drawing
/// from it even if a refresh lands in between.
#[derive(Debug, Default)]
pub struct EphemerisState {
    current: Option<Arc<Dataset>>,
    /// Bumped on every successful replacement.
    generation: u32,
    /// Consecutive failed loads since the last success.
    failures: u32,
}

impl EphemerisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<Dataset>> {
        self.current.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Install a freshly loaded dataset.
    pub fn replace(&mut self, dataset: Dataset) {
        log::info!(
            "ephemeris loaded: {} rows ({} .. {})",
            dataset.len(),
            dataset.first().time,
            dataset.entries()[dataset.len() - 1].time,
        );
        self.current = Some(Arc::new(dataset));
        self.generation = self.generation.wrapping_add(1);
        self.failures = 0;
    }

    /// Apply the outcome of a load. Failures are logged and leave the held
    /// snapshot untouched. Returns true if the dataset changed.
    pub fn apply(&mut self, outcome: Result<Dataset>) -> bool {
        match outcome {
            Ok(dataset) => {
                self.replace(dataset);
                true
            }
            Err(err) => {
                self.failures = self.failures.saturating_add(1);
                if self.is_loaded() {
                    log::warn!("{err}; keeping previous ephemeris");
                } else {
                    log::warn!("{err}; nothing to draw yet");
                }
                false
            }
        }
    }
}

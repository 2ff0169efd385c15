use chrono::{DateTime, Utc};
use jovian_clock::{Clock, ClockError, Dataset, FrameReport, RenderTargets, Surface, TickAction};

use crate::bindings::DomBindings;

/// Wires a [`Clock`] to the page it draws on.
///
/// A single instance lives in a `thread_local!` in `lib.rs`, because
/// wasm-bindgen exports are free functions and the interval/resize
/// callbacks need somewhere to find it.
pub struct ClockRunner {
    clock: Clock,
    dom: DomBindings,
}

impl ClockRunner {
    pub fn new(clock: Clock, dom: DomBindings) -> Self {
        Self { clock, dom }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// URL for a load started now.
    pub fn request_url(&self, now: DateTime<Utc>) -> String {
        self.clock.request_url(now)
    }

    pub fn apply_load(&mut self, outcome: Result<Dataset, ClockError>) -> bool {
        let changed = self.clock.apply_load(outcome);
        let state = self.clock.state();
        if changed {
            log::debug!("ephemeris generation {}", state.generation());
        } else if state.failures() > 1 {
            log::warn!("{} consecutive ephemeris loads failed", state.failures());
        }
        changed
    }

    pub fn tick(&mut self) -> TickAction {
        self.clock.tick()
    }

    /// Resize the main canvas. The next render fills the new dimensions.
    pub fn resize_main(&mut self, width: u32, height: u32) {
        self.dom.main.resize(width, height);
        log::debug!("viewport resized: canvas {width}x{height}");
    }

    /// Redraw every view and the header for `now`. Returns false when there
    /// is nothing to draw yet.
    pub fn render(&mut self, now: DateTime<Utc>) -> bool {
        for strip in self.dom.timelines.iter_mut().flatten() {
            strip.fit_to_client();
        }

        let report = {
            let mut targets = RenderTargets {
                snapshot: Some(&mut self.dom.main as &mut dyn Surface),
                timelines: self
                    .dom
                    .timelines
                    .each_mut()
                    .map(|slot| slot.as_mut().map(|s| s as &mut dyn Surface)),
            };
            self.clock.render(now, &mut targets)
        };

        match report {
            Some(report) => {
                self.update_header(&report);
                true
            }
            None => false,
        }
    }

    fn update_header(&self, report: &FrameReport) {
        if let Some(el) = &self.dom.timestamp {
            el.set_text_content(Some(&report.header.timestamp));
        }
        if let Some(el) = &self.dom.warnings {
            el.set_text_content(Some(&report.header.warnings));
        }
    }
}

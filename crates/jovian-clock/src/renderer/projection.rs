//! Arcsecond → pixel mapping for the 1-D orbit projection.
//!
//! Moons are drawn on a single horizontal line through Jupiter, the way
//! Galileo logged them. The view half-width (`span`, arcsec) adapts to the
//! widest offset being shown but never shrinks below a floor.

use glam::DVec2;

/// Smallest half-view, in arcseconds.
pub const MIN_SPAN_ARCSEC: f64 = 300.0;

/// Adaptive half-width in arcseconds: `max(floor, margin × max_abs)`.
pub fn fit_span(max_abs: f64, margin: f64, floor: f64) -> f64 {
    let wanted = max_abs.abs() * margin;
    if wanted.is_finite() {
        floor.max(wanted)
    } else {
        floor
    }
}

/// Horizontal projection for one surface at one span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewScale {
    /// Half-view width in arcseconds.
    pub span: f64,
    /// Surface width in pixels.
    pub width: f64,
    /// Fraction of the width that one `span` occupies from the center.
    pub reach: f64,
}

impl ViewScale {
    pub fn new(span: f64, width: f64, reach: f64) -> Self {
        Self { span, width, reach }
    }

    /// Pixel x of Jupiter (0 arcsec).
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Pixels per arcsecond.
    pub fn px_per_arcsec(&self) -> f64 {
        self.width * self.reach / self.span
    }

    /// `center_x + (arcsec / span) × (width × reach)`.
    pub fn x_to_px(&self, arcsec: f64) -> f64 {
        self.center_x() + (arcsec / self.span) * (self.width * self.reach)
    }

    /// Point on the baseline at `arcsec`.
    pub fn point(&self, arcsec: f64, baseline_y: f64) -> DVec2 {
        DVec2::new(self.x_to_px(arcsec), baseline_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_respects_floor() {
        assert_eq!(fit_span(40.0, 1.4, MIN_SPAN_ARCSEC), 300.0);
        assert_eq!(fit_span(0.0, 1.4, MIN_SPAN_ARCSEC), 300.0);
    }

    #[test]
    fn span_grows_with_widest_moon() {
        let span = fit_span(1000.0, 1.4, MIN_SPAN_ARCSEC);
        assert!((span - 1400.0).abs() < 1e-9);
    }

    #[test]
    fn span_invariants_hold_over_a_sweep() {
        let mut v = 0.0;
        while v < 2000.0 {
            let span = fit_span(v, 1.4, MIN_SPAN_ARCSEC);
            assert!(span >= MIN_SPAN_ARCSEC);
            assert!(span >= 1.4 * v - 1e-9, "span {span} too small for {v}");
            v += 7.3;
        }
    }

    #[test]
    fn non_finite_offsets_fall_back_to_floor() {
        assert_eq!(fit_span(f64::INFINITY, 1.4, MIN_SPAN_ARCSEC), 300.0);
        assert_eq!(fit_span(f64::NAN, 1.4, MIN_SPAN_ARCSEC), 300.0);
    }

    #[test]
    fn zero_maps_to_center() {
        for width in [0.0, 1.0, 640.0, 1921.0] {
            let view = ViewScale::new(300.0, width, 0.42);
            assert_eq!(view.x_to_px(0.0), width / 2.0);
        }
    }

    #[test]
    fn mapping_is_monotonic() {
        let view = ViewScale::new(450.0, 1280.0, 0.42);
        let mut last = f64::NEG_INFINITY;
        for i in -100..=100 {
            let x = view.x_to_px(i as f64 * 10.0);
            assert!(x > last);
            last = x;
        }
    }

    #[test]
    fn span_edge_lands_at_reach() {
        let view = ViewScale::new(300.0, 1000.0, 0.42);
        assert!((view.x_to_px(300.0) - 920.0).abs() < 1e-9);
        assert!((view.x_to_px(-300.0) - 80.0).abs() < 1e-9);
    }
}

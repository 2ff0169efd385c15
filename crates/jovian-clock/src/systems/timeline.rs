//! Per-moon strips showing every dataset row, with "now" highlighted.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::api::types::{Moon, Palette};
use crate::ephemeris::dataset::Dataset;
use crate::renderer::color::Rgb;
use crate::renderer::projection::{fit_span, ViewScale, MIN_SPAN_ARCSEC};
use crate::renderer::traits::Surface;

/// How a row's horizontal position is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineMode {
    /// By the moon's angular offset; rows cluster where the moon was.
    #[default]
    Positional,
    /// By ordinal index; rows are evenly spaced in time.
    Temporal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    pub mode: TimelineMode,
    pub span_floor: f64,
    /// Headroom over the widest offset in the whole dataset.
    pub span_margin: f64,
    pub reach: f64,
    pub dot_radius: f64,
    pub current_radius: f64,
    /// Opacity of history dots' halo; 0 draws bare dots.
    pub dot_glow_alpha: f64,
    pub now_line_color: Rgb,
    pub now_line_width: f64,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            mode: TimelineMode::Positional,
            span_floor: MIN_SPAN_ARCSEC,
            span_margin: 1.2,
            reach: 0.45,
            dot_radius: 3.0,
            current_radius: 6.0,
            dot_glow_alpha: 0.0,
            now_line_color: Rgb::new(0xFF, 0x6B, 0x6B),
            now_line_width: 1.0,
        }
    }
}

/// Half-view shared by all four strips: fitted to every row of every moon
/// so the strips line up with each other.
pub fn timeline_span(dataset: &Dataset, style: &TimelineStyle) -> f64 {
    fit_span(dataset.max_abs(), style.span_margin, style.span_floor)
}

/// Maps rows of one dataset onto one strip.
#[derive(Debug, Clone, Copy)]
pub struct TimelineLayout {
    mode: TimelineMode,
    view: ViewScale,
    rows: usize,
}

impl TimelineLayout {
    pub fn new(dataset: &Dataset, width: f64, style: &TimelineStyle) -> Self {
        Self {
            mode: style.mode,
            view: ViewScale::new(timeline_span(dataset, style), width, style.reach),
            rows: dataset.len(),
        }
    }

    /// Horizontal pixel for row `index`, whose offset is `arcsec`.
    pub fn row_x(&self, index: usize, arcsec: f64) -> f64 {
        match self.mode {
            TimelineMode::Positional => self.view.x_to_px(arcsec),
            TimelineMode::Temporal => index as f64 / self.rows as f64 * self.view.width,
        }
    }
}

/// Redraw the strip for `moon`. `current` is the index of the row matching
/// now (see [`Dataset::lookup`]). Returns the x of the "now" line.
pub fn render_timeline(
    surface: &mut dyn Surface,
    moon: Moon,
    dataset: &Dataset,
    current: usize,
    style: &TimelineStyle,
    palette: &Palette,
) -> f64 {
    surface.clear();

    let size = surface.size();
    let layout = TimelineLayout::new(dataset, size.x, style);
    let mid_y = size.y / 2.0;
    let color = palette.moon(moon);

    for (i, row) in dataset.entries().iter().enumerate() {
        let at = DVec2::new(layout.row_x(i, row.positions.get(moon)), mid_y);
        if style.dot_glow_alpha > 0.0 {
            surface.glow(at, style.dot_radius * 3.0, color, style.dot_glow_alpha);
        }
        surface.disc(at, style.dot_radius, color);
    }

    let current = current.min(dataset.len() - 1);
    let now_arcsec = dataset.entries()[current].positions.get(moon);
    let now_x = layout.row_x(current, now_arcsec);

    surface.disc(DVec2::new(now_x, mid_y), style.current_radius, Rgb::WHITE);
    surface.disc(DVec2::new(now_x, mid_y), style.current_radius * 0.6, color);
    surface.line(
        DVec2::new(now_x, 0.0),
        DVec2::new(now_x, size.y),
        style.now_line_color,
        style.now_line_width,
    );
    now_x
}

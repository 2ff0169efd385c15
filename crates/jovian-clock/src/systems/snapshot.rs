//! The "modern view": Jupiter and its moons strung along one horizontal line.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::api::types::{Moon, Palette};
use crate::ephemeris::dataset::Entry;
use crate::renderer::color::Rgb;
use crate::renderer::projection::{fit_span, ViewScale, MIN_SPAN_ARCSEC};
use crate::renderer::traits::{Surface, TextAlign, TextStyle};

/// Layout and sprite sizes for the snapshot view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotStyle {
    /// Minimum half-view in arcseconds.
    pub span_floor: f64,
    /// Headroom multiplier over the widest moon.
    pub span_margin: f64,
    /// Fraction of the width one span occupies from the center.
    pub reach: f64,
    /// Baseline height as a fraction of surface height.
    pub baseline: f64,
    pub jupiter_radius: f64,
    pub jupiter_glow_radius: f64,
    pub moon_radius: f64,
    pub moon_glow_radius: f64,
    /// Opacity at the center of each halo.
    pub glow_alpha: f64,
    pub label: TextStyle,
    /// Label baseline distance above the body center.
    pub label_offset: f64,
    pub scale_bar: ScaleBarStyle,
}

impl Default for SnapshotStyle {
    fn default() -> Self {
        Self {
            span_floor: MIN_SPAN_ARCSEC,
            span_margin: 1.4,
            reach: 0.42,
            baseline: 0.55,
            jupiter_radius: 50.0,
            jupiter_glow_radius: 140.0,
            moon_radius: 18.0,
            moon_glow_radius: 55.0,
            glow_alpha: f64::from(0x55_u8) / 255.0,
            label: TextStyle::default(),
            label_offset: 40.0,
            scale_bar: ScaleBarStyle::default(),
        }
    }
}

/// Calibration bar in the lower-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleBarStyle {
    pub visible: bool,
    /// Bar length as a fraction of the current span.
    pub fraction: f64,
    /// Distance from the left and bottom edges, in pixels.
    pub inset: f64,
    pub color: Rgb,
    pub width: f64,
    pub label: TextStyle,
}

impl Default for ScaleBarStyle {
    fn default() -> Self {
        Self {
            visible: true,
            fraction: 0.1,
            inset: 24.0,
            color: Rgb::new(0xB0, 0xB0, 0xB0),
            width: 2.0,
            label: TextStyle {
                font: "13px sans-serif".to_string(),
                color: Rgb::new(0xB0, 0xB0, 0xB0),
                align: TextAlign::Left,
            },
        }
    }
}

/// Where everything landed in the last snapshot draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotLayout {
    pub view: ViewScale,
    pub jupiter: DVec2,
    /// Body centers indexed by [`Moon::index`].
    pub moons: [DVec2; Moon::COUNT],
    /// Arcseconds represented by the scale bar, when drawn.
    pub scale_bar_arcsec: Option<f64>,
}

/// Half-view for a single entry.
pub fn snapshot_span(entry: &Entry, style: &SnapshotStyle) -> f64 {
    fit_span(entry.positions.max_abs(), style.span_margin, style.span_floor)
}

/// Repaint `surface` with `entry`.
pub fn render_snapshot(
    surface: &mut dyn Surface,
    entry: &Entry,
    style: &SnapshotStyle,
    palette: &Palette,
) -> SnapshotLayout {
    surface.clear();

    let size = surface.size();
    let view = ViewScale::new(snapshot_span(entry, style), size.x, style.reach);
    let baseline = size.y * style.baseline;

    let jupiter = view.point(0.0, baseline);
    surface.glow(jupiter, style.jupiter_glow_radius, palette.jupiter, style.glow_alpha);
    surface.disc(jupiter, style.jupiter_radius, palette.jupiter);

    let mut moons = [DVec2::ZERO; Moon::COUNT];
    for (moon, arcsec) in entry.positions.iter() {
        let at = view.point(arcsec, baseline);
        let color = palette.moon(moon);
        surface.glow(at, style.moon_glow_radius, color, style.glow_alpha);
        surface.disc(at, style.moon_radius, color);
        surface.text(at - DVec2::new(0.0, style.label_offset), moon.name(), &style.label);
        moons[moon.index()] = at;
    }

    let scale_bar_arcsec = if style.scale_bar.visible {
        Some(draw_scale_bar(surface, &view, &style.scale_bar))
    } else {
        None
    };

    SnapshotLayout {
        view,
        jupiter,
        moons,
        scale_bar_arcsec,
    }
}

fn draw_scale_bar(surface: &mut dyn Surface, view: &ViewScale, style: &ScaleBarStyle) -> f64 {
    let arcsec = view.span * style.fraction;
    let length = arcsec * view.px_per_arcsec();
    let y = surface.height() - style.inset;
    let from = DVec2::new(style.inset, y);
    let to = DVec2::new(style.inset + length, y);

    surface.line(from, to, style.color, style.width);
    // End ticks
    for x in [from.x, to.x] {
        surface.line(DVec2::new(x, y - 4.0), DVec2::new(x, y + 4.0), style.color, style.width);
    }
    surface.text(from - DVec2::new(0.0, 8.0), &format!("{arcsec:.0}\u{2033}"), &style.label);
    arcsec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::dataset::Positions;
    use crate::renderer::draw_list::{DrawList, DrawOp};

    fn entry(io: f64, europa: f64, ganymede: f64, callisto: f64) -> Entry {
        Entry::new("2024-01-01 00:00", Positions::new(io, europa, ganymede, callisto))
    }

    #[test]
    fn small_offsets_use_span_floor() {
        let e = entry(10.0, -20.0, 30.0, -40.0);
        assert_eq!(snapshot_span(&e, &SnapshotStyle::default()), 300.0);
    }

    #[test]
    fn wide_offsets_expand_span() {
        let e = entry(100.0, -400.0, 650.0, -1000.0);
        let span = snapshot_span(&e, &SnapshotStyle::default());
        assert!((span - 1400.0).abs() < 1e-9);
    }

    #[test]
    fn jupiter_sits_at_center_on_baseline() {
        let mut list = DrawList::new(1000.0, 400.0);
        let layout = render_snapshot(
            &mut list,
            &entry(10.0, -20.0, 30.0, -40.0),
            &SnapshotStyle::default(),
            &Palette::default(),
        );
        assert!((layout.jupiter - DVec2::new(500.0, 220.0)).length() < 1e-9);
        for p in layout.moons {
            assert_eq!(p.y, layout.jupiter.y);
        }
    }

    #[test]
    fn moons_are_placed_by_offset() {
        let mut list = DrawList::new(1000.0, 400.0);
        let layout = render_snapshot(
            &mut list,
            &entry(300.0, -300.0, 0.0, 150.0),
            &SnapshotStyle::default(),
            &Palette::default(),
        );
        // span 420: 1.4 × 300
        let px = |v: f64| 500.0 + v / 420.0 * 420.0;
        assert!((layout.moons[Moon::Io.index()].x - px(300.0)).abs() < 1e-9);
        assert!((layout.moons[Moon::Europa.index()].x - px(-300.0)).abs() < 1e-9);
        assert!((layout.moons[Moon::Ganymede.index()].x - 500.0).abs() < 1e-9);
        assert!(layout.moons[Moon::Callisto.index()].x > 500.0);
    }

    #[test]
    fn draws_bodies_then_labels_in_canonical_order() {
        let mut list = DrawList::new(800.0, 300.0);
        let style = SnapshotStyle {
            scale_bar: ScaleBarStyle { visible: false, ..Default::default() },
            ..Default::default()
        };
        render_snapshot(&mut list, &entry(1.0, 2.0, 3.0, 4.0), &style, &Palette::default());

        assert_eq!(list.clears(), 1);
        assert_eq!(list.glows().count(), 5);
        assert_eq!(list.discs().count(), 5);
        let labels: Vec<_> = list.texts().map(|(_, t)| t).collect();
        assert_eq!(labels, ["Io", "Europa", "Ganymede", "Callisto"]);

        // Jupiter first, halo under disc.
        assert!(matches!(list.ops()[0], DrawOp::Glow { radius, .. } if radius == 140.0));
        assert!(matches!(list.ops()[1], DrawOp::Disc { radius, .. } if radius == 50.0));
    }

    #[test]
    fn labels_sit_above_their_moon() {
        let mut list = DrawList::new(800.0, 300.0);
        let layout = render_snapshot(
            &mut list,
            &entry(50.0, -60.0, 70.0, -80.0),
            &SnapshotStyle::default(),
            &Palette::default(),
        );
        let (at, _) = list.texts().find(|(_, t)| *t == "Ganymede").unwrap();
        let body = layout.moons[Moon::Ganymede.index()];
        assert_eq!(at, body - DVec2::new(0.0, 40.0));
    }

    #[test]
    fn moons_use_palette_colors() {
        let mut list = DrawList::new(800.0, 300.0);
        render_snapshot(&mut list, &entry(1.0, 2.0, 3.0, 4.0), &SnapshotStyle::default(), &Palette::default());
        let colors: Vec<_> = list.discs().skip(1).map(|(_, _, c)| c).collect();
        let expected: Vec<_> = Moon::ALL.iter().map(|m| m.color()).collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn scale_bar_reports_tenth_of_span() {
        let mut list = DrawList::new(1000.0, 400.0);
        let layout = render_snapshot(
            &mut list,
            &entry(10.0, -20.0, 30.0, -40.0),
            &SnapshotStyle::default(),
            &Palette::default(),
        );
        let arcsec = layout.scale_bar_arcsec.unwrap();
        assert!((arcsec - 30.0).abs() < 1e-9);
        assert!(list.texts().any(|(_, t)| t == "30\u{2033}"));

        let (from, to) = list.lines().next().unwrap();
        // 0.1 × width × reach
        assert!(((to.x - from.x) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn redraw_after_resize_uses_new_dimensions() {
        let e = entry(10.0, -20.0, 30.0, -40.0);
        let style = SnapshotStyle::default();
        let mut list = DrawList::new(1000.0, 400.0);
        render_snapshot(&mut list, &e, &style, &Palette::default());

        list.resize(320.0, 176.0);
        let layout = render_snapshot(&mut list, &e, &style, &Palette::default());
        assert_eq!(layout.jupiter.x, 160.0);
        assert_eq!(list.clears(), 2);
    }

    #[test]
    fn zero_sized_surface_does_not_panic() {
        let mut list = DrawList::new(0.0, 0.0);
        let layout = render_snapshot(
            &mut list,
            &entry(10.0, -20.0, 30.0, -40.0),
            &SnapshotStyle::default(),
            &Palette::default(),
        );
        assert_eq!(layout.jupiter, DVec2::ZERO);
    }
}

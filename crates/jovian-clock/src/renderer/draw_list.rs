use glam::DVec2;

use super::color::Rgb;
use super::traits::{Surface, TextStyle};

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Glow { center: DVec2, radius: f64, color: Rgb, inner_alpha: f64 },
    Disc { center: DVec2, radius: f64, color: Rgb },
    Line { from: DVec2, to: DVec2, color: Rgb, width: f64 },
    Text { at: DVec2, text: String, style: TextStyle },
}

/// In-memory surface that records primitives instead of rasterizing them.
///
/// Useful for headless rendering (e.g. exporting a frame as vector data)
/// and for asserting on what the systems drew.
#[derive(Debug, Clone)]
pub struct DrawList {
    size: DVec2,
    ops: Vec<DrawOp>,
    /// How many times the surface was cleared.
    clears: u32,
}

impl DrawList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            ops: Vec::with_capacity(64),
            clears: 0,
        }
    }

    /// Change the surface dimensions, as a window resize would.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width, height);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn discs(&self) -> impl Iterator<Item = (DVec2, f64, Rgb)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Disc { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn glows(&self) -> impl Iterator<Item = (DVec2, f64, Rgb)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Glow { center, radius, color, .. } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (DVec2, &str)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { at, text, .. } => Some((*at, text.as_str())),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn backend(&self) -> &'static str {
        "draw-list"
    }

    fn size(&self) -> DVec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.clears += 1;
    }

    fn glow(&mut self, center: DVec2, radius: f64, color: Rgb, inner_alpha: f64) {
        self.ops.push(DrawOp::Glow { center, radius, color, inner_alpha });
    }

    fn disc(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.ops.push(DrawOp::Disc { center, radius, color });
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64) {
        self.ops.push(DrawOp::Line { from, to, color, width });
    }

    fn text(&mut self, at: DVec2, text: &str, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            at,
            text: text.to_string(),
            style: style.clone(),
        });
    }
}

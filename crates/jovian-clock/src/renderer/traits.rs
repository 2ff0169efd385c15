//! Drawing surface contract.
//!
//! The systems in this crate never touch a browser API. They issue a small
//! set of immediate-mode primitives against a [`Surface`]; the web crate
//! implements it over `CanvasRenderingContext2d`, tests use [`DrawList`].
//!
//! [`DrawList`]: super::draw_list::DrawList

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Horizontal anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// CSS `textAlign` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// CSS font shorthand, e.g. `18px sans-serif`.
    pub font: String,
    pub color: Rgb,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "18px sans-serif".to_string(),
            color: Rgb::WHITE,
            align: TextAlign::Center,
        }
    }
}

/// A 2D raster target with its origin at the top-left, y pointing down.
pub trait Surface {
    /// Backend identifier (e.g. "canvas2d", "draw-list").
    fn backend(&self) -> &'static str;

    /// Current size in pixels, `(width, height)`.
    fn size(&self) -> DVec2;

    /// Erase everything previously drawn.
    fn clear(&mut self);

    /// Soft radial halo: `color` at `inner_alpha` in the center fading to
    /// transparent at `radius`.
    fn glow(&mut self, center: DVec2, radius: f64, color: Rgb, inner_alpha: f64);

    /// Opaque filled circle.
    fn disc(&mut self, center: DVec2, radius: f64, color: Rgb);

    /// Straight stroked segment.
    fn line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64);

    /// Single-line text with its baseline at `at.y`.
    fn text(&mut self, at: DVec2, text: &str, style: &TextStyle);

    fn width(&self) -> f64 {
        self.size().x
    }

    fn height(&self) -> f64 {
        self.size().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_text_style_matches_label_font() {
        let style = TextStyle::default();
        assert_eq!(style.font, "18px sans-serif");
        assert_eq!(style.color, Rgb::WHITE);
        assert_eq!(style.align.as_css(), "center");
    }

    #[test]
    fn text_style_partial_json() {
        let style: TextStyle = serde_json::from_str(r#"{"align":"left"}"#).unwrap();
        assert_eq!(style.align, TextAlign::Left);
        assert_eq!(style.font, "18px sans-serif");
    }
}

use std::f64::consts::TAU;

use glam::DVec2;
use jovian_clock::{ClockError, Rgb, Surface, TextStyle};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`Surface`] over a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, ClockError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| ClockError::binding(format!("get_context failed: {e:?}")))?
            .ok_or_else(|| ClockError::binding("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClockError::binding("not a 2d context"))?;
        Ok(Self { canvas, ctx })
    }

    /// Set the backing store size in pixels. Clears the canvas.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Match the backing store to the element's laid-out size, for strips
    /// whose dimensions come from the surrounding CSS.
    pub fn fit_to_client(&mut self) {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        if width != self.canvas.width() || height != self.canvas.height() {
            self.resize(width, height);
        }
    }

    fn circle_path(&self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU) {
            log::warn!("canvas arc failed: {e:?}");
        }
    }
}

impl Surface for CanvasSurface {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn size(&self) -> DVec2 {
        DVec2::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x, size.y);
    }

    fn glow(&mut self, center: DVec2, radius: f64, color: Rgb, inner_alpha: f64) {
        let radius = radius.max(0.0);
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("canvas gradient failed: {e:?}");
                return;
            }
        };
        let stops = gradient
            .add_color_stop(0.0, &color.css(inner_alpha))
            .and_then(|_| gradient.add_color_stop(1.0, &color.css(0.0)));
        if let Err(e) = stops {
            log::warn!("canvas gradient stop failed: {e:?}");
            return;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn disc(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn text(&mut self, at: DVec2, text: &str, style: &TextStyle) {
        self.ctx.set_fill_style_str(&style.color.to_hex());
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align(style.align.as_css());
        if let Err(e) = self.ctx.fill_text(text, at.x, at.y) {
            log::warn!("canvas fill_text failed: {e:?}");
        }
    }
}

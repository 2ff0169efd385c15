//! Host-page configuration and the DOM elements the clock draws into.

use jovian_clock::{ClockConfig, ClockError, Moon, Surface};
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;

/// Ids of the page elements the clock binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Main `<canvas>` for the snapshot view.
    pub canvas: String,
    pub timestamp: String,
    pub warnings: String,
    /// Timeline strips live in `<prefix><Moon>`, e.g. `row-Io`.
    pub timeline_prefix: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            canvas: "jupiterCanvas".to_string(),
            timestamp: "timestamp".to_string(),
            warnings: "warnings".to_string(),
            timeline_prefix: "row-".to_string(),
        }
    }
}

impl ElementIds {
    pub fn timeline(&self, moon: Moon) -> String {
        format!("{}{}", self.timeline_prefix, moon.name())
    }
}

/// Everything `clock_start` accepts: the core clock settings plus page
/// bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    #[serde(flatten)]
    pub clock: ClockConfig,
    pub elements: ElementIds,
    /// Main canvas height as a fraction of the window's inner height.
    pub viewport_height_fraction: f64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            elements: ElementIds::default(),
            viewport_height_fraction: 0.55,
        }
    }
}

impl WebConfig {
    pub fn from_json(json: Option<&str>) -> Result<Self, ClockError> {
        match json.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => serde_json::from_str(json).map_err(ClockError::invalid_config),
        }
    }

    /// Main canvas size for a window of the given inner size.
    pub fn viewport_canvas_size(&self, inner_width: f64, inner_height: f64) -> (u32, u32) {
        let w = inner_width.max(0.0).floor() as u32;
        let h = (inner_height * self.viewport_height_fraction).max(0.0).floor() as u32;
        (w, h)
    }
}

/// Resolved page elements.
pub struct DomBindings {
    pub main: CanvasSurface,
    /// Indexed by [`Moon::index`]; `None` when the page has no strip for that moon.
    pub timelines: [Option<CanvasSurface>; Moon::COUNT],
    pub timestamp: Option<Element>,
    pub warnings: Option<Element>,
}

impl DomBindings {
    /// Look up every element in `ids`. Only the main canvas is required.
    pub fn bind(document: &Document, ids: &ElementIds) -> Result<Self, ClockError> {
        let main = document
            .get_element_by_id(&ids.canvas)
            .ok_or_else(|| ClockError::binding(format!("no element #{}", ids.canvas)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ClockError::binding(format!("#{} is not a canvas", ids.canvas)))?;
        let main = CanvasSurface::new(main)?;

        let mut timelines: [Option<CanvasSurface>; Moon::COUNT] = Default::default();
        for moon in Moon::ALL {
            let id = ids.timeline(moon);
            timelines[moon.index()] = match document.get_element_by_id(&id) {
                Some(row) => {
                    let canvas = strip_canvas(document, &row)
                        .map_err(|e| ClockError::binding(format!("#{id}: {e:?}")))?;
                    Some(CanvasSurface::new(canvas)?)
                }
                None => {
                    log::warn!("no #{id}; {moon} timeline disabled");
                    None
                }
            };
        }

        let strips = timelines.iter().flatten().count();
        log::info!(
            "bound #{} and {strips} timeline strip(s) via {}",
            ids.canvas,
            main.backend()
        );

        Ok(Self {
            main,
            timelines,
            timestamp: text_sink(document, &ids.timestamp),
            warnings: text_sink(document, &ids.warnings),
        })
    }
}

/// The canvas for a timeline row: the row itself if it is a canvas, else
/// the first canvas inside it, else a new one appended to it.
fn strip_canvas(document: &Document, row: &Element) -> Result<HtmlCanvasElement, JsValue> {
    if let Some(canvas) = row.dyn_ref::<HtmlCanvasElement>() {
        return Ok(canvas.clone());
    }
    if let Some(inner) = row.query_selector("canvas")? {
        if let Ok(canvas) = inner.dyn_into::<HtmlCanvasElement>() {
            return Ok(canvas);
        }
    }
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("canvas cast failed"))?;
    canvas.set_attribute("style", "width:100%;height:100%;display:block")?;
    row.append_child(&canvas)?;
    Ok(canvas)
}

fn text_sink(document: &Document, id: &str) -> Option<Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("no #{id}; its text will not be shown");
    }
    el
}

/// Window inner size in CSS pixels.
pub fn inner_size(window: &Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jovian_clock::TimelineMode;

    #[test]
    fn no_config_means_defaults() {
        assert_eq!(WebConfig::from_json(None).unwrap(), WebConfig::default());
        assert_eq!(WebConfig::from_json(Some("  ")).unwrap(), WebConfig::default());
    }

    #[test]
    fn clock_settings_are_flattened() {
        let cfg = WebConfig::from_json(Some(
            r#"{
                "source": { "url": "eph.json" },
                "timeline": { "mode": "temporal" },
                "elements": { "canvas": "sky" },
                "viewport_height_fraction": 0.5
            }"#,
        ))
        .unwrap();
        assert_eq!(cfg.clock.source.url, "eph.json");
        assert_eq!(cfg.clock.timeline.mode, TimelineMode::Temporal);
        assert_eq!(cfg.elements.canvas, "sky");
        assert_eq!(cfg.elements.timestamp, "timestamp");
        assert_eq!(cfg.viewport_height_fraction, 0.5);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(WebConfig::from_json(Some("{")).is_err());
    }

    #[test]
    fn timeline_ids_use_prefix() {
        let ids = ElementIds::default();
        assert_eq!(ids.timeline(Moon::Ganymede), "row-Ganymede");
    }

    #[test]
    fn viewport_canvas_is_width_by_fraction_of_height() {
        let cfg = WebConfig::default();
        assert_eq!(cfg.viewport_canvas_size(1280.0, 720.0), (1280, 396));
        assert_eq!(cfg.viewport_canvas_size(-5.0, 0.0), (0, 0));
    }
}

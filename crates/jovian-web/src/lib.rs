//! WASM bridge for the Galilean moon clock.
//!
//! `clock_start` binds the page, fetches the ephemeris and starts a fixed
//! interval timer. Everything runs on the browser's single event loop: the
//! fetch is the only thing that suspends, and it never holds the runner
//! across an `await`.

pub mod bindings;
pub mod canvas;
pub mod loader;
pub mod runner;

use std::cell::RefCell;

use chrono::Utc;
use jovian_clock::Clock;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use bindings::{DomBindings, ElementIds, WebConfig};
pub use canvas::CanvasSurface;
pub use runner::ClockRunner;

thread_local! {
    static RUNNER: RefCell<Option<ClockRunner>> = RefCell::new(None);
}

/// Run `f` against the runner; `None` before `clock_start`.
fn with_runner<R>(f: impl FnOnce(&mut ClockRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Bind the page and start the clock.
///
/// `config_json` is an optional JSON object; see `WebConfig`. Missing
/// fields take their defaults.
#[wasm_bindgen]
pub fn clock_start(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if with_runner(|_| ()).is_some() {
        return Err(JsValue::from_str("clock already started"));
    }

    let config = WebConfig::from_json(config_json.as_deref()).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let dom = DomBindings::bind(&document, &config.elements).map_err(js_error)?;
    let interval_ms = config.clock.refresh.interval_ms();
    let mut runner = ClockRunner::new(Clock::new(config.clock.clone()), dom);

    let (inner_w, inner_h) = bindings::inner_size(&window);
    let (w, h) = config.viewport_canvas_size(inner_w, inner_h);
    runner.resize_main(w, h);

    RUNNER.with(|cell| {
        install_then_store(cell, runner, || {
            install_resize_listener(&window, config.clone())?;
            install_interval(&window, interval_ms)
        })
    })?;

    wasm_bindgen_futures::spawn_local(reload());
    log::info!("jovian clock: started, redrawing every {interval_ms} ms");
    Ok(())
}

/// Run `install`, and only once it succeeds put `value` in `slot`. A failed
/// start leaves the slot empty so the host can call `clock_start` again.
fn install_then_store<T, E>(
    slot: &RefCell<Option<T>>,
    value: T,
    install: impl FnOnce() -> Result<(), E>,
) -> Result<(), E> {
    install()?;
    *slot.borrow_mut() = Some(value);
    Ok(())
}

/// Redraw immediately. Returns false if no dataset has been loaded yet.
#[wasm_bindgen]
pub fn clock_render_now() -> bool {
    with_runner(|r| r.render(Utc::now())).unwrap_or(false)
}

/// Whether an ephemeris is currently held.
#[wasm_bindgen]
pub fn clock_has_data() -> bool {
    with_runner(|r| r.clock().has_data()).unwrap_or(false)
}

/// Fetch the dataset and, if it changed, redraw.
async fn reload() {
    let Some(url) = with_runner(|r| r.request_url(Utc::now())) else {
        return;
    };
    log::debug!("fetching {url}");
    let outcome = loader::fetch_dataset(&url).await;
    let changed = with_runner(|r| r.apply_load(outcome)).unwrap_or(false);
    if changed {
        clock_render_now();
    }
}

fn on_tick() {
    let Some(action) = with_runner(|r| r.tick()) else {
        return;
    };
    if action.render {
        clock_render_now();
    }
    if action.reload {
        wasm_bindgen_futures::spawn_local(reload());
    }
}

fn install_interval(window: &web_sys::Window, interval_ms: i32) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(on_tick);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    // Lives for the page's lifetime.
    closure.forget();
    Ok(())
}

fn install_resize_listener(window: &web_sys::Window, config: WebConfig) -> Result<(), JsValue> {
    let target = window.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        let (inner_w, inner_h) = bindings::inner_size(&target);
        let (w, h) = config.viewport_canvas_size(inner_w, inner_h);
        // Resizing wipes the canvas; repaint rather than wait for the timer.
        with_runner(|r| {
            r.resize_main(w, h);
            r.render(Utc::now())
        });
    });
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

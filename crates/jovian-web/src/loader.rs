use jovian_clock::{ClockError, Dataset};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

fn unavailable(what: &str, err: JsValue) -> ClockError {
    ClockError::data_unavailable(format!("{what}: {err:?}"))
}

/// GET `url` and parse it as an ephemeris document.
///
/// Every failure (network, HTTP status, body, JSON) comes back as
/// `DataUnavailable`; the caller decides whether to keep old data.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, ClockError> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| unavailable("failed to create request", e))?;

    let window = web_sys::window().ok_or_else(|| ClockError::data_unavailable("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| unavailable("fetch failed", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ClockError::data_unavailable("response is not a Response"))?;

    if !resp.ok() {
        return Err(ClockError::data_unavailable(format!(
            "HTTP {} fetching {url}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text().map_err(|e| unavailable("failed to read body", e))?)
        .await
        .map_err(|e| unavailable("failed to read body", e))?;
    let body = text
        .as_string()
        .ok_or_else(|| ClockError::data_unavailable("response body is not text"))?;

    Dataset::from_json(&body)
}

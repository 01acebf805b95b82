use bugdle_core::{ClientConfig, DateError, PuzzleDate};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::constants::{BASE_URL_GLOBAL, CONFIG_GLOBAL};

/// Read a global set by the host page, skipping `undefined`/`null`.
fn window_global(window: &Window, name: &str) -> Option<JsValue> {
    let v = js_sys::Reflect::get(window, &JsValue::from_str(name)).ok()?;
    if v.is_undefined() || v.is_null() {
        None
    } else {
        Some(v)
    }
}

/// Build the client configuration from `window.__BUGDLE_CONFIG`, falling back
/// to `window.__BASE_URL` for the API base. Bad overrides are logged and the
/// defaults are used instead.
pub fn read_client_config(window: &Window) -> ClientConfig {
    let overrides = window_global(window, CONFIG_GLOBAL).and_then(|v| {
        js_sys::JSON::stringify(&v)
            .ok()
            .and_then(|s| s.as_string())
    });
    let base = window_global(window, BASE_URL_GLOBAL).and_then(|v| v.as_string());
    match ClientConfig::from_overrides(overrides.as_deref(), base.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            gloo::console::warn!(format!("ignoring {CONFIG_GLOBAL}: {e}"));
            ClientConfig {
                base_url: base.unwrap_or_else(|| "/".to_string()),
                ..ClientConfig::default()
            }
        }
    }
}

/// Convert any serializable value into a plain JS object.
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&text)
}

/// Best-effort human text for a thrown JS value.
pub fn js_error_text(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// The calendar day a JS `Date` falls on in the user's local time zone.
pub fn local_puzzle_date(date: &js_sys::Date) -> Result<PuzzleDate, DateError> {
    PuzzleDate::from_ymd(
        date.get_full_year() as i32,
        date.get_month() + 1,
        date.get_date(),
    )
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}

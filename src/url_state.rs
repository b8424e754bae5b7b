//! URL State Mirror
//!
//! The address bar is the external store for controller state: list pages
//! serialize their query into it on every change (via `replaceState`, so
//! filtering does not spam history) and read it back on mount. Navigation
//! between pages uses `pushState`.

use leptos::prelude::window;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

/// Read one query parameter from the current location. Empty values are
/// treated as absent.
pub fn query_param(name: &str) -> Option<String> {
    let search = window().location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|v| !v.is_empty())
}

pub fn pathname() -> String {
    window().location().pathname().unwrap_or_else(|_| "/".to_string())
}

fn encode_query(pairs: &[(&'static str, String)]) -> String {
    let params = match UrlSearchParams::new() {
        Ok(params) => params,
        Err(_) => return String::new(),
    };
    for (name, value) in pairs {
        params.append(name, value);
    }
    String::from(params.to_string())
}

/// Mirror the given query pairs onto the current path without adding a
/// history entry.
pub fn replace_query(pairs: &[(&'static str, String)]) {
    let query = encode_query(pairs);
    let path = pathname();
    let url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };
    if let Ok(history) = window().history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

/// Replace the current history entry with a bare path.
pub fn replace_url(path: &str) {
    if let Ok(history) = window().history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// Push a new location (path plus optional query) onto history.
pub fn push_url(path: &str, pairs: &[(&'static str, String)]) {
    let query = encode_query(pairs);
    let url = if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    };
    if let Ok(history) = window().history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

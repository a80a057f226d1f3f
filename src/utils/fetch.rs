//! GET requests for the search list, bounded by `FETCH_TIMEOUT_MS`.

use js_sys::{Array, Promise};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use crate::config::FETCH_TIMEOUT_MS;

/// Why a request produced no response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no browser window")]
    NoWindow,
    #[error("could not build request for {0}")]
    InvalidRequest(String),
    /// The promise rejected: offline, CORS, DNS.
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered {0}")]
    Status(u16),
    #[error("could not read response body")]
    Body,
    #[error("no answer within {0} ms")]
    Timeout(i32),
}

impl From<FetchError> for widgetry_core::SearchError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// Text of a rejected promise's reason.
///
/// `fetch` rejects with a `TypeError`, whose text lives in `message`.
pub fn rejection_message(reason: &JsValue) -> String {
    if let Some(err) = reason.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    reason
        .as_string()
        .unwrap_or_else(|| "request rejected".to_string())
}

/// Await `pending`, giving up after `timeout_ms`.
///
/// `Ok(None)` means the deadline won. The deadline timer is cleared either way.
async fn within_deadline(
    window: &Window,
    pending: Promise,
    timeout_ms: i32,
) -> Result<Option<JsValue>, JsValue> {
    let mut timer = None;
    let deadline = Promise::new(&mut |resolve, _reject| {
        timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms)
            .ok();
    });

    let winner = JsFuture::from(Promise::race(&Array::of2(&pending, &deadline))).await;
    if let Some(handle) = timer {
        window.clear_timeout_with_handle(handle);
    }

    // The deadline resolves with `undefined`; a response never does
    winner.map(|value| (!value.is_undefined()).then_some(value))
}

/// CORS GET of `url`, returning the body as text.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|_| FetchError::InvalidRequest(url.to_string()))?;

    let pending = window.fetch_with_request(&request);
    let response: Response = within_deadline(&window, pending, FETCH_TIMEOUT_MS)
        .await
        .map_err(|reason| FetchError::Network(rejection_message(&reason)))?
        .ok_or(FetchError::Timeout(FETCH_TIMEOUT_MS))?
        .dyn_into()
        .map_err(|_| FetchError::Body)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::Body)?;
    JsFuture::from(body)
        .await
        .ok()
        .and_then(|text| text.as_string())
        .ok_or(FetchError::Body)
}

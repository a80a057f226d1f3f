//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use widgetry_core::{History, Location, RouterMode};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Read the current location from the URL under `mode`.
pub fn current_location(mode: RouterMode) -> Location {
    let Some(window) = window() else {
        return Location::root();
    };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    mode.read(&pathname, &hash)
}

/// Push a history entry for `location` without reloading the page.
pub fn push_location(mode: RouterMode, location: &Location) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let href = mode.href(location);
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(&href))
            .is_err()
        {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("pushState rejected for {}", href).into());
        }
    }
}

/// The browser's history stack, read and written under a [`RouterMode`].
#[derive(Clone, Copy, Debug)]
pub struct BrowserHistory {
    mode: RouterMode,
}

impl BrowserHistory {
    pub fn new(mode: RouterMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RouterMode {
        self.mode
    }
}

impl History for BrowserHistory {
    fn current(&self) -> Location {
        current_location(self.mode)
    }

    fn push(&self, location: &Location) {
        push_location(self.mode, location);
    }
}

/// Call `handler` on every `event` dispatched to the window.
///
/// The listener stays registered for the lifetime of the page.
pub fn listen_window(event: &str, handler: impl Fn() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn()>);

    if let Some(window) = window() {
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

//! Leptos front-end for the widgetry demo.
//!
//! - [`app`] - Root component and shared navigation context
//! - [`components`] - Router, links, header and the demo widgets
//! - [`config`] - Compile-time configuration and embedded content
//! - [`utils`] - Browser history, fetch and HTML helpers

pub mod app;
pub mod components;
pub mod config;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Mount the application on the `#app` element.
pub fn start() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, app::App).forget();
}

//! Utility modules for browser, network and HTML operations.
//!
//! Provides:
//! - [`BrowserHistory`] - `window.history` behind the core `History` trait
//! - [`fetch_text`] - Network fetching with timeout
//! - [`sanitize_fragment`] - XSS sanitizing for third-party HTML

pub mod dom;
pub mod fetch;
mod html;

pub use dom::BrowserHistory;
pub use fetch::{FetchError, fetch_text, rejection_message};
pub use html::sanitize_fragment;

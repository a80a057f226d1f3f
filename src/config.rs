//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site content is loaded at compile time using `include_str!`.

use std::time::Duration;

use widgetry_core::{ContentError, RouterMode, SiteContent};

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Navigation entries, accordion items, dropdown options and search defaults.
pub const SITE_CONTENT: &str = include_str!("../assets/content.toml");

/// Parse the embedded site content.
pub fn site_content() -> Result<SiteContent, ContentError> {
    SiteContent::from_toml(SITE_CONTENT)
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "widgetry";

// =============================================================================
// Routing
// =============================================================================

/// How the location is stored in the URL.
///
/// `Path` gives clean URLs but needs the host to serve `index.html` for
/// every path; switch to `Hash` for plain static hosting.
pub const ROUTER_MODE: RouterMode = RouterMode::Path;

// =============================================================================
// Search Configuration
// =============================================================================

/// Wikipedia API endpoint queried by the search list.
pub const SEARCH_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Base URL of result links (`?curid=<pageid>` is appended).
pub const ARTICLE_BASE_URL: &str = "https://en.wikipedia.org";

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(SEARCH_DEBOUNCE_MS);

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

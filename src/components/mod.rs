//! UI components built with Leptos.
//!
//! - [`router`] - Exact-match routes driven by navigation events
//! - [`link`] - In-app navigation links
//! - [`header`] - Page header with the navigation menu
//! - [`accordion`], [`dropdown`], [`search`] - Demo widgets
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod accordion;
pub mod dropdown;
pub mod header;
pub mod icons;
pub mod link;
pub mod router;
pub mod search;

pub use accordion::Accordion;
pub use dropdown::Dropdown;
pub use header::Header;
pub use link::Link;
pub use router::{Route, use_location};
pub use search::SearchList;

//! Platform-independent state for the widgetry front-end.
//!
//! Everything in this crate runs on the host as well as in the browser:
//!
//! - [`location`] - Logical application paths and how they map to URLs
//! - [`router`] - Exact-match route table
//! - [`nav`] - Navigation bus, history abstraction and [`Navigator`]
//! - [`link`] - Link click classification
//! - [`debounce`] - Debouncer and latest-wins request sequencing
//! - [`search`] - Search query building and response decoding
//! - [`dropdown`], [`accordion`] - Widget state machines
//! - [`content`] - Embedded site content (navigation, items, options)

pub mod accordion;
pub mod content;
pub mod debounce;
pub mod dropdown;
pub mod error;
pub mod link;
pub mod location;
pub mod nav;
pub mod router;
pub mod search;

pub use accordion::{AccordionItem, AccordionState};
pub use content::{DropdownContent, NavEntry, SearchContent, SiteContent};
pub use debounce::{Debouncer, RequestSequence, RequestTicket, Ticket};
pub use dropdown::{ClickOrigin, DropdownState, SelectOption, menu_options};
pub use error::{ContentError, SearchError};
pub use link::{ClickModifiers, LinkOutcome};
pub use location::{Location, RouterMode};
pub use nav::{History, MemoryHistory, NavigationBus, Navigator, Subscription};
pub use router::RouteTable;
pub use search::{SearchHit, SearchQuery, SearchResults, parse_response};

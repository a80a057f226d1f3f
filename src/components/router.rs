//! Client-side routing.
//!
//! Each [`Route`] subscribes to the navigation bus while it is mounted and
//! renders its children only when its path equals the current location.
//!
//! # Architecture
//!
//! - **Browser history is the source of truth**: routes read it on mount
//! - **Navigation events carry the new location**: links and the
//!   `popstate` listener broadcast it, every mounted route re-evaluates
//! - **Subscriptions follow component lifetime**: dropped on cleanup

use leptos::prelude::*;
use widgetry_core::{Location, Subscription};

use crate::app::NavContext;

/// Track the current location for as long as the calling component lives.
///
/// Subscribes to the navigation bus and releases the subscription when the
/// owning component is cleaned up.
pub fn use_location() -> ReadSignal<Location> {
    let nav = expect_context::<NavContext>();
    let navigator = nav.navigator();

    let (location, set_location) = signal(navigator.current());
    let subscription = navigator.subscribe(move |loc| set_location.set(loc.clone()));

    let held: StoredValue<Option<Subscription>, LocalStorage> =
        StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        if let Some(Some(subscription)) = held.try_update_value(Option::take) {
            subscription.unsubscribe();
        }
    });

    location
}

/// Renders `children` iff `path` exactly equals the current location.
///
/// There is no prefix matching: `<Route path="/">` is inactive at `/list`.
#[component]
pub fn Route(#[prop(into)] path: String, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| location.with(|loc| loc.matches(&path)));

    view! {
        <Show when=move || active.get()>
            {children()}
        </Show>
    }
}

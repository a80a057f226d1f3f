//! In-app navigation link.

use leptos::prelude::*;
use widgetry_core::{ClickModifiers, LinkOutcome, Location};

use crate::app::NavContext;

/// Anchor that navigates without reloading the page.
///
/// A plain click suppresses the browser's own navigation, then pushes `href`
/// onto the history and notifies every [`Route`](super::Route). Cmd- or ctrl-clicks are left to the browser so
/// the link opens in a new tab.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let target = Location::new(href);
    let mode = nav.navigator().history().mode();
    let url = mode.href(&target);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let modifiers = ClickModifiers {
            meta: ev.meta_key(),
            ctrl: ev.ctrl_key(),
        };
        let outcome = nav
            .navigator()
            .follow(modifiers, &target, || ev.prevent_default());
        if outcome == LinkOutcome::Handled {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::debug_1(&format!("navigate {}", target).into());
        }
    };

    view! {
        <a href=url class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}

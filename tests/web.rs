//! Browser tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, MouseEvent, MouseEventInit};
use widgetry::app::NavContext;
use widgetry::components::{Dropdown, Link, Route};
use widgetry::utils::dom::current_location;
use widgetry::utils::{BrowserHistory, rejection_message};
use widgetry_core::{
    ClickModifiers, History, LinkOutcome, Location, Navigator, RouterMode, SelectOption,
};

wasm_bindgen_test_configure!(run_in_browser);

/// Let effects run and the DOM catch up.
async fn settle() {
    TimeoutFuture::new(20).await;
}

fn body() -> HtmlElement {
    web_sys::window().unwrap().document().unwrap().body().unwrap()
}

/// Empty `<div>` appended to the body, for one test's component.
fn fresh_container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    body().append_child(&container).unwrap();
    container
}

fn find(root: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .unwrap()
        .map(|el| el.unchecked_into())
}

fn color(label: &str, value: &str) -> SelectOption {
    SelectOption {
        label: label.to_string(),
        value: value.to_string(),
    }
}

#[wasm_bindgen_test]
fn hash_history_push_updates_url() {
    let history = BrowserHistory::new(RouterMode::Hash);
    history.push(&Location::new("/list"));

    assert_eq!(history.current().as_str(), "/list");
    let hash = web_sys::window().unwrap().location().hash().unwrap();
    assert_eq!(hash, "#/list");
}

#[wasm_bindgen_test]
fn navigator_broadcasts_pushed_location() {
    let navigator = Navigator::new(BrowserHistory::new(RouterMode::Hash));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let seen = Rc::clone(&seen);
        navigator.subscribe(move |loc| seen.borrow_mut().push(loc.clone()))
    };

    let outcome = navigator.follow(ClickModifiers::default(), &Location::new("/dropdown"), || {});
    assert_eq!(outcome, LinkOutcome::Handled);
    assert_eq!(*seen.borrow(), vec![Location::new("/dropdown")]);
    assert_eq!(current_location(RouterMode::Hash).as_str(), "/dropdown");
}

#[wasm_bindgen_test]
fn modifier_click_does_not_push() {
    let navigator = Navigator::new(BrowserHistory::new(RouterMode::Hash));
    navigator.navigate(&Location::root());

    let ctrl = ClickModifiers {
        meta: false,
        ctrl: true,
    };
    assert_eq!(
        navigator.follow(ctrl, &Location::new("/list"), || {}),
        LinkOutcome::Default
    );
    assert_eq!(current_location(RouterMode::Hash), Location::root());
}

#[wasm_bindgen_test]
fn sanitizes_snippet_markup() {
    let clean = widgetry::utils::sanitize_fragment(r#"<b onclick="x()">hi</b>"#);
    assert_eq!(clean, "<b>hi</b>");
}

#[wasm_bindgen_test]
fn rejection_message_reads_type_errors() {
    let type_error: JsValue = js_sys::TypeError::new("Failed to fetch").into();
    assert_eq!(rejection_message(&type_error), "Failed to fetch");
    assert_eq!(rejection_message(&JsValue::from_str("aborted")), "aborted");
    assert_eq!(rejection_message(&JsValue::NULL), "request rejected");
}

// ============================================================================
// Mounted components
// ============================================================================

/// Whether the mounted dropdown is open. The control's `aria-expanded` and
/// the menu's open class must agree.
fn dropdown_open(root: &HtmlElement) -> bool {
    let control = find(root, "[aria-expanded]").unwrap();
    let expanded = control.get_attribute("aria-expanded").as_deref() == Some("true");
    let menu = find(root, "[role=listbox]").unwrap();
    let menu_classes = menu.class_name().split_whitespace().count();
    assert_eq!(menu_classes == 2, expanded, "menu class out of sync");
    expanded
}

#[wasm_bindgen_test]
async fn dropdown_closes_on_outside_click_only() {
    let container = fresh_container();
    let chosen: Rc<Cell<Option<RwSignal<SelectOption>>>> = Rc::default();

    let slot = Rc::clone(&chosen);
    let handle = mount_to(container.clone(), move || {
        let selected = RwSignal::new(color("Red", "red"));
        slot.set(Some(selected));
        view! {
            <Dropdown
                label="Select a color"
                options=vec![color("Red", "red"), color("Green", "green"), color("Blue", "blue")]
                selected=selected
                on_select=Callback::new(move |option: SelectOption| selected.set(option))
            />
        }
    });
    let selected = chosen.get().unwrap();
    settle().await;
    assert!(!dropdown_open(&container));

    // Control toggles open
    find(&container, "[role=button]").unwrap().click();
    settle().await;
    assert!(dropdown_open(&container));

    // The label is inside the bound region
    find(&container, "label").unwrap().click();
    settle().await;
    assert!(dropdown_open(&container));

    // Anywhere else closes it
    body().click();
    settle().await;
    assert!(!dropdown_open(&container));

    // Picking an option selects and closes
    find(&container, "[role=button]").unwrap().click();
    settle().await;
    assert!(dropdown_open(&container));
    let first = find(&container, "[role=option]").unwrap();
    assert_eq!(first.text_content().as_deref(), Some("Green"));
    first.click();
    settle().await;
    assert!(!dropdown_open(&container));
    assert_eq!(selected.get_untracked(), color("Green", "green"));

    // The selected option leaves the menu
    let control_text = find(&container, "[role=button]").unwrap().text_content();
    assert!(control_text.unwrap_or_default().contains("Green"));
    let first = find(&container, "[role=option]").unwrap();
    assert_eq!(first.text_content().as_deref(), Some("Red"));

    drop(handle);
    container.remove();
}

#[wasm_bindgen_test]
async fn route_follows_navigation_and_unsubscribes_on_unmount() {
    let owner = Owner::new();
    let nav = owner.with(|| NavContext::new(RouterMode::Hash));
    let navigator = nav.navigator();
    navigator.navigate(&Location::root());
    let before = navigator.bus().listener_count();

    let container = fresh_container();
    let handle = mount_to(container.clone(), move || {
        provide_context(nav);
        view! {
            <Route path="/list">
                <p id="routed">"list"</p>
            </Route>
        }
    });
    settle().await;
    assert_eq!(navigator.bus().listener_count(), before + 1);
    assert!(find(&container, "#routed").is_none());

    navigator.navigate(&Location::new("/list"));
    settle().await;
    assert!(find(&container, "#routed").is_some());

    navigator.navigate(&Location::new("/list/extra"));
    settle().await;
    assert!(find(&container, "#routed").is_none());

    drop(handle);
    settle().await;
    assert_eq!(navigator.bus().listener_count(), before);

    container.remove();
}

#[wasm_bindgen_test]
async fn link_click_prevents_default_then_navigates() {
    let owner = Owner::new();
    let nav = owner.with(|| NavContext::new(RouterMode::Hash));
    let navigator = nav.navigator();
    navigator.navigate(&Location::root());

    let seen = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let seen = Rc::clone(&seen);
        navigator.subscribe(move |loc| seen.borrow_mut().push(loc.clone()))
    };

    let container = fresh_container();
    let handle = mount_to(container.clone(), move || {
        provide_context(nav);
        view! { <Link href="/dropdown">"Dropdown"</Link> }
    });
    settle().await;

    let anchor = find(&container, "a").unwrap();
    assert_eq!(anchor.get_attribute("href").as_deref(), Some("#/dropdown"));

    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    let not_cancelled = anchor.dispatch_event(&click).unwrap();

    assert!(!not_cancelled);
    assert!(click.default_prevented());
    assert_eq!(*seen.borrow(), vec![Location::new("/dropdown")]);
    assert_eq!(current_location(RouterMode::Hash).as_str(), "/dropdown");

    drop(handle);
    container.remove();
}

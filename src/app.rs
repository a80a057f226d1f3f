//! Root application module.
//!
//! Contains the App component, the shared navigation context and the page
//! layout that builds the route table.

use leptos::prelude::*;
use widgetry_core::{
    AccordionItem, DropdownContent, Navigator, RouteTable, RouterMode, SearchContent,
    SelectOption, SiteContent,
};

use crate::components::{Accordion, Dropdown, Header, Route, SearchList};
use crate::config::{self, ROUTER_MODE};
use crate::utils::BrowserHistory;

stylance::import_crate_style!(css, "src/app.module.css");

/// Navigator bound to the browser history.
pub type AppNavigator = Navigator<BrowserHistory>;

// ============================================================================
// NavContext
// ============================================================================

/// Application-wide navigation context.
///
/// Holds the single [`AppNavigator`] (browser history plus navigation bus).
/// Routes and links reach it with `expect_context::<NavContext>()`.
///
/// # Note
///
/// The navigator is `Rc`-based and lives in local arena storage; this struct
/// is only a `Copy` handle to it.
#[derive(Clone, Copy)]
pub struct NavContext {
    navigator: StoredValue<AppNavigator, LocalStorage>,
}

impl NavContext {
    pub fn new(mode: RouterMode) -> Self {
        Self {
            navigator: StoredValue::new_local(Navigator::new(BrowserHistory::new(mode))),
        }
    }

    /// A handle to the shared navigator.
    pub fn navigator(&self) -> AppNavigator {
        self.navigator.get_value()
    }

    /// Re-broadcast the location whenever the browser moves through history.
    ///
    /// `pushState` never fires `popstate`, so links broadcast on their own;
    /// this covers the back/forward buttons and manual hash edits.
    #[cfg(target_arch = "wasm32")]
    pub fn listen_history(&self) {
        use crate::utils::dom::listen_window;

        let navigator = self.navigator();
        let mode = navigator.history().mode();
        let on_change = move || {
            navigator.sync();
        };

        listen_window("popstate", on_change.clone());
        if mode == RouterMode::Hash {
            listen_window("hashchange", on_change);
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the [`NavContext`]
/// - Hooks the browser's back/forward navigation into it
/// - Loads the embedded site content, rendering the error fallback if it is invalid
#[component]
pub fn App() -> impl IntoView {
    let nav = NavContext::new(ROUTER_MODE);
    provide_context(nav);

    #[cfg(target_arch = "wasm32")]
    nav.listen_history();

    let content = config::site_content().inspect_err(|_err| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!("Invalid site content: {}", _err).into());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                    <p>"The application could not start."</p>
                    <ul class=css::fallbackErrors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            {content.map(|content| view! { <Page content=content /> })}
        </ErrorBoundary>
    }
}

/// What a route renders.
#[derive(Clone, Debug)]
enum Widget {
    Accordion(Vec<AccordionItem>),
    Search(SearchContent),
    Dropdown(DropdownContent),
}

impl Widget {
    fn render(
        &self,
        selected: RwSignal<SelectOption>,
        on_select: Callback<SelectOption>,
    ) -> AnyView {
        match self {
            Self::Accordion(items) => view! { <Accordion items=items.clone() /> }.into_any(),
            Self::Search(search) => view! {
                <SearchList
                    label=search.label.clone()
                    default_term=search.default_term.clone()
                />
            }
            .into_any(),
            Self::Dropdown(dropdown) => view! {
                <Dropdown
                    label=dropdown.label.clone()
                    options=dropdown.options.clone()
                    selected=selected
                    on_select=on_select
                />
            }
            .into_any(),
        }
    }
}

/// Header plus one mounted [`Route`] per route table entry.
#[component]
fn Page(content: SiteContent) -> impl IntoView {
    // Selection outlives the dropdown route so it survives navigating away
    let selected = RwSignal::new(content.initial_option().clone());
    let on_select = Callback::new(move |option: SelectOption| selected.set(option));

    let SiteContent {
        nav,
        accordion,
        dropdown,
        search,
    } = content;

    let mut routes = RouteTable::new();
    routes
        .register("/", Widget::Accordion(accordion))
        .register("/list", Widget::Search(search))
        .register("/dropdown", Widget::Dropdown(dropdown));

    let mounted = routes
        .into_entries()
        .map(|(path, widget)| {
            view! {
                <Route path=path>
                    {widget.render(selected, on_select)}
                </Route>
            }
        })
        .collect_view();

    view! {
        <div class=css::container>
            <Header entries=nav />
            {mounted}
        </div>
    }
}

//! Search-as-you-type list backed by the Wikipedia search API.
//!
//! Keystrokes are debounced; only the term left after a quiet period of
//! `SEARCH_DEBOUNCE_MS` is searched. Responses are applied latest-wins, so a
//! slow answer to an older term never replaces newer results.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use url::Url;
use wasm_bindgen_futures::spawn_local;
use widgetry_core::{
    Debouncer, RequestSequence, SearchError, SearchHit, SearchQuery, SearchResults,
    parse_response,
};

use super::icons as ic;
use crate::config::{ARTICLE_BASE_URL, SEARCH_DEBOUNCE, SEARCH_ENDPOINT};
use crate::utils::{fetch_text, sanitize_fragment};

stylance::import_crate_style!(css, "src/components/search.module.css");

/// Run one search round trip.
async fn run_search(query: &SearchQuery) -> Result<SearchResults, SearchError> {
    let endpoint = Url::parse(SEARCH_ENDPOINT)?;
    let url = query.request_url(&endpoint);
    let body = fetch_text(url.as_str()).await?;
    parse_response(&body)
}

#[component]
pub fn SearchList(#[prop(into)] label: String, #[prop(into)] default_term: String) -> impl IntoView {
    let term = RwSignal::new(default_term.clone());
    let settled = RwSignal::new(default_term.clone());
    let results = RwSignal::new(Vec::<SearchHit>::new());
    let total_hits = RwSignal::new(None::<u64>);
    let error = RwSignal::new(None::<String>);

    // The default term counts as settled so the first search runs immediately
    let debouncer = StoredValue::new(Debouncer::new(SEARCH_DEBOUNCE, Some(default_term)));
    let requests = StoredValue::new(RequestSequence::new());
    let timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    on_cleanup(move || {
        debouncer.try_update_value(Debouncer::cancel);
        timer.try_update_value(|t| t.take());
    });

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        term.set(value.clone());

        let Some((ticket, delay)) = debouncer.try_update_value(|d| (d.submit(value), d.delay()))
        else {
            return;
        };
        let timeout = Timeout::new(delay.as_millis() as u32, move || {
            if let Some(Some(value)) = debouncer.try_update_value(|d| d.settle(ticket)) {
                settled.set(value);
            }
        });
        // Replacing the handle drops, and so cancels, the previous timer
        timer.set_value(Some(timeout));
    };

    Effect::new(move |_| {
        let query = SearchQuery::new(settled.get());
        if !query.is_searchable() {
            return;
        }
        let Some(ticket) = requests.try_update_value(|r| r.begin()) else {
            return;
        };

        spawn_local(async move {
            let outcome = run_search(&query).await;

            // Superseded by a newer search, or the list is gone
            if !requests
                .try_with_value(|r| r.is_latest(ticket))
                .unwrap_or(false)
            {
                return;
            }

            match outcome {
                Ok(found) => {
                    results.set(found.hits);
                    total_hits.set(found.total_hits);
                    error.set(None);
                }
                Err(err) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(
                        &format!("Search for '{}' failed: {}", query.term(), err).into(),
                    );
                    error.set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class=css::search>
            <div class=css::field>
                <label class=css::label>{label}</label>
                <div class=css::inputWrapper>
                    <span class=css::inputIcon><Icon icon=ic::SEARCH /></span>
                    <input
                        class=css::input
                        type="text"
                        prop:value=move || term.get()
                        on:input=on_input
                    />
                </div>
            </div>

            <Show when=move || error.with(Option::is_some)>
                <div class=css::error>{move || error.get()}</div>
            </Show>

            {move || total_hits.get().map(|n| view! {
                <div class=css::summary>{format!("{} results", n)}</div>
            })}

            <div class=css::list>
                <For
                    each=move || results.get()
                    key=|hit| hit.pageid
                    children=move |hit: SearchHit| view! { <ResultItem hit=hit /> }
                />
            </div>
        </div>
    }
}

/// One result row: title, highlighted excerpt and a link to the article.
#[component]
fn ResultItem(hit: SearchHit) -> impl IntoView {
    let href = hit.article_url(ARTICLE_BASE_URL);
    let snippet = sanitize_fragment(&hit.snippet);

    view! {
        <div class=css::item>
            <div class=css::itemContent>
                <div class=css::itemTitle>{hit.title}</div>
                <span class=css::snippet inner_html=snippet></span>
            </div>
            <a class=css::go href=href>
                "Go"
                <Icon icon=ic::EXTERNAL_LINK />
            </a>
        </div>
    }
}

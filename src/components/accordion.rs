//! Accordion: a list of titled panels, at most one expanded.

use leptos::prelude::*;
use leptos_icons::Icon;
use widgetry_core::{AccordionItem, AccordionState};

use super::icons as ic;

stylance::import_crate_style!(css, "src/components/accordion.module.css");

#[component]
pub fn Accordion(items: Vec<AccordionItem>) -> impl IntoView {
    let state = RwSignal::new(AccordionState::default());

    let panels = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let is_active = Memo::new(move |_| state.with(|s| s.is_active(index)));

            view! {
                <div
                    class=move || panel_class(css::title, is_active.get())
                    on:click=move |_| state.update(|s| s.activate(index))
                >
                    <span class=css::icon>
                        {move || if is_active.get() {
                            view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                        }}
                    </span>
                    {item.title}
                </div>
                <div class=move || panel_class(css::content, is_active.get())>
                    <p>{item.content}</p>
                </div>
            }
        })
        .collect_view();

    view! { <div class=css::accordion>{panels}</div> }
}

fn panel_class(base: &str, active: bool) -> String {
    if active {
        format!("{} {}", base, css::active)
    } else {
        base.to_string()
    }
}

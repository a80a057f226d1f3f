//! Select-style dropdown that closes on outside clicks.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::on_click_outside;
use widgetry_core::{ClickOrigin, DropdownState, SelectOption, menu_options};

use super::icons as ic;

stylance::import_crate_style!(css, "src/components/dropdown.module.css");

/// Dropdown listing every option except the selected one.
///
/// The outside-click listener is registered on mount and removed with the
/// component.
#[component]
pub fn Dropdown(
    #[prop(into)] label: String,
    options: Vec<SelectOption>,
    #[prop(into)] selected: Signal<SelectOption>,
    on_select: Callback<SelectOption>,
) -> impl IntoView {
    let state = RwSignal::new(DropdownState::default());
    let is_open = Memo::new(move |_| state.with(DropdownState::is_open));
    let options = StoredValue::new(options);
    let root = NodeRef::<leptos::html::Div>::new();

    let _ = on_click_outside(root, move |_| {
        state.update(|s| s.handle_document_click(ClickOrigin::Outside));
    });

    let menu = move || {
        let current = selected.get();
        options
            .with_value(|all| menu_options(all, &current).cloned().collect::<Vec<_>>())
            .into_iter()
            .map(|option| {
                let text = option.label.clone();
                view! {
                    <div
                        class=css::option
                        role="option"
                        on:click=move |_| {
                            state.update(DropdownState::select);
                            on_select.run(option.clone());
                        }
                    >
                        {text}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div node_ref=root class=css::field>
            <label class=css::label>{label}</label>
            <div
                class=move || open_class(css::control, is_open.get())
                role="button"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| state.update(DropdownState::toggle)
            >
                <span class=css::text>{move || selected.with(|o| o.label.clone())}</span>
                <span class=css::caret aria-hidden="true"><Icon icon=ic::CHEVRON_DOWN /></span>
            </div>
            <div class=move || open_class(css::menu, is_open.get()) role="listbox">
                {menu}
            </div>
        </div>
    }
}

fn open_class(base: &str, open: bool) -> String {
    if open {
        format!("{} {}", base, css::open)
    } else {
        base.to_string()
    }
}

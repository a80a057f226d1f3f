//! Page header with one navigation link per configured entry.

use leptos::prelude::*;
use widgetry_core::NavEntry;

use super::link::Link;
use super::router::use_location;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Navigation menu. The entry matching the current location is highlighted.
#[component]
pub fn Header(entries: Vec<NavEntry>) -> impl IntoView {
    let location = use_location();

    let links = entries
        .into_iter()
        .map(|entry| {
            let path = entry.path.clone();
            let class = Signal::derive(move || item_class(location.with(|l| l.matches(&path))));
            view! {
                <Link href=entry.path class=class>
                    {entry.label}
                </Link>
            }
        })
        .collect_view();

    view! {
        <nav class=css::menu>
            <span class=css::brand>{APP_NAME}</span>
            {links}
        </nav>
    }
}

fn item_class(active: bool) -> String {
    if active {
        format!("{} {}", css::item, css::active)
    } else {
        css::item.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_class() {
        assert_eq!(item_class(false), css::item);
        let active = item_class(true);
        assert!(active.starts_with(css::item));
        assert!(active.ends_with(css::active));
    }
}

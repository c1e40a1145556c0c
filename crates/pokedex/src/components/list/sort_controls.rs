use dioxus::prelude::*;
use pokedex_core::{ListQuery, SortDirection, SortKey};

use crate::utils::SignalExt;

/// Sort key and direction buttons.
///
/// Only rendered while a search term is active. Direction buttons stay
/// disabled until a key is picked.
#[component]
pub fn SortControls(mut query: Signal<ListQuery>) -> Element {
    let current = query.read().clone();
    let key_class = |key: SortKey| {
        if current.sort_key() == Some(key) {
            "active"
        } else {
            ""
        }
    };
    let direction_class = |direction: SortDirection| {
        if current.direction() == direction {
            "active"
        } else {
            ""
        }
    };
    let direction_disabled = !current.direction_enabled();

    rsx! {
        div { class: "sort-controls",
            div { class: "sort-group",
                span { "Sort by:" }
                button {
                    class: key_class(SortKey::Id),
                    onclick: move |_| query.mutate(|q| q.set_sort_key(SortKey::Id)),
                    "ID"
                }
                button {
                    class: key_class(SortKey::Name),
                    onclick: move |_| query.mutate(|q| q.set_sort_key(SortKey::Name)),
                    "Name"
                }
            }
            div { class: "sort-group",
                span { "Sort direction:" }
                button {
                    class: direction_class(SortDirection::Ascending),
                    disabled: direction_disabled,
                    onclick: move |_| query.mutate(|q| q.set_direction(SortDirection::Ascending)),
                    "Ascending"
                }
                button {
                    class: direction_class(SortDirection::Descending),
                    disabled: direction_disabled,
                    onclick: move |_| query.mutate(|q| q.set_direction(SortDirection::Descending)),
                    "Descending"
                }
            }
        }
    }
}

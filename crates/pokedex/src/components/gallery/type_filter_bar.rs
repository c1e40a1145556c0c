use dioxus::prelude::*;
use pokedex_core::config::POKEMON_TYPES;
use pokedex_core::TypeFilter;

use crate::utils::SignalExt;

fn type_button_class(filter: &TypeFilter, type_name: &str) -> String {
    if filter.is_selected(type_name) {
        format!("type-filter-btn active {}", type_name)
    } else {
        format!("type-filter-btn {}", type_name)
    }
}

/// "All" plus one toggle button per type.
///
/// Buttons carry the type name as a class so the stylesheet can color them.
#[component]
pub fn TypeFilterBar(mut filter: Signal<TypeFilter>) -> Element {
    let current = filter.read().clone();
    let all_class = if current.is_empty() { "active" } else { "" };

    rsx! {
        div { class: "sort-controls",
            div { class: "sort-group",
                label { "Filter by type:" }
                button {
                    class: all_class,
                    onclick: move |_| filter.mutate(|f| f.clear()),
                    "All"
                }
            }
            div { class: "sort-group",
                for type_name in POKEMON_TYPES {
                    button {
                        key: "{type_name}",
                        class: type_button_class(&current, type_name),
                        onclick: move |_| filter.mutate(|f| f.toggle(type_name)),
                        "{type_name}"
                    }
                }
            }
        }
    }
}

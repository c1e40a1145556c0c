use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use pokedex_core::{derive_list, ListQuery, LoadState, RecordSource, ReferenceList};

use super::{ListRow, SortControls};
use crate::components::{use_api_client, use_reference_list, StatusMessage};
use crate::utils::SignalExt;

/// Searchable, sortable list of every entry.
///
/// The list is fetched once on mount. Search and sort only re-derive the
/// visible rows from the fetched entries; they never refetch.
#[component]
pub fn ListView() -> Element {
    let client = use_api_client();
    let mut query = use_signal(ListQuery::new);
    let mut reference_list = use_reference_list();

    let list = use_resource(move || {
        let client = client.clone();
        async move {
            info!("Fetching Pokemon list");
            let result = client.fetch_list().await;
            match &result {
                Ok(items) => info!("Fetched {} list entries", items.len()),
                Err(e) => error!("Failed to fetch Pokemon data: {}", e),
            }
            LoadState::from_result(result)
        }
    });

    // Recomputed whenever the fetched list or the query changes
    let derived = use_memo(move || {
        list.read()
            .as_ref()
            .and_then(LoadState::loaded)
            .map(|items| derive_list(items, &query.read()))
            .unwrap_or_default()
    });

    let current_query = query.read().clone();

    let body = match &*list.read() {
        None | Some(LoadState::Loading) => rsx! {
            StatusMessage { text: "Loading Pokemon list...".to_string() }
        },
        Some(LoadState::Failed(failure)) => {
            let message = format!("Failed to load Pokemon list: {}", failure);
            rsx! {
                StatusMessage { text: message }
            }
        }
        Some(LoadState::Loaded(_)) => rsx! {
            div { class: "list-container",
                for item in derived.read().iter() {
                    ListRow {
                        key: "{item.name}",
                        item: item.clone(),
                        // Detail navigation follows exactly the rows on screen
                        on_open: move |_| {
                            reference_list.set(Some(ReferenceList::Items(derived.read().clone())));
                        },
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "dex-page",
            h1 { "My Pokemon Pokedex (List View)" }
            input {
                class: "search-bar",
                r#type: "text",
                placeholder: "Search Pokemon...",
                value: "{current_query.search()}",
                oninput: move |evt| query.mutate(|q| q.set_search(evt.value())),
            }

            if current_query.sort_controls_visible() {
                SortControls { query }
            }

            {body}
        }
    }
}

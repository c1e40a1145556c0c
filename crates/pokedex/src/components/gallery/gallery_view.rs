use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use pokedex_core::{fetch_gallery, filter_by_types, LoadState, ReferenceList, TypeFilter};

use super::{GalleryCard, TypeFilterBar};
use crate::components::{use_api_client, use_reference_list, StatusMessage};

/// Gallery of every record, filterable by type.
///
/// Waits for the whole batch of detail requests before showing anything. If
/// any request fails, no cards are shown at all.
#[component]
pub fn GalleryView() -> Element {
    let client = use_api_client();
    let filter = use_signal(TypeFilter::new);
    let mut reference_list = use_reference_list();

    let records = use_resource(move || {
        let client = client.clone();
        async move {
            info!("Fetching gallery records");
            let result = fetch_gallery(&client).await;
            if let Err(e) = &result {
                error!("Failed to fetch gallery: {}", e);
            }
            LoadState::from_result(result)
        }
    });

    let visible = use_memo(move || {
        records
            .read()
            .as_ref()
            .and_then(LoadState::loaded)
            .map(|all| filter_by_types(all, &filter.read()))
            .unwrap_or_default()
    });

    let content = match &*records.read() {
        None | Some(LoadState::Loading) => rsx! {
            StatusMessage { text: "Loading Pokemon Gallery...".to_string() }
        },
        Some(LoadState::Failed(failure)) => {
            let message = format!("Failed to load Pokemon Gallery: {}", failure);
            rsx! {
                StatusMessage { text: message }
            }
        }
        Some(LoadState::Loaded(_)) => rsx! {
            div { class: "dex-page",
                h1 { "Pokemon Gallery View" }
                TypeFilterBar { filter }
                div { class: "gallery-container",
                    for record in visible.read().iter() {
                        GalleryCard {
                            key: "{record.id}",
                            record: record.clone(),
                            on_open: move |_| {
                                reference_list.set(Some(ReferenceList::Details(visible.read().clone())));
                            },
                        }
                    }
                }
            }
        },
    };

    rsx! {
        {content}
    }
}

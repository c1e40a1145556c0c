use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use pokedex_core::neighbors::neighbors_for;
use pokedex_core::{KeyedLoad, LoadState, PokemonDetails, RecordSource};

use super::{DetailNavigation, StatBar};
use crate::components::{use_api_client, use_reference_list, StatusMessage};
use crate::utils::{format_height, format_weight, join_names};

/// Detail page for one identity.
///
/// Refetches whenever `id` changes. The resource restarts on change, which
/// drops the previous in-flight request; results are also tagged with the id
/// they were fetched for, so a stale record is never rendered under a new id.
#[component]
pub fn DetailView(id: u32) -> Element {
    let client = use_api_client();
    let reference_list = use_reference_list();

    let record = use_resource(use_reactive!(|(id,)| {
        let client = client.clone();
        async move {
            info!("Fetching details for #{}", id);
            let result = client.fetch_details(id).await;
            if let Err(e) = &result {
                warn!("Details for #{} unavailable: {}", id, e);
            }
            KeyedLoad::from_result(id, result)
        }
    }));

    let content = match record.read().as_ref().and_then(|keyed| keyed.state_for(id)) {
        // Not started yet, or still holding the previous id's result
        None | Some(LoadState::Loading) => rsx! {
            StatusMessage { text: "Loading Pokemon details...".to_string() }
        },
        Some(LoadState::Failed(_)) => rsx! {
            StatusMessage { text: "Pokemon with this ID not found.".to_string() }
        },
        Some(LoadState::Loaded(pokemon)) => {
            let neighbors = neighbors_for(pokemon.id, reference_list.read().as_ref());
            rsx! {
                DetailCard { pokemon: pokemon.clone() }
                DetailNavigation { neighbors }
            }
        }
    };

    rsx! {
        div { class: "detail-container",
            {content}
        }
    }
}

#[component]
fn DetailCard(pokemon: PokemonDetails) -> Element {
    let sprite = pokemon.sprite().unwrap_or_default().to_string();
    let height = format_height(pokemon.height_m());
    let weight = format_weight(pokemon.weight_kg());
    let types = join_names(pokemon.type_names());
    let abilities = join_names(pokemon.ability_names());

    rsx! {
        h1 { class: "pokemon-name", "{pokemon.name} (#{pokemon.id})" }
        img {
            class: "pokemon-image-large",
            src: "{sprite}",
            alt: "{pokemon.name}",
        }

        div { class: "pokemon-info-grid",
            div { class: "info-box",
                h2 { "Basic Info" }
                p { "Height: {height}" }
                p { "Weight: {weight}" }
            }
            div { class: "info-box",
                h2 { "Types" }
                p { class: "pokemon-types", "{types}" }
            }
            div { class: "info-box",
                h2 { "Abilities" }
                p { class: "pokemon-abilities", "{abilities}" }
            }
            div { class: "info-box stats-box",
                h2 { "Base Stats" }
                div { class: "stats-container",
                    for entry in pokemon.stats.iter() {
                        StatBar {
                            key: "{entry.stat.name}",
                            name: entry.stat.name.clone(),
                            base_stat: entry.base_stat,
                            percent: entry.bar_percent(),
                        }
                    }
                }
            }
        }
    }
}

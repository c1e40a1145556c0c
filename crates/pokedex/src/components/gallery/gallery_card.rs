use dioxus::prelude::*;
use pokedex_core::PokemonDetails;

use crate::routes::Route;
use crate::utils::join_names;

#[component]
pub fn GalleryCard(record: PokemonDetails, on_open: EventHandler<()>) -> Element {
    let id = record.id;
    let sprite = record.sprite().unwrap_or_default().to_string();
    let types = join_names(record.type_names());

    rsx! {
        Link {
            to: Route::DetailView { id },
            class: "gallery-card-link",
            onclick: move |_| on_open.call(()),
            div { class: "gallery-card",
                img { src: "{sprite}", alt: "{record.name}" }
                p { "#{id}" }
                p { class: "pokemon-name-capitalize", "{record.name}" }
                div { class: "pokemon-types", "{types}" }
            }
        }
    }
}

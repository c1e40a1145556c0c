use dioxus::prelude::*;
use pokedex_core::{HasIdentity, PokemonListItem};

use crate::components::use_api_client;
use crate::routes::Route;
use crate::utils::capitalize;

/// One list entry: sprite, `#id - Name`, linking to the detail page.
///
/// An entry whose locator has no identity is shown without sprite or link.
#[component]
pub fn ListRow(item: PokemonListItem, on_open: EventHandler<()>) -> Element {
    let client = use_api_client();
    let display_name = capitalize(&item.name);

    let Some(id) = item.identity() else {
        return rsx! {
            div { class: "list-item list-item--unlinked",
                p { "{display_name}" }
            }
        };
    };

    let sprite_url = client.config().sprite_url(id);

    rsx! {
        Link {
            to: Route::DetailView { id },
            class: "list-item-link",
            onclick: move |_| on_open.call(()),
            div { class: "list-item",
                img {
                    class: "list-item-image",
                    src: "{sprite_url}",
                    alt: "{item.name}",
                }
                p { "#{id} - {display_name}" }
            }
        }
    }
}

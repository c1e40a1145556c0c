//! Fixture builders shared by unit tests.

use crate::model::{NamedResource, PokemonDetails, PokemonListItem, Sprites, TypeSlot};

/// List item whose locator encodes `id` the way the API does (trailing slash).
pub fn list_item(id: u32, name: &str) -> PokemonListItem {
    PokemonListItem {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
    }
}

/// Detail record with the given types and no stats or abilities.
pub fn details(id: u32, name: &str, types: &[&str]) -> PokemonDetails {
    PokemonDetails {
        id,
        name: name.to_string(),
        sprites: Sprites {
            front_default: Some(format!("https://example.com/{}.png", id)),
        },
        types: types
            .iter()
            .map(|name| TypeSlot {
                kind: NamedResource {
                    name: name.to_string(),
                },
            })
            .collect(),
        height: 7,
        weight: 69,
        abilities: Vec::new(),
        stats: Vec::new(),
    }
}

/// The first nine entries of the list endpoint, in fetch order.
pub fn starter_list() -> Vec<PokemonListItem> {
    vec![
        list_item(1, "bulbasaur"),
        list_item(2, "ivysaur"),
        list_item(3, "venusaur"),
        list_item(4, "charmander"),
        list_item(5, "charmeleon"),
        list_item(6, "charizard"),
        list_item(7, "squirtle"),
        list_item(8, "wartortle"),
        list_item(9, "blastoise"),
    ]
}

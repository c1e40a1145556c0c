//! Record shapes returned by the PokeAPI and the identity capability they share.
//!
//! The list endpoint only returns `{name, url}` pairs, where the identity is
//! encoded as the trailing path segment of `url`. The detail endpoint returns
//! the full record with an explicit `id`. Both shapes can appear in a
//! navigation reference list, so both implement [`HasIdentity`].

use serde::{Deserialize, Serialize};
use url::Url;

/// Anything that can be located by a numeric identity.
///
/// Returns `None` when the identity cannot be determined, e.g. a list item
/// whose locator has no numeric trailing segment.
pub trait HasIdentity {
    fn identity(&self) -> Option<u32>;
}

/// Extracts the identity from a resource locator.
///
/// Takes the last non-empty path segment, so both
/// `https://pokeapi.co/api/v2/pokemon/25/` and `.../pokemon/25` yield `25`.
/// Identities start at 1; a zero segment is treated as malformed.
///
/// # Examples
///
/// ```
/// use pokedex_core::model::identity_from_url;
///
/// assert_eq!(identity_from_url("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
/// assert_eq!(identity_from_url("https://pokeapi.co/api/v2/pokemon/"), None);
/// ```
pub fn identity_from_url(url: &str) -> Option<u32> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        // Relative locators are treated as bare paths
        Err(_) => url.to_string(),
    };

    path.rsplit('/')
        .find(|segment| !segment.is_empty())?
        .parse::<u32>()
        .ok()
        .filter(|id| *id >= 1)
}

/// Entry of the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListItem {
    pub name: String,
    /// Detail resource locator; the identity is its trailing segment
    pub url: String,
}

impl HasIdentity for PokemonListItem {
    fn identity(&self) -> Option<u32> {
        identity_from_url(&self.url)
    }
}

/// Envelope of the list endpoint (`{"results": [...]}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub results: Vec<PokemonListItem>,
}

/// A `{name}` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

/// One base stat (hp, attack, ...). Values range from 0 to 255.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// Largest possible base stat, used to scale stat bars.
pub const MAX_BASE_STAT: u32 = 255;

impl StatEntry {
    /// Bar width as a percentage of [`MAX_BASE_STAT`], capped at 100.
    pub fn bar_percent(&self) -> f64 {
        (f64::from(self.base_stat) / f64::from(MAX_BASE_STAT) * 100.0).min(100.0)
    }
}

/// Full record from the detail endpoint.
///
/// Only the fields the viewer renders are modelled; everything else in the
/// response is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Height in decimeters
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

impl PokemonDetails {
    /// Type names in slot order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.kind.name.as_str())
    }

    /// Ability names in slot order.
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.iter().map(|slot| slot.ability.name.as_str())
    }

    /// Height converted to metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight converted to kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    pub fn sprite(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }
}

impl HasIdentity for PokemonDetails {
    fn identity(&self) -> Option<u32> {
        Some(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_url_trailing_slash() {
        assert_eq!(
            identity_from_url("https://pokeapi.co/api/v2/pokemon/151/"),
            Some(151)
        );
        assert_eq!(identity_from_url("https://pokeapi.co/api/v2/pokemon/4"), Some(4));
    }

    #[test]
    fn test_identity_from_url_malformed() {
        assert_eq!(identity_from_url(""), None);
        assert_eq!(identity_from_url("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(
            identity_from_url("https://pokeapi.co/api/v2/pokemon/bulbasaur/"),
            None
        );
        assert_eq!(identity_from_url("https://pokeapi.co/api/v2/pokemon/0/"), None);
    }

    #[test]
    fn test_identity_from_relative_path() {
        assert_eq!(identity_from_url("/api/v2/pokemon/12/"), Some(12));
    }

    #[test]
    fn test_decode_list_response() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=151&limit=151",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;

        let response: ListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1].name, "ivysaur");
        assert_eq!(response.results[1].identity(), Some(2));
    }

    #[test]
    fn test_decode_details_ignores_unknown_fields() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "base_experience": 267,
            "height": 17,
            "weight": 905,
            "sprites": {"front_default": "https://example.com/6.png", "back_default": null},
            "types": [
                {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}},
                {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}}
            ],
            "abilities": [
                {"ability": {"name": "blaze", "url": "x"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "solar-power", "url": "y"}, "is_hidden": true, "slot": 3}
            ],
            "stats": [
                {"base_stat": 78, "effort": 0, "stat": {"name": "hp", "url": "z"}},
                {"base_stat": 84, "effort": 0, "stat": {"name": "attack", "url": "z"}}
            ]
        }"#;

        let details: PokemonDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.identity(), Some(6));
        assert_eq!(details.type_names().collect::<Vec<_>>(), ["fire", "flying"]);
        assert_eq!(
            details.ability_names().collect::<Vec<_>>(),
            ["blaze", "solar-power"]
        );
        assert_eq!(details.sprite(), Some("https://example.com/6.png"));
        assert!((details.height_m() - 1.7).abs() < f64::EPSILON);
        assert!((details.weight_kg() - 90.5).abs() < 1e-9);
    }

    #[test]
    fn test_decode_details_missing_sprite() {
        let json = r#"{"id": 1, "name": "bulbasaur", "sprites": {"front_default": null}}"#;
        let details: PokemonDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.sprite(), None);
        assert!(details.types.is_empty());
    }

    #[test]
    fn test_stat_bar_percent() {
        let stat = |base_stat| StatEntry {
            base_stat,
            stat: NamedResource {
                name: "hp".to_string(),
            },
        };
        assert_eq!(stat(0).bar_percent(), 0.0);
        assert_eq!(stat(255).bar_percent(), 100.0);
        assert!((stat(51).bar_percent() - 20.0).abs() < 1e-9);
        assert_eq!(stat(300).bar_percent(), 100.0);
    }
}

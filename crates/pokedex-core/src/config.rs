//! Production configuration constants.
//!
//! The viewer talks to the public PokeAPI and only covers the first
//! generation, so the dataset bound is fixed here rather than discovered.
//!
//! # Usage
//!
//! ```
//! use pokedex_core::config::{ApiConfig, MAX_POKEMON_ID};
//!
//! let config = ApiConfig::default();
//! assert_eq!(config.details_url(25), "https://pokeapi.co/api/v2/pokemon/25");
//! assert_eq!(MAX_POKEMON_ID, 151);
//! ```

// =============================================================================
// Remote API
// =============================================================================

/// Base URL of the PokeAPI v2 REST API (no trailing slash).
pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Base URL for front-facing sprites, addressed as `{SPRITE_BASE_URL}/{id}.png`.
pub const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

// =============================================================================
// Dataset bounds
// =============================================================================

/// Highest identity in scope. Also the upper bound of the fallback
/// previous/next navigation on the detail page.
pub const MAX_POKEMON_ID: u32 = 151;

/// Number of entries requested from the list endpoint.
pub const LIST_LIMIT: u32 = MAX_POKEMON_ID;

/// Type names offered by the gallery filter bar, in display order.
pub const POKEMON_TYPES: [&str; 17] = [
    "grass", "poison", "fire", "flying", "water", "bug", "normal", "electric", "ground", "fairy",
    "fighting", "psychic", "rock", "steel", "ice", "ghost", "dragon",
];

/// Endpoint configuration for the record source.
///
/// `Default` yields the production endpoints above. Tests and alternative
/// deployments (e.g. a local mirror) can override the base URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// REST API base URL, without trailing slash
    pub api_base_url: String,
    /// Sprite base URL, without trailing slash
    pub sprite_base_url: String,
    /// `limit` query parameter for the list endpoint
    pub list_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            sprite_base_url: SPRITE_BASE_URL.to_string(),
            list_limit: LIST_LIMIT,
        }
    }
}

impl ApiConfig {
    /// URL of the list endpoint.
    pub fn list_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.api_base_url, self.list_limit)
    }

    /// URL of the detail endpoint for one identity.
    pub fn details_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.api_base_url, id)
    }

    /// Sprite image URL for one identity.
    pub fn sprite_url(&self, id: u32) -> String {
        format!("{}/{}.png", self.sprite_base_url, id)
    }
}

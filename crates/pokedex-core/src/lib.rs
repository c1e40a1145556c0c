//! # Pokedex Core
//!
//! Platform-independent library behind the Pokedex viewer.
//!
//! Everything here is plain Rust with no UI or HTTP client dependency, so it
//! compiles for both `wasm32` and native targets and can be tested without a
//! browser.
//!
//! ## Modules
//!
//! - [`config`] - API endpoints, dataset bounds and type names
//! - [`error`] - Fetch error taxonomy
//! - [`model`] - List/detail record shapes and the [`model::HasIdentity`] capability
//! - [`view`] - Search, sort and type-filter derivation
//! - [`neighbors`] - Previous/next resolution for the detail page
//! - [`load`] - Explicit loading/loaded/failed page state
//! - [`source`] - Record source trait and the all-or-nothing gallery fetch

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod load;
pub mod model;
pub mod neighbors;
pub mod source;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::FetchError;
pub use load::{KeyedLoad, LoadFailure, LoadState};
pub use model::{HasIdentity, PokemonDetails, PokemonListItem};
pub use neighbors::{resolve_neighbors, Neighbors, ReferenceList};
pub use source::{fetch_gallery, RecordSource};
pub use view::{derive_list, filter_by_types, ListQuery, SortDirection, SortKey, TypeFilter};

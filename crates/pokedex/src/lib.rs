//! Pokedex - browser-based viewer for the first-generation PokeAPI dataset.
//!
//! Three pages share one record source:
//!
//! - **List** (`/`): searchable list with sort controls
//! - **Gallery** (`/gallery`): sprite cards filtered by type
//! - **Detail** (`/details/:id`): one record with previous/next navigation
//!
//! The data model, list derivation and neighbor resolution live in
//! [`pokedex_core`]; this crate holds the HTTP client, the router and the
//! Dioxus components.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default `web` feature
//! - **Desktop**: `desktop` feature (same components in a webview)

#![forbid(unsafe_code)]

pub mod api;
pub mod components;
pub mod routes;
pub mod utils;

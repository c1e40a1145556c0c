//! Remote data access.
//!
//! [`PokeApiClient`] is the HTTP implementation of
//! [`pokedex_core::RecordSource`]. reqwest works on both targets:
//! - Native: hyper with rustls-tls
//! - WASM: the browser's `fetch()` API

pub mod client;

pub use client::PokeApiClient;

//! UI components for the Pokedex application.
//!
//! # Component Architecture
//!
//! - `app_shell`: AppShell layout with the nav bar
//! - `list`: ListView, ListRow, SortControls
//! - `gallery`: GalleryView, GalleryCard, TypeFilterBar
//! - `detail`: DetailView, StatBar, DetailNavigation
//! - `status`: StatusMessage and PageNotFound
//!
//! # Context Providers
//!
//! [`App`] provides two values to the whole tree:
//!
//! ```ignore
//! // Record source shared by all pages
//! let client = use_api_client();
//!
//! // List carried from the list/gallery page into the detail page
//! let mut carried = use_reference_list();
//! carried.set(Some(ReferenceList::Items(derived)));
//! ```

mod app_shell;
mod detail;
mod gallery;
mod list;
mod status;

pub use app_shell::AppShell;
pub use detail::DetailView;
pub use gallery::GalleryView;
pub use list::ListView;
pub use status::{PageNotFound, StatusMessage};

use crate::api::PokeApiClient;
use crate::routes::Route;
use dioxus::prelude::*;
use pokedex_core::config::ApiConfig;
use pokedex_core::ReferenceList;

/// Record source context provider.
pub fn use_api_client() -> PokeApiClient {
    use_context::<PokeApiClient>()
}

/// List carried into the detail page.
///
/// Set by list rows and gallery cards right before they navigate, left
/// untouched by previous/next links, and cleared by links that behave like
/// direct navigation (nav bar, "Back to List"). `None` means the detail page
/// was reached directly and falls back to arithmetic neighbors.
pub fn use_reference_list() -> Signal<Option<ReferenceList>> {
    use_context::<Signal<Option<ReferenceList>>>()
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| PokeApiClient::new(ApiConfig::default()));

    let reference_list = use_signal(|| None::<ReferenceList>);
    use_context_provider(|| reference_list);

    rsx! {
        Router::<Route> {}
    }
}

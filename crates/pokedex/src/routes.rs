//! Client-side routes.

use dioxus::prelude::*;

use crate::components::{AppShell, DetailView, GalleryView, ListView, PageNotFound};

/// Every page renders inside [`AppShell`], which owns the nav bar.
///
/// The detail route only carries the identity. The list the user came from
/// travels separately through the reference list context, see
/// [`crate::components::use_reference_list`].
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        ListView {},
        #[route("/gallery")]
        GalleryView {},
        #[route("/details/:id")]
        DetailView { id: u32 },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

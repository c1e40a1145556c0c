//! App shell: the persistent layout around every page.

use dioxus::prelude::*;

use crate::components::use_reference_list;
use crate::routes::Route;

/// Layout with the nav bar and the routed page below it.
///
/// Nav bar links count as direct navigation, so they drop any carried list.
#[component]
pub fn AppShell() -> Element {
    let mut reference_list = use_reference_list();

    rsx! {
        div { class: "App",
            nav { class: "dex-nav",
                Link {
                    to: Route::ListView {},
                    active_class: "active",
                    onclick: move |_| reference_list.set(None),
                    "List View"
                }
                Link {
                    to: Route::GalleryView {},
                    active_class: "active",
                    onclick: move |_| reference_list.set(None),
                    "Gallery View"
                }
            }
            main { class: "dex-main",
                Outlet::<Route> {}
            }
        }
    }
}

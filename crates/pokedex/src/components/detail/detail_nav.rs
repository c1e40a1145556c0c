use dioxus::prelude::*;
use pokedex_core::Neighbors;

use crate::components::use_reference_list;
use crate::routes::Route;

/// Previous / Back to List / Next.
///
/// Previous and Next leave the carried list as it is, so repeated stepping
/// keeps following the originating view. "Back to List" drops it.
#[component]
pub fn DetailNavigation(neighbors: Neighbors) -> Element {
    let mut reference_list = use_reference_list();

    rsx! {
        div { class: "navigation-buttons",
            if let Some(prev_id) = neighbors.previous {
                Link {
                    to: Route::DetailView { id: prev_id },
                    class: "button-link",
                    "← Previous (#{prev_id})"
                }
            } else {
                div {}
            }

            Link {
                to: Route::ListView {},
                class: "button-link",
                onclick: move |_| reference_list.set(None),
                "Back to List"
            }

            if let Some(next_id) = neighbors.next {
                Link {
                    to: Route::DetailView { id: next_id },
                    class: "button-link",
                    "Next (#{next_id}) →"
                }
            } else {
                div {}
            }
        }
    }
}

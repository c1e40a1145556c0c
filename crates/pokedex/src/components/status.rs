use dioxus::prelude::*;

use crate::routes::Route;

/// Centered single-line message for loading and terminal states.
#[component]
pub fn StatusMessage(text: String) -> Element {
    rsx! {
        div { class: "centered-message", "{text}" }
    }
}

/// Fallback page for paths no route matches.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "centered-message",
            p { "Nothing lives at /{path}." }
            Link { to: Route::ListView {}, class: "button-link", "Back to List" }
        }
    }
}

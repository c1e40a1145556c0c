use dioxus::prelude::*;

/// One base stat as a labelled bar scaled to the maximum stat value.
#[component]
pub fn StatBar(name: String, base_stat: u32, percent: f64) -> Element {
    rsx! {
        div { class: "stat-row",
            span { class: "stat-name", "{name}" }
            div { class: "stat-bar-container",
                div {
                    class: "stat-bar",
                    style: "width: {percent}%",
                    "{base_stat}"
                }
            }
        }
    }
}

use dioxus::prelude::*;

/// Animated placeholder shown while a list is loading. No inputs, no state.
#[component]
pub fn Skeleton() -> Element {
    rsx! {
        div { class: "skeleton-card",
            div { class: "skeleton-pulse",
                div { class: "skeleton-line skeleton-line-full" }
                div { class: "skeleton-row",
                    div { class: "skeleton-line skeleton-line-wide" }
                    div { class: "skeleton-line skeleton-line-narrow" }
                }
                div { class: "skeleton-line skeleton-line-full" }
            }
        }
    }
}

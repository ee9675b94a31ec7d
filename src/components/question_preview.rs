use dioxus::prelude::*;

use crate::draft::{QuestionDraft, ALTERNATIVE_LABELS};

/// Read-only dialog over the draft as it currently stands. The parent
/// passes the live draft on every render, so edits show up immediately.
#[component]
pub fn QuestionPreview(draft: QuestionDraft, on_close: EventHandler<()>) -> Element {
    let alternatives = ALTERNATIVE_LABELS
        .iter()
        .zip(draft.alternatives.iter())
        .map(|(label, text)| {
            rsx! {
                li { key: "{label}", class: "preview-alternative",
                    span { class: "alternative-chip", "{label}" }
                    span { "{text}" }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog-panel",
                onclick: move |e| e.stop_propagation(),
                h3 { class: "preview-title", "{draft.title}" }
                p { class: "preview-statement", "{draft.statement}" }
                if let Some(src) = draft.image.as_ref() {
                    img { class: "preview-image", src: "{src}" }
                }
                ul { class: "preview-alternatives", {alternatives.into_iter()} }
                div { class: "dialog-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Fechar"
                    }
                }
            }
        }
    }
}

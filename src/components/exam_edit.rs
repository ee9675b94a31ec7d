use dioxus::prelude::*;

/// Target of the card's "Editar" action. The edit flow itself lives in a
/// later iteration; the route only confirms which exam was picked.
#[component]
pub fn ExamEditComponent(id: String) -> Element {
    rsx! {
        div { class: "page-container",
            h2 { class: "page-title", "Editar prova" }
            p { class: "field-note", "Edição da prova {id} em desenvolvimento" }
        }
    }
}

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{accent_class, format_date};
use crate::Route;

/// One exam in the list: metadata plus a contextual menu with edit,
/// duplicate (not wired yet) and delete. Deletion goes through the
/// `ApiClient` and reports back through `on_delete_completed`, with no
/// confirmation step in between.
#[component]
pub fn ExamCard(
    id: String,
    title: String,
    difficulty: String,
    created_at: String,
    updated_at: Option<String>,
    on_delete_completed: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let mut menu_open = use_signal(|| false);

    let accent = accent_class(&difficulty);

    let created = format_date(&created_at);
    let updated = updated_at.as_deref().map(format_date);

    let edit_id = id.clone();
    let delete_id = id.clone();

    rsx! {
        li { class: "exam-card {accent}",
            div { class: "exam-card-body",
                p { class: "exam-card-title", "{title}" }
                p { class: "exam-card-date",
                    "criada em: "
                    strong { "{created}" }
                }
                if let Some(updated) = updated {
                    p { class: "exam-card-date",
                        "atualizada em: "
                        strong { "{updated}" }
                    }
                }
                p { class: "exam-card-id", "{id}" }
            }
            div { class: "exam-card-menu",
                button {
                    class: "icon-button",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    "⋮"
                }
                if menu_open() {
                    div { class: "menu-list",
                        button {
                            class: "menu-item",
                            onclick: move |_| {
                                menu_open.set(false);
                                navigator().push(Route::ExamEditComponent { id: edit_id.clone() });
                            },
                            "Editar"
                        }
                        button { class: "menu-item", disabled: true, "Duplicar" }
                        hr { class: "menu-divider" }
                        button {
                            class: "menu-item menu-item-danger",
                            onclick: move |_| {
                                menu_open.set(false);
                                let api = api.clone();
                                let id = delete_id.clone();
                                spawn(async move {
                                    if let Err(err) = api.delete_exam(&id).await {
                                        tracing::error!("falha ao excluir prova {id}: {err}");
                                    }
                                    on_delete_completed.call(());
                                });
                            },
                            "Excluir"
                        }
                    }
                }
            }
        }
    }
}

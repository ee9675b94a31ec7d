use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::exam_card::ExamCard;
use crate::components::skeleton::Skeleton;
use crate::models::ExamSummary;

#[component]
pub fn ExamListComponent() -> Element {
    let api = use_context::<ApiClient>();
    let mut exams = use_signal(Vec::<ExamSummary>::new);
    let mut loading = use_signal(|| true);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            loading.set(true);
            spawn(async move {
                match api.fetch_exams().await {
                    Ok(list) => exams.set(list),
                    Err(err) => tracing::error!("erro ao buscar provas: {err}"),
                }
                loading.set(false);
            });
        }
    };

    // Initial fetch, once on mount.
    let mut has_fetched = use_signal(|| false);
    if !has_fetched() {
        has_fetched.set(true);
        let mut fetch = fetch.clone();
        fetch();
    }

    let cards = exams
        .read()
        .iter()
        .map(|exam| {
            let mut refetch = fetch.clone();
            rsx! {
                ExamCard {
                    key: "{exam.id}",
                    id: exam.id.clone(),
                    title: exam.title.clone(),
                    difficulty: exam.difficulty.clone(),
                    created_at: exam.created_at.clone(),
                    updated_at: exam.updated_at.clone(),
                    on_delete_completed: move |_| refetch(),
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page-container",
            h2 { class: "page-title", "Provas" }
            if loading() {
                ul { class: "exam-list",
                    for i in 0..4 {
                        li { key: "{i}", Skeleton {} }
                    }
                }
            } else if cards.is_empty() {
                div { class: "empty-state",
                    p { class: "empty-state-title", "Nenhuma prova encontrada" }
                    p { class: "field-note", "Crie questões e monte a primeira prova." }
                }
            } else {
                ul { class: "exam-list", {cards.into_iter()} }
            }
        }
    }
}

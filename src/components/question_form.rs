use dioxus::html::HasFileData;
use dioxus::prelude::*;

use crate::alert::{Alert, AlertKind, AlertSlot, ERROR_WINDOW, SUCCESS_WINDOW};
use crate::api::{ApiClient, ApiError};
use crate::components::question_preview::QuestionPreview;
use crate::components::stage_image;
use crate::draft::{DraftAction, QuestionDraft, ALTERNATIVE_LABELS};
use crate::models::{Category, Difficulty};

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubmitPhase {
    Editing,
    Submitting,
}

/// Runs when the success window elapses. The token only gates clearing
/// the alert (a dismissed or superseded alert stays untouched); the
/// draft reset follows every confirmed creation.
fn finish_successful_submission(
    slot: &mut AlertSlot,
    draft: &QuestionDraft,
    token: u64,
) -> QuestionDraft {
    slot.clear_if(token);
    draft.apply(DraftAction::Reset)
}

/// The question-authoring form. All mutable state lives in one
/// `QuestionDraft` signal; every input dispatches a `DraftAction`.
/// Validation runs at submission time only.
#[component]
pub fn QuestionFormComponent() -> Element {
    let api = use_context::<ApiClient>();

    let mut draft = use_signal(QuestionDraft::default);
    let mut phase = use_signal(|| SubmitPhase::Editing);
    let mut alerts = use_signal(AlertSlot::default);
    let mut show_preview = use_signal(|| false);
    let mut categories = use_signal(Vec::<Category>::new);

    // Category list is display-only for now; the submission payload
    // does not carry it.
    let mut has_fetched = use_signal(|| false);
    if !has_fetched() {
        has_fetched.set(true);
        let api = api.clone();
        spawn(async move {
            match api.fetch_categories().await {
                Ok(list) => categories.set(list),
                Err(err) => tracing::error!("erro ao buscar categorias: {err}"),
            }
        });
    }

    let mut show_error = move |message: String| {
        let token = alerts.write().show(Alert::error(message));
        spawn(async move {
            gloo_timers::future::sleep(ERROR_WINDOW).await;
            alerts.write().clear_if(token);
        });
    };

    let api_submit = api.clone();
    let on_submit = move |_| {
        if phase() == SubmitPhase::Submitting {
            return;
        }
        let snapshot = draft();
        if snapshot.has_blank_fields() {
            show_error("Os campos devem ser preenchidos!".to_string());
            return;
        }
        phase.set(SubmitPhase::Submitting);
        let api = api_submit.clone();
        spawn(async move {
            let result = api.create_question(&snapshot.to_payload()).await;
            phase.set(SubmitPhase::Editing);
            match result {
                Ok(()) => {
                    let token = alerts.write().show(Alert::success("Questão criada com sucesso!"));
                    gloo_timers::future::sleep(SUCCESS_WINDOW).await;
                    let reset = finish_successful_submission(&mut alerts.write(), &draft.peek(), token);
                    draft.set(reset);
                }
                Err(ApiError::Status(status)) => {
                    tracing::warn!("criação de questão rejeitada: {status}");
                    show_error("Erro ao criar questão".to_string());
                }
                Err(err) => {
                    tracing::error!("falha ao salvar a questão: {err}");
                    show_error("Atualize a página e tente novamente".to_string());
                }
            }
        });
    };

    let current = draft();
    let submitting = phase() == SubmitPhase::Submitting;
    let active_alert = alerts.read().current().cloned();

    let difficulty_value = current
        .difficulty
        .map(|d| d.level().to_string())
        .unwrap_or_default();
    let difficulty_options = Difficulty::ALL
        .iter()
        .map(|level| {
            let value = level.level().to_string();
            let label = level.label();
            rsx! {
                option { key: "{value}", value: "{value}", "{label}" }
            }
        })
        .collect::<Vec<_>>();

    let category_options = categories
        .read()
        .iter()
        .map(|category| {
            let title = category.title.clone();
            let color = category.color.clone();
            rsx! {
                option {
                    key: "{title}",
                    value: "{title}",
                    style: "background-color: {color}",
                    "{title}"
                }
            }
        })
        .collect::<Vec<_>>();

    let alternative_rows = ALTERNATIVE_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let value = current.alternatives[index].clone();
            let checked = current.correct == Some(index);
            // While one alternative is marked, the other checkboxes lock.
            let locked = current.correct.is_some() && !checked;
            rsx! {
                div { key: "{label}", class: "alternative-row",
                    span { class: "alternative-chip", "{label}" }
                    input {
                        class: "text-input alternative-input",
                        placeholder: "Alternativa {label}",
                        value: "{value}",
                        oninput: move |e| {
                            let next = draft.peek().apply(DraftAction::SetAlternative(index, e.value()));
                            draft.set(next);
                        },
                    }
                    input {
                        r#type: "checkbox",
                        class: "alternative-checkbox",
                        checked: checked,
                        disabled: locked,
                        onchange: move |_| {
                            let next = draft.peek().apply(DraftAction::ToggleCorrect(index));
                            draft.set(next);
                        },
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        if show_preview() {
            QuestionPreview {
                draft: current.clone(),
                on_close: move |_| show_preview.set(false),
            }
        }

        div { class: "page-container question-form",
            div { class: "form-columns",
                div { class: "form-column",
                    h2 { class: "page-title", "Corpo da questão" }

                    input {
                        class: "text-input",
                        placeholder: "Título",
                        value: "{current.title}",
                        oninput: move |e| {
                            let next = draft.peek().apply(DraftAction::SetTitle(e.value()));
                            draft.set(next);
                        },
                    }

                    span { class: "form-group",
                        select { class: "text-input", disabled: true,
                            option { value: "", "Categoria" }
                            {category_options.into_iter()}
                        }
                        p { class: "field-note", "Funcionalidade em desenvolvimento" }
                    }

                    select {
                        class: "text-input",
                        value: "{difficulty_value}",
                        onchange: move |e| {
                            let parsed = e.value().parse::<u8>().ok().and_then(Difficulty::from_level);
                            let next = draft.peek().apply(DraftAction::SetDifficulty(parsed));
                            draft.set(next);
                        },
                        option { value: "", "Dificuldade" }
                        {difficulty_options.into_iter()}
                    }

                    textarea {
                        class: "text-input statement-input",
                        placeholder: "Enunciado",
                        rows: "4",
                        value: "{current.statement}",
                        oninput: move |e| {
                            let next = draft.peek().apply(DraftAction::SetStatement(e.value()));
                            draft.set(next);
                        },
                    }

                    if let Some(src) = current.image.as_ref() {
                        div { class: "image-preview-row",
                            img { class: "image-preview", src: "{src}" }
                            button {
                                class: "icon-button icon-button-danger",
                                title: "Excluir imagem",
                                onclick: move |_| {
                                    let next = draft.peek().apply(DraftAction::RemoveImage);
                                    draft.set(next);
                                },
                                "🗑"
                            }
                        }
                    } else {
                        label { class: "upload-zone",
                            ondragover: move |evt| evt.prevent_default(),
                            ondrop: move |evt| {
                                evt.prevent_default();
                                let files = evt.files();
                                spawn(async move {
                                    let Some(file) = files.into_iter().next() else { return };
                                    let mime = file.content_type().unwrap_or_default();
                                    match file.read_bytes().await {
                                        Ok(bytes) => {
                                            if let Some(data_uri) = stage_image(&mime, bytes.as_ref()) {
                                                let next = draft.peek().apply(DraftAction::AttachImage(data_uri));
                                                draft.set(next);
                                            }
                                        }
                                        Err(err) => tracing::error!("falha ao ler imagem: {err}"),
                                    }
                                });
                            },
                            span { class: "upload-hint",
                                "Arraste e solte a imagem aqui ou clique para selecionar"
                            }
                            input {
                                r#type: "file",
                                accept: "image/*",
                                class: "hidden-input",
                                onchange: move |evt| {
                                    let files = evt.files();
                                    spawn(async move {
                                        let Some(file) = files.into_iter().next() else { return };
                                        let mime = file.content_type().unwrap_or_default();
                                        match file.read_bytes().await {
                                            Ok(bytes) => {
                                                if let Some(data_uri) = stage_image(&mime, bytes.as_ref()) {
                                                    let next = draft.peek().apply(DraftAction::AttachImage(data_uri));
                                                    draft.set(next);
                                                }
                                            }
                                            Err(err) => tracing::error!("falha ao ler imagem: {err}"),
                                        }
                                    });
                                },
                            }
                        }
                    }
                }

                div { class: "form-column",
                    h2 { class: "page-title", "Alternativas" }
                    div { class: "alternative-list", {alternative_rows.into_iter()} }
                }
            }

            div { class: "form-footer",
                if let Some(alert) = active_alert {
                    div {
                        class: if alert.kind == AlertKind::Success { "alert alert-success" } else { "alert alert-error" },
                        span { "{alert.message}" }
                        button {
                            class: "alert-close",
                            onclick: move |_| alerts.write().dismiss(),
                            "✕"
                        }
                    }
                }
                hr { class: "form-divider" }
                div { class: "form-actions",
                    button {
                        class: "btn btn-blue",
                        onclick: move |_| show_preview.set(true),
                        "Pré visualizar"
                    }
                    div { class: "form-actions-right",
                        button {
                            class: "btn btn-outline-red",
                            onclick: move |_| {
                                navigator().go_back();
                            },
                            "Cancelar"
                        }
                        button {
                            class: "btn btn-green",
                            disabled: submitting,
                            onclick: on_submit,
                            if submitting { "Salvando..." } else { "Salvar" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edited_draft() -> QuestionDraft {
        QuestionDraft {
            title: "Capitais".into(),
            statement: "Qual é a capital da França?".into(),
            ..QuestionDraft::default()
        }
    }

    #[test]
    fn success_window_clears_its_alert_and_resets_the_draft() {
        let mut slot = AlertSlot::default();
        let token = slot.show(Alert::success("Questão criada com sucesso!"));
        let reset = finish_successful_submission(&mut slot, &edited_draft(), token);
        assert!(slot.current().is_none());
        assert_eq!(reset, QuestionDraft::default());
    }

    #[test]
    fn reset_still_happens_when_the_success_alert_was_dismissed() {
        let mut slot = AlertSlot::default();
        let token = slot.show(Alert::success("Questão criada com sucesso!"));
        // Author closes the alert before the window elapses.
        slot.dismiss();
        let reset = finish_successful_submission(&mut slot, &edited_draft(), token);
        assert_eq!(reset.title, "");
        assert_eq!(reset.statement, "");
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_token_leaves_a_newer_alert_visible_but_resets_anyway() {
        let mut slot = AlertSlot::default();
        let token = slot.show(Alert::success("Questão criada com sucesso!"));
        slot.show(Alert::error("Erro ao criar questão"));
        let reset = finish_successful_submission(&mut slot, &edited_draft(), token);
        assert_eq!(slot.current().unwrap().message, "Erro ao criar questão");
        assert_eq!(reset, QuestionDraft::default());
    }
}

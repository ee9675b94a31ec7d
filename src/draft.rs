//! The in-progress question being authored, held as one value and mutated
//! only through [`QuestionDraft::apply`]. Components keep a single
//! `Signal<QuestionDraft>` instead of one signal per field.

use crate::models::{Difficulty, NewQuestion};

pub const ALTERNATIVE_COUNT: usize = 5;
pub const ALTERNATIVE_LABELS: [&str; ALTERNATIVE_COUNT] = ["A", "B", "C", "D", "E"];

#[derive(Clone, PartialEq, Debug, Default)]
pub struct QuestionDraft {
    pub title: String,
    pub statement: String,
    pub alternatives: [String; ALTERNATIVE_COUNT],
    /// Index of the alternative marked correct. At most one at a time.
    pub correct: Option<usize>,
    pub difficulty: Option<Difficulty>,
    /// Data URI of the attached image, if any.
    pub image: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum DraftAction {
    SetTitle(String),
    SetStatement(String),
    SetAlternative(usize, String),
    /// Marks an alternative correct; picking the already-selected index
    /// deselects it. Selection is exclusive.
    ToggleCorrect(usize),
    SetDifficulty(Option<Difficulty>),
    /// Replaces any prior image.
    AttachImage(String),
    RemoveImage,
    /// Back to defaults after a confirmed submission. The attached image
    /// survives the reset.
    Reset,
}

impl QuestionDraft {
    pub fn apply(&self, action: DraftAction) -> Self {
        let mut next = self.clone();
        match action {
            DraftAction::SetTitle(title) => next.title = title,
            DraftAction::SetStatement(statement) => next.statement = statement,
            DraftAction::SetAlternative(index, value) => {
                if index < ALTERNATIVE_COUNT {
                    next.alternatives[index] = value;
                }
            }
            DraftAction::ToggleCorrect(index) => {
                if index < ALTERNATIVE_COUNT {
                    next.correct = if self.correct == Some(index) { None } else { Some(index) };
                }
            }
            DraftAction::SetDifficulty(difficulty) => next.difficulty = difficulty,
            DraftAction::AttachImage(data_uri) => next.image = Some(data_uri),
            DraftAction::RemoveImage => next.image = None,
            DraftAction::Reset => {
                next = QuestionDraft {
                    image: self.image.clone(),
                    ..QuestionDraft::default()
                };
            }
        }
        next
    }

    /// Submission-time check: title, statement and all five alternatives
    /// must be non-empty after trimming. The correct-answer selection and
    /// the difficulty are deliberately not checked here.
    pub fn has_blank_fields(&self) -> bool {
        self.title.trim().is_empty()
            || self.statement.trim().is_empty()
            || self.alternatives.iter().any(|alt| alt.trim().is_empty())
    }

    pub fn to_payload(&self) -> NewQuestion {
        NewQuestion {
            title: self.title.clone(),
            statement: self.statement.clone(),
            alternatives: self.alternatives.to_vec(),
            right_answer: self.correct.map(|index| index.to_string()),
            difficulty: self.difficulty.map(Difficulty::level).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> QuestionDraft {
        let mut draft = QuestionDraft {
            title: "Capitals".into(),
            statement: "What is the capital of France?".into(),
            ..QuestionDraft::default()
        };
        let alternatives = ["Paris", "Lyon", "Nice", "Marseille", "Toulouse"];
        for (i, alt) in alternatives.iter().enumerate() {
            draft = draft.apply(DraftAction::SetAlternative(i, alt.to_string()));
        }
        draft
    }

    #[test]
    fn blank_title_fails_validation() {
        let mut draft = filled_draft();
        draft.title = "   ".into();
        assert!(draft.has_blank_fields());
    }

    #[test]
    fn blank_statement_fails_validation() {
        let mut draft = filled_draft();
        draft.statement = String::new();
        assert!(draft.has_blank_fields());
    }

    #[test]
    fn any_blank_alternative_fails_validation() {
        for i in 0..ALTERNATIVE_COUNT {
            let draft = filled_draft().apply(DraftAction::SetAlternative(i, "  ".into()));
            assert!(draft.has_blank_fields(), "alternative {i} blank");
        }
    }

    #[test]
    fn filled_draft_passes_validation() {
        assert!(!filled_draft().has_blank_fields());
    }

    #[test]
    fn missing_correct_answer_still_passes_validation() {
        let draft = filled_draft();
        assert_eq!(draft.correct, None);
        assert!(!draft.has_blank_fields());
    }

    #[test]
    fn correct_selection_is_exclusive() {
        let draft = filled_draft().apply(DraftAction::ToggleCorrect(1));
        assert_eq!(draft.correct, Some(1));
        let draft = draft.apply(DraftAction::ToggleCorrect(3));
        assert_eq!(draft.correct, Some(3));
        let draft = draft.apply(DraftAction::ToggleCorrect(3));
        assert_eq!(draft.correct, None);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let draft = filled_draft();
        assert_eq!(draft.apply(DraftAction::ToggleCorrect(5)), draft);
        assert_eq!(draft.apply(DraftAction::SetAlternative(5, "x".into())), draft);
    }

    #[test]
    fn new_image_replaces_the_previous_one() {
        let draft = filled_draft()
            .apply(DraftAction::AttachImage("data:image/png;base64,AAA".into()))
            .apply(DraftAction::AttachImage("data:image/jpeg;base64,BBB".into()));
        assert_eq!(draft.image.as_deref(), Some("data:image/jpeg;base64,BBB"));
        let draft = draft.apply(DraftAction::RemoveImage);
        assert_eq!(draft.image, None);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_the_image() {
        let draft = filled_draft()
            .apply(DraftAction::ToggleCorrect(0))
            .apply(DraftAction::SetDifficulty(Some(Difficulty::Facil)))
            .apply(DraftAction::AttachImage("data:image/png;base64,AAA".into()))
            .apply(DraftAction::Reset);
        assert_eq!(draft.title, "");
        assert_eq!(draft.statement, "");
        assert!(draft.alternatives.iter().all(String::is_empty));
        assert_eq!(draft.correct, None);
        assert_eq!(draft.difficulty, None);
        assert_eq!(draft.image.as_deref(), Some("data:image/png;base64,AAA"));
    }

    #[test]
    fn payload_matches_the_wire_format() {
        let draft = filled_draft()
            .apply(DraftAction::ToggleCorrect(0))
            .apply(DraftAction::SetDifficulty(Some(Difficulty::Facil)));
        let value = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(value["difficulty"], 1);
        assert_eq!(value["rightAnswer"], "0");
        assert_eq!(
            value["alternatives"],
            serde_json::json!(["Paris", "Lyon", "Nice", "Marseille", "Toulouse"])
        );
        assert_eq!(value["title"], "Capitals");
        assert_eq!(value["statement"], "What is the capital of France?");
    }

    #[test]
    fn payload_without_selection_carries_null() {
        let value = serde_json::to_value(filled_draft().to_payload()).unwrap();
        assert!(value["rightAnswer"].is_null());
        assert_eq!(value["difficulty"], 0);
    }
}

use serde::{Deserialize, Serialize};

/// Question/exam hardness as the API encodes it (1..=3).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Facil,
    Medio,
    Dificil,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Facil, Difficulty::Medio, Difficulty::Dificil];

    pub fn level(self) -> u8 {
        match self {
            Difficulty::Facil => 1,
            Difficulty::Medio => 2,
            Difficulty::Dificil => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Facil => "Fácil",
            Difficulty::Medio => "Médio",
            Difficulty::Dificil => "Difícil",
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Facil),
            2 => Some(Difficulty::Medio),
            3 => Some(Difficulty::Dificil),
            _ => None,
        }
    }
}

/// Category as served by `GET /categories`. Display-only for now.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub color: String,
}

/// One exam row from `GET /exams`. `difficulty` arrives as a label
/// ("Fácil"/"Média"/"Difícil") and only drives the card accent.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSummary {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /questions`. `right_answer` is the stringified selected
/// index, or null when the author never picked one (the API receives it
/// as-is, see DESIGN.md). `difficulty` is 0 when unset.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub title: String,
    pub statement: String,
    pub alternatives: Vec<String>,
    pub right_answer: Option<String>,
    pub difficulty: u8,
}

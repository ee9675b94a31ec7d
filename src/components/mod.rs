pub mod dark_mode;
pub mod exam_card;
pub mod exam_edit;
pub mod exam_list;
pub mod nav_bar;
pub mod question_form;
pub mod question_preview;
pub mod skeleton;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::DateTime;

/// "dd/mm/yyyy" for card timestamps. Anything unparseable is shown as-is.
pub fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Border-accent class for an exam card. Unknown difficulty labels get
/// no accent at all.
pub fn accent_class(difficulty: &str) -> &'static str {
    match difficulty {
        "Fácil" => "exam-card-facil",
        "Média" => "exam-card-media",
        "Difícil" => "exam-card-dificil",
        _ => "",
    }
}

/// Builds the data URI for an accepted attachment. Anything whose media
/// type is not `image/*` is rejected, leaving the current image alone.
pub fn stage_image(mime: &str, bytes: &[u8]) -> Option<String> {
    if !mime.starts_with("image/") {
        return None;
    }
    Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_renders_as_day_month_year() {
        assert_eq!(format_date("2024-03-09T12:00:00.000Z"), "09/03/2024");
        assert_eq!(format_date("2023-12-31T23:59:59+00:00"), "31/12/2023");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("ontem"), "ontem");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn known_difficulties_map_to_accents() {
        assert_eq!(accent_class("Fácil"), "exam-card-facil");
        assert_eq!(accent_class("Média"), "exam-card-media");
        assert_eq!(accent_class("Difícil"), "exam-card-dificil");
    }

    #[test]
    fn unknown_difficulties_get_no_accent() {
        assert_eq!(accent_class("Lendária"), "");
        assert_eq!(accent_class("facil"), "");
        assert_eq!(accent_class(""), "");
    }

    #[test]
    fn image_media_types_become_data_uris() {
        assert_eq!(
            stage_image("image/png", &[1, 2, 3]).as_deref(),
            Some("data:image/png;base64,AQID")
        );
    }

    #[test]
    fn non_image_media_types_are_rejected() {
        assert_eq!(stage_image("application/pdf", &[1, 2, 3]), None);
        assert_eq!(stage_image("text/plain", b"oi"), None);
        assert_eq!(stage_image("", &[]), None);
    }
}

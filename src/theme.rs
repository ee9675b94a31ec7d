//! Dark-mode handling. The flag lives JSON-encoded in localStorage under
//! a fixed key and is mirrored as a `dark` class on the document element.
//! Anything unreadable or malformed counts as light mode.

use dioxus::prelude::*;

pub const STORAGE_KEY: &str = "darkMode";

/// Stored value → flag. Absent or malformed reads as false.
pub fn parse_stored_flag(raw: Option<&str>) -> bool {
    raw.and_then(|value| serde_json::from_str::<bool>(value).ok())
        .unwrap_or(false)
}

/// Provided once at the composition root; components reach it through
/// context. All DOM and storage access goes through here.
#[derive(Clone, Copy)]
pub struct ThemeService {
    dark: Signal<bool>,
}

impl Default for ThemeService {
    fn default() -> Self {
        ThemeService { dark: Signal::new(false) }
    }
}

impl ThemeService {
    pub fn is_dark(&self) -> bool {
        (self.dark)()
    }

    /// Loads the persisted flag and applies it. Called once on app mount.
    pub fn init(&mut self) {
        let mut dark = self.dark;
        let mut eval = document::eval(&format!(
            r#"dioxus.send(window.localStorage.getItem("{STORAGE_KEY}"));"#
        ));
        spawn(async move {
            if let Ok(value) = eval.recv::<serde_json::Value>().await {
                let stored = parse_stored_flag(value.as_str());
                dark.set(stored);
                apply(stored);
            }
        });
    }

    pub fn set(&mut self, value: bool) {
        self.dark.set(value);
        apply(value);
        persist(value);
    }

    pub fn toggle(&mut self) {
        let next = !self.is_dark();
        self.set(next);
    }
}

fn apply(dark: bool) {
    let _ = document::eval(&format!(
        r#"document.documentElement.classList.toggle("dark", {dark});"#
    ));
}

fn persist(dark: bool) {
    let _ = document::eval(&format!(
        r#"window.localStorage.setItem("{STORAGE_KEY}", "{dark}");"#
    ));
}

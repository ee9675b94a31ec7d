use dioxus::prelude::*;

use crate::theme::ThemeService;

#[component]
pub fn DarkModeToggle() -> Element {
    let mut theme = use_context::<ThemeService>();
    let dark = theme.is_dark();

    rsx! {
        button {
            class: "icon-button theme-toggle",
            title: if dark { "Modo claro" } else { "Modo escuro" },
            onclick: move |_| theme.toggle(),
            if dark { "☀" } else { "🌙" }
        }
    }
}

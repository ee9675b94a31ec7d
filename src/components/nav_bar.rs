use dioxus::prelude::*;

use crate::components::dark_mode::DarkModeToggle;
use crate::Route;

#[component]
pub fn NavComponent() -> Element {
    rsx! {
        div { class: "app-shell",
            nav { class: "nav-bar",
                div { class: "page-container nav-inner",
                    div { class: "nav-logo",
                        span { class: "logo-text", "Exam Studio" }
                    }
                    div { class: "nav-links",
                        Link {
                            to: Route::ExamListComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Provas"
                        }
                        Link {
                            to: Route::QuestionFormComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Nova questão"
                        }
                        DarkModeToggle {}
                    }
                }
            }
            div { class: "page-body",
                Outlet::<Route> {}
            }
        }
    }
}

mod alert;
mod api;
mod components;
mod draft;
mod models;
mod theme;

use dioxus::prelude::*;

use components::exam_edit::ExamEditComponent;
use components::exam_list::ExamListComponent;
use components::nav_bar::NavComponent;
use components::question_form::QuestionFormComponent;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    ExamListComponent {},
    #[route("/questions/new")]
    QuestionFormComponent {},
    #[route("/exam/edit/:id")]
    ExamEditComponent { id: String },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(api::ApiClient::from_env);
    let mut theme = use_context_provider(theme::ThemeService::default);
    use_effect(move || theme.init());

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

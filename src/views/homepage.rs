use maud::{html, Markup};

use crate::{models::ManifestEntry, names, resolver::Catalog, views::components};

pub fn welcome(catalog: &Catalog, error: Option<&str>) -> Markup {
    html! {
        section."welcome-screen" {
            h1 { "🎯 Interactive MCQ Quiz" }
            p { "Select from available quizzes or upload your custom JSON file to start" }

            section."quiz-library" {
                h2 { "📚 Available Quizzes" }
                @if catalog.is_empty() {
                    p."empty-library" { "No quizzes available at the moment" }
                } @else {
                    div."quiz-grid" {
                        @for entry in catalog.entries() {
                            (catalog_item(entry))
                        }
                    }
                }
            }

            hr."divider";

            p id="loading-quiz" class="htmx-indicator" { "Loading quiz..." }

            div."upload-area" {
                div."upload-icon" { "📄" }
                (components::import_form("Click here to choose your JSON file"))
                p { "Upload your custom quiz questions and images" }
            }

            (components::error_message(error))
        }
    }
}

fn catalog_item(entry: &ManifestEntry) -> Markup {
    let href = names::load_preset_url(&entry.id);

    html! {
        form method="post" action=(href)
             hx-post=(href)
             hx-target="#app"
             hx-swap="innerHTML"
             hx-indicator="#loading-quiz" {
            button."quiz-item" type="submit" {
                span."quiz-item-header" {
                    span."quiz-icon" { (entry.icon) }
                    strong { (entry.label()) }
                }
                span."quiz-item-description" { (entry.description) }
                span."quiz-item-footer" {
                    span."quiz-category" { (entry.category) }
                    span { (entry.questions) " questions" }
                    span { (entry.difficulty) }
                }
            }
        }
    }
}

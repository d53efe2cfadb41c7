mod question;
mod results;

pub use question::{question, QuestionData};
pub use results::results;

use maud::{html, Markup};

use crate::{names, session::Controller, utils, views::components};

/// The quiz page for whatever the controller currently holds.
pub fn quiz_page(session: &Controller) -> Markup {
    let Some(quiz) = session.quiz() else {
        return html! {};
    };
    let title = utils::quiz_title(quiz.title());

    html! {
        div."quiz-layout" {
            aside."sidebar" {
                div."sidebar-header" {
                    h2 { (title) }
                    p { (quiz.description().unwrap_or("Select a quiz to start")) }
                }

                section."file-import-section" {
                    h3 { "📁 Import Quiz" }
                    (components::import_form("Choose JSON File"))
                }

                nav."question-nav" {
                    @for idx in 0..quiz.len() {
                        (components::question_link(
                            idx,
                            &nav_class(session, idx),
                            html! { "Q" (idx + 1) },
                        ))
                    }
                }

                section."progress-summary" {
                    h3 { "Progress Summary" }
                    div."progress-stats" {
                        div {
                            div."stat-number" { (session.answered_count()) }
                            div."stat-label" { "Answered" }
                        }
                        div {
                            div."stat-number" { (session.remaining_count()) }
                            div."stat-label" { "Remaining" }
                        }
                    }
                }
            }

            div."quiz-main" {
                header."quiz-header" {
                    h1 { (title) }
                    p {
                        @if let Some(description) = quiz.description() {
                            (description)
                        } @else {
                            "Complete all " (quiz.len()) " questions and submit to see your results"
                        }
                    }
                }

                (components::error_message(session.error()))

                div."questions" {
                    @for (idx, q) in quiz.questions.iter().enumerate() {
                        (question(QuestionData {
                            question_idx: idx,
                            question: q,
                            selected: session.selected(idx),
                            is_current: idx == session.current(),
                        }))
                    }
                }

                @if session.results_shown() {
                    @if let Ok(score) = session.score() {
                        (results(&score))
                    }
                } @else {
                    div."submit-section" {
                        (components::action_form(
                            names::SUBMIT_URL,
                            "submit-btn",
                            html! { "Submit Quiz" },
                        ))
                    }
                }
            }
        }
    }
}

fn nav_class(session: &Controller, idx: usize) -> String {
    let mut class = String::from("question-nav-item");
    if session.is_answered(idx) {
        class.push_str(" answered");
    }
    if idx == session.current() {
        class.push_str(" current");
    }
    class
}

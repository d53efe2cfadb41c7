use maud::{html, Markup};

use crate::{
    names,
    session::Score,
    views::components,
};

pub fn results(score: &Score) -> Markup {
    html! {
        section."results" {
            div."score" { (score.percent) "%" }
            div."score-details" {
                (score_item(score.correct, "Correct"))
                (score_item(score.incorrect, "Incorrect"))
                (score_item(score.unanswered, "Unanswered"))
            }
            (components::action_form(
                names::RESTART_URL,
                "submit-btn",
                html! { "Take Quiz Again" },
            ))
        }
    }
}

fn score_item(count: usize, label: &str) -> Markup {
    html! {
        div."score-item" {
            div."score-item-number" { (count) }
            div."score-item-label" { (label) }
        }
    }
}

use maud::{html, Markup};

use crate::{
    names,
    quiz::{option_letter, OptionContent, Question},
    views::components,
};

pub struct QuestionData<'a> {
    pub question_idx: usize,
    pub question: &'a Question,
    pub selected: Option<usize>,
    pub is_current: bool,
}

pub fn question(data: QuestionData<'_>) -> Markup {
    let q = data.question;
    let answered = data.selected.is_some();

    html! {
        article."question-card".current[data.is_current] id=(names::question_anchor(data.question_idx)) {
            div."question-header" {
                div."question-number" { (data.question_idx + 1) }
                div."question-content" {
                    div."question-text" { (q.text) }
                    @if let Some(src) = &q.image {
                        (components::image_link(src, "Question", "question-image"))
                    }
                }
            }

            div."options" {
                @for (idx, opt) in q.options.iter().enumerate() {
                    (option(
                        data.question_idx,
                        idx,
                        &opt.content,
                        option_class(q, data.selected, idx),
                        answered,
                    ))
                }
            }

            @if let Some(selected) = data.selected {
                (feedback(q, selected))
            }
        }
    }
}

fn option_class(q: &Question, selected: Option<usize>, idx: usize) -> &'static str {
    match selected {
        None => "option",
        Some(_) if q.is_correct(idx) => "option correct",
        Some(s) if s == idx => "option incorrect",
        Some(_) => "option",
    }
}

fn option(
    question_idx: usize,
    idx: usize,
    content: &OptionContent,
    class: &str,
    locked: bool,
) -> Markup {
    let letter = option_letter(idx);
    let body = html! {
        span."option-letter" { (letter) }
        span."option-content" {
            @match content {
                OptionContent::Text(text) => span."option-text" { (text) },
                OptionContent::Image(url) => {
                    img."option-image" src=(url.as_str()) alt=(format!("Option {letter}"));
                }
            }
        }
    };

    html! {
        @if locked {
            div class=(class) { (body) }
        } @else {
            (components::action_form(&names::answer_url(question_idx, idx), class, body))
        }
    }
}

fn feedback(q: &Question, selected: usize) -> Markup {
    let correct = q.is_correct(selected);

    html! {
        div.feedback.correct[correct].incorrect[!correct] {
            div {
                @if correct {
                    "✅ Correct!"
                } @else {
                    "❌ Incorrect"
                    @match (q.correct, q.correct_option()) {
                        (Some(idx), Some(opt)) => {
                            ". The correct answer is: " (option_letter(idx)) ") "
                            (opt.text().unwrap_or("See image above"))
                        }
                        _ => { ". No correct answer is available for this question." }
                    }
                }
            }
            @if !q.explanation.is_empty() {
                div."explanation" {
                    strong { "Explanation:" } " " (q.explanation)
                }
            }
            @if let Some(src) = &q.explanation_image {
                (components::image_link(src, "Explanation", "explanation-image"))
            }
        }
    }
}

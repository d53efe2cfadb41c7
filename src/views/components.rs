use maud::{html, Markup};

use crate::names;

/// A post form that htmx upgrades into a swap of the whole app view.
/// Without htmx it is an ordinary form submission.
pub fn action_form(href: &str, class: &str, body: Markup) -> Markup {
    html! {
        form."action-form" method="post" action=(href)
             hx-post=(href)
             hx-target="#app"
             hx-swap="innerHTML" {
            button type="submit" class=(class) { (body) }
        }
    }
}

/// Link to a question that keeps it in view after the swap.
pub fn question_link(question_idx: usize, class: &str, body: Markup) -> Markup {
    let anchor = names::question_anchor(question_idx);

    html! {
        a class=(class)
          href=(names::question_link(question_idx))
          hx-get=(names::question_url(question_idx))
          hx-target="#app"
          hx-swap=(format!("innerHTML show:#{anchor}:top")) {
            (body)
        }
    }
}

pub fn error_message(error: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = error {
            div."error-message" role="alert" { (msg) }
        }
    }
}

/// File picker that uploads as soon as a file is chosen, or on submit when
/// scripts are unavailable.
pub fn import_form(label: &str) -> Markup {
    html! {
        form."import-form"
             method="post"
             action=(names::IMPORT_URL)
             enctype="multipart/form-data"
             hx-post=(names::IMPORT_URL)
             hx-encoding="multipart/form-data"
             hx-trigger="change, submit"
             hx-target="#app"
             hx-swap="innerHTML" {
            label."file-input-label" {
                (label)
                input type="file"
                      name=(names::QUIZ_FILE_FIELD)
                      accept=".json,application/json"
                      hidden;
            }
            button."upload-btn" type="submit" { "Upload" }
        }
    }
}

pub fn image_link(src: &str, alt: &str, class: &str) -> Markup {
    html! {
        a href=(src) target="_blank" rel="noopener" {
            img src=(src) alt=(alt) class=(class);
        }
    }
}

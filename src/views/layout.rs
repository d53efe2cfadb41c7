use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_SRC) {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                a href=(names::HOME_URL) { strong { "Quizdeck" } }
                span."version" { (utils::VERSION) }
            }
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())

            title { (format!("{title} - Quizdeck")) }
        }

        body {
            (header())
            main id="app" { (body) }
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Quizdeck" }
        (body)
    }
}

/// Full page for plain navigation, fragment for htmx swaps into `#app`.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}

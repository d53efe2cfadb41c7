pub mod homepage;
pub mod quiz;

use axum::response::{IntoResponse, Redirect, Response};
use maud::Markup;

use crate::{utils, views, AppState};

const WELCOME_TITLE: &str = "Interactive MCQ Quiz";

/// Render the app for the current session: the welcome screen until a quiz
/// is loaded, the quiz page afterwards.
pub(crate) fn render_app(state: &AppState, is_htmx: bool) -> Markup {
    let session = state.controller.lock();

    match session.quiz() {
        None => views::render(
            is_htmx,
            WELCOME_TITLE,
            views::homepage::welcome(&state.catalog, session.error()),
        ),
        Some(quiz) => views::render(
            is_htmx,
            utils::quiz_title(quiz.title()),
            views::quiz::quiz_page(&session),
        ),
    }
}

/// Answer a state change: htmx gets the new view, a plain form post is sent
/// back to `location` (303) so a reload does not repeat the action.
pub(crate) fn respond(state: &AppState, is_htmx: bool, location: &str) -> Response {
    if is_htmx {
        render_app(state, true).into_response()
    } else {
        Redirect::to(location).into_response()
    }
}

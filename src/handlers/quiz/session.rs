use axum::{extract::State, response::Response};

use crate::{extractors::IsHtmx, handlers::respond, names, AppState};

pub(crate) async fn submit(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Response {
    let submitted = state.controller.lock().submit();

    match submitted {
        Ok(score) => tracing::info!(
            "quiz submitted: {}% ({} correct, {} incorrect, {} unanswered)",
            score.percent,
            score.correct,
            score.incorrect,
            score.unanswered
        ),
        Err(e) => tracing::info!("submit rejected: {e}"),
    }

    respond(&state, is_htmx, names::HOME_URL)
}

pub(crate) async fn restart(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Response {
    state.controller.lock().restart();
    respond(&state, is_htmx, names::HOME_URL)
}

use axum::{
    extract::{Path, State},
    response::Response,
};
use maud::Markup;

use crate::{
    extractors::IsHtmx,
    handlers::{render_app, respond},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub(crate) async fn answer(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path((question, option)): Path<(usize, usize)>,
) -> Result<Response, AppError> {
    let recorded = state
        .controller
        .lock()
        .select(question, option)
        .reject_input("could not record answer")?;

    if !recorded {
        tracing::debug!("question {question} is already answered, keeping the first answer");
    }

    Ok(respond(&state, is_htmx, &names::answered_url(question)))
}

pub(crate) async fn navigate(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(question): Path<usize>,
) -> Result<Markup, AppError> {
    state
        .controller
        .lock()
        .navigate(question)
        .reject_input("no such question")?;

    Ok(render_app(&state, is_htmx))
}

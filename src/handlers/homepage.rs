use axum::{
    extract::{Multipart, Path, State},
    response::Response,
    routing::{get, post},
    Router,
};
use maud::Markup;

use super::{render_app, respond};
use crate::{
    extractors::IsHtmx,
    names,
    quiz::{LoadError, LoadedQuiz},
    resolver,
    session::LoadOutcome,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/load-preset/{id}", post(load_preset))
        .route("/import", post(import_quiz))
}

async fn homepage(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    render_app(&state, is_htmx)
}

async fn load_preset(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(id): Path<String>,
) -> Response {
    let ticket = state.controller.lock().begin_load();

    let result = match state.catalog.find(&id) {
        Some(entry) => state.resolver.load_preset(&entry.file).await,
        None => Err(LoadError::unavailable(&id, "not in the catalog")),
    };

    log_outcome(&id, state.controller.lock().commit(ticket, result));
    respond(&state, is_htmx, names::HOME_URL)
}

async fn import_quiz(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    multipart: Multipart,
) -> Response {
    let ticket = state.controller.lock().begin_load();

    let result = read_first_file(multipart).await;

    log_outcome("upload", state.controller.lock().commit(ticket, result));
    respond(&state, is_htmx, names::HOME_URL)
}

/// Only the first uploaded file is considered.
async fn read_first_file(mut multipart: Multipart) -> Result<LoadedQuiz, LoadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| LoadError::Read(e.to_string()))?
    {
        if field.name() != Some(names::QUIZ_FILE_FIELD) && field.file_name().is_none() {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        return resolver::load_upload(content_type.as_deref(), field.text()).await;
    }

    Err(LoadError::Read("no file was uploaded".to_owned()))
}

fn log_outcome(source: &str, outcome: LoadOutcome) {
    match outcome {
        LoadOutcome::Loaded { questions } => {
            tracing::info!("loaded quiz from {source} ({questions} questions)")
        }
        LoadOutcome::Failed(message) => tracing::info!("load from {source} failed: {message}"),
        LoadOutcome::Superseded => tracing::info!("load from {source} was superseded"),
    }
}

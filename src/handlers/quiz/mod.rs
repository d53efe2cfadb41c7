mod question;
mod session;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/answer/{question}/{option}", post(question::answer))
        .route("/question/{question}", get(question::navigate))
        .route("/submit", post(session::submit))
        .route("/restart", post(session::restart))
}

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod resolver;
pub mod session;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{middleware, Router};
use parking_lot::Mutex;

use resolver::{Catalog, Resolver};
use session::Controller;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<Controller>>,
    pub resolver: Resolver,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(resolver: Resolver, catalog: Catalog) -> Self {
        Self {
            controller: Arc::new(Mutex::new(Controller::new())),
            resolver,
            catalog: Arc::new(catalog),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    let trusted = extractors::is_htmx(req.headers()) || extractors::is_same_origin(req.headers());

    if state_changing.contains(req.method()) && !trusted {
        return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
    }

    next.run(req).await
}

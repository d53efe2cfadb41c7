#![allow(dead_code)]

use std::path::Path;

use axum::{http::StatusCode, routing::get, Router};
use quizdeck::{resolver::Resolver, AppState};
use tempfile::TempDir;
use tokio::sync::oneshot;

pub const ARITHMETIC: &str = r#"{
    "title": "Arithmetic",
    "description": "Numbers",
    "questions": [
        {"question": "2+2?", "options": {"A": "3", "B": "4"}, "correct_answer": "B"}
    ]
}"#;

pub const GEOGRAPHY: &str = r#"{
    "title": "Geography",
    "questions": [
        {"id": "g1", "question": "Capital of France?", "options": {"A": "Paris", "B": "London"}, "correct_answer": "A"},
        {"id": "g2", "question": "Capital of Italy?", "options": {"A": "Madrid", "B": "Rome", "C": "Oslo"}, "correct_answer": "B"},
        {"id": "g3", "question": "Flag of Japan?", "options": {"A": "https://x.com/jp.png", "B": "https://x.com/fr.png"}, "correct_answer": "A", "explanation": "Red circle"}
    ]
}"#;

pub const MANIFEST: &str = r#"{
    "quizzes": [
        {"id": "arith", "file": "arithmetic.json", "title": "Arithmetic", "description": "Numbers",
         "icon": "➕", "category": "Math", "questions": 1, "difficulty": "Easy"},
        {"id": "geo", "file": "geography.json", "title": "Geography", "description": "Places",
         "icon": "🌍", "category": "Geo", "questions": 3, "difficulty": "Medium"},
        {"id": "broken", "file": "broken.json", "title": "Broken", "description": "",
         "icon": "", "category": "", "questions": 0, "difficulty": ""},
        {"id": "missing", "file": "missing.json", "title": "Missing", "description": "",
         "icon": "", "category": "", "questions": 0, "difficulty": ""}
    ]
}"#;

/// A presets directory with a manifest, two valid quizzes, one broken file and
/// one well-formed file that is not a quiz.
pub fn presets_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "quiz-manifest.json", MANIFEST);
    write(dir.path(), "arithmetic.json", ARITHMETIC);
    write(dir.path(), "geography.json", GEOGRAPHY);
    write(dir.path(), "broken.json", "{not json");
    write(dir.path(), "empty.json", r#"{"questions": []}"#);
    dir
}

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write preset file");
}

pub fn dir_resolver(dir: &TempDir) -> Resolver {
    Resolver::from_location(dir.path().to_str().expect("utf-8 temp path"))
        .expect("valid presets dir")
}

pub async fn app_state(dir: &TempDir) -> AppState {
    let resolver = dir_resolver(dir);
    let catalog = resolver.discover().await;
    AppState::new(resolver, catalog)
}

/// Serves the preset files over HTTP on an OS-assigned port.
pub struct PresetServer {
    pub url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl PresetServer {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/presets/quiz-manifest.json", get(|| async { MANIFEST }))
            .route("/presets/arithmetic.json", get(|| async { ARITHMETIC }))
            .route("/presets/geography.json", get(|| async { GEOGRAPHY }))
            .route("/presets/broken.json", get(|| async { "{not json" }))
            .route(
                "/presets/error.json",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .expect("preset server");
        });

        Self {
            url: format!("http://{addr}/presets"),
            shutdown: Some(tx),
        }
    }
}

impl Drop for PresetServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use quizdeck::router;
use tower::ServiceExt;

const BOUNDARY: &str = "quizdeck-test-boundary";

async fn app() -> (Router, tempfile::TempDir) {
    let dir = common::presets_dir();
    let state = common::app_state(&dir).await;
    (router(state), dir)
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .expect("request build should succeed");
    into_parts(app.clone().oneshot(req).await.expect("router should respond")).await
}

async fn upload(app: &Router, content_type: &str, contents: &str) -> (StatusCode, String) {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"quiz_file\"; filename=\"quiz.json\"\r\n\
         Content-Type: {content_type}\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    let req = Request::builder()
        .method(Method::POST)
        .uri("/import")
        .header("HX-Request", "true")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request build should succeed");
    into_parts(app.clone().oneshot(req).await.expect("router should respond")).await
}

async fn into_parts(resp: axum::response::Response) -> (StatusCode, String) {
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn welcome_screen_lists_presets() {
    let (app, _dir) = app().await;

    let req = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("request build should succeed");
    let (status, body) = into_parts(app.oneshot(req).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Available Quizzes"));
    assert!(body.contains("Arithmetic"));
    assert!(body.contains("/load-preset/geo"));
}

#[tokio::test]
async fn welcome_screen_without_presets() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(common::app_state(&dir).await);

    let (status, body) = send(&app, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No quizzes available at the moment"));
}

async fn post_form(app: &Router, uri: &str, origin: &str) -> axum::response::Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("host", HOST)
        .header("origin", origin)
        .body(Body::empty())
        .expect("request build should succeed");
    app.clone().oneshot(req).await.expect("router should respond")
}

const HOST: &str = "localhost:1414";

#[tokio::test]
async fn cross_site_posts_are_forbidden() {
    let (app, _dir) = app().await;

    for uri in ["/load-preset/arith", "/import", "/answer/0/0", "/submit", "/restart"] {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .expect("request build should succeed");
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "expected FORBIDDEN for {uri}");

        let resp = post_form(&app, uri, "http://evil.example").await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "expected FORBIDDEN for {uri}");
    }

    let resp = post_form(&app, "/submit", "null").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn plain_form_posts_work_without_htmx() {
    let (app, _dir) = app().await;
    let origin = format!("http://{HOST}");

    let resp = post_form(&app, "/load-preset/geo", &origin).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");

    let resp = post_form(&app, "/answer/1/1", &origin).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/#question-1");

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = into_parts(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("✅ Correct!"));
    assert!(body.contains(r#"<form class="action-form" method="post" action="/submit""#));

    let resp = post_form(&app, "/submit", &origin).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (_, body) = into_parts(app.oneshot(req).await.unwrap()).await;
    assert!(body.contains(">33%<"));
}

#[tokio::test]
async fn pages_are_usable_as_plain_html() {
    let (app, _dir) = app().await;

    let (_, body) = send(&app, Method::GET, "/").await;
    assert!(body.contains(r#"action="/load-preset/geo""#));
    assert!(body.contains(r#"action="/import" enctype="multipart/form-data""#));

    let (_, body) = send(&app, Method::POST, "/load-preset/geo").await;
    assert!(body.contains(r#"action="/answer/0/1""#));
    assert!(body.contains(r#"href="/question/2#question-2""#));
}

#[tokio::test]
async fn question_navigation_scrolls_to_the_question() {
    let (app, _dir) = app().await;
    send(&app, Method::POST, "/load-preset/geo").await;

    let (_, body) = send(&app, Method::GET, "/question/2").await;

    assert!(body.contains(r#"hx-get="/question/2""#));
    assert!(body.contains(r#"hx-swap="innerHTML show:#question-2:top""#));
    assert!(body.contains(r#"id="question-2""#));
    assert!(body.contains("question-nav-item current"));
}

#[tokio::test]
async fn preset_quiz_can_be_answered_and_scored() {
    let (app, _dir) = app().await;

    let (status, body) = send(&app, Method::POST, "/load-preset/geo").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Geography - Quizdeck</title>"));
    assert!(body.contains("Capital of France?"));
    assert!(body.contains("https://x.com/jp.png"));

    let (_, body) = send(&app, Method::POST, "/answer/0/0").await;
    assert!(body.contains("✅ Correct!"));

    let (_, body) = send(&app, Method::POST, "/answer/1/0").await;
    assert!(body.contains("The correct answer is: B) Rome"));

    let (_, body) = send(&app, Method::POST, "/submit").await;
    assert!(body.contains(">33%<"));
    assert!(body.contains("Take Quiz Again"));

    let (_, body) = send(&app, Method::POST, "/restart").await;
    assert!(body.contains("Submit Quiz"));
    assert!(!body.contains("✅ Correct!"));
}

#[tokio::test]
async fn imported_quiz_end_to_end() {
    let (app, _dir) = app().await;

    let (status, body) = upload(&app, "application/json", common::ARITHMETIC).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2+2?"));

    send(&app, Method::POST, "/answer/0/1").await;
    let (_, body) = send(&app, Method::POST, "/submit").await;

    assert!(body.contains(">100%<"));
}

#[tokio::test]
async fn unanswered_submission_scores_zero() {
    let (app, _dir) = app().await;

    upload(&app, "application/json", common::ARITHMETIC).await;
    let (_, body) = send(&app, Method::POST, "/submit").await;

    assert!(body.contains(">0%<"));
}

#[tokio::test]
async fn rejected_upload_keeps_the_current_quiz() {
    let (app, _dir) = app().await;
    send(&app, Method::POST, "/load-preset/geo").await;
    send(&app, Method::POST, "/answer/0/0").await;

    let (_, body) = upload(&app, "text/plain", common::ARITHMETIC).await;
    assert!(body.contains("Please select a valid JSON file."));
    assert!(body.contains("Capital of France?"));

    let (_, body) = upload(&app, "application/json", r#"{"questions": []}"#).await;
    assert!(body.contains("Invalid quiz data format. Please check your JSON file structure."));
    assert!(body.contains("✅ Correct!"));
}

#[tokio::test]
async fn failed_presets_report_errors() {
    let (app, _dir) = app().await;

    let (_, body) = send(&app, Method::POST, "/load-preset/missing").await;
    assert!(body.contains("Error loading the selected quiz file."));

    let (_, body) = send(&app, Method::POST, "/load-preset/unknown").await;
    assert!(body.contains("Error loading the selected quiz file."));

    let (_, body) = send(&app, Method::POST, "/load-preset/broken").await;
    assert!(body.contains("Error parsing JSON file. Please check if the file is valid JSON."));
    assert!(body.contains("Available Quizzes"));
}

#[tokio::test]
async fn submit_without_quiz_asks_to_load_one() {
    let (app, _dir) = app().await;

    let (status, body) = send(&app, Method::POST, "/submit").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please load a quiz first."));
}

#[tokio::test]
async fn out_of_range_requests_are_bad_requests() {
    let (app, _dir) = app().await;
    send(&app, Method::POST, "/load-preset/arith").await;

    let (status, _) = send(&app, Method::POST, "/answer/5/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/answer/0/9").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/question/3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/question/0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("question-nav-item current"));
}

#[tokio::test]
async fn serves_embedded_stylesheet() {
    let (app, _dir) = app().await;

    let req = Request::builder()
        .uri("/static/index.css")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "text/css");

    let req = Request::builder()
        .uri("/static/nope.css")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

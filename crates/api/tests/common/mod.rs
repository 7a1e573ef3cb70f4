#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trivia_api::config::{CorsOrigins, LogFormat, ServerConfig};
use trivia_api::router::build_app_router;
use trivia_api::state::AppState;
use trivia_core::question::NewQuestion;
use trivia_db::repositories::QuestionRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, with every middleware layer, over
/// the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a question directly through the repository, returning its id.
pub async fn insert_question(pool: &PgPool, text: &str, category: i64) -> i64 {
    let input = NewQuestion {
        question: text.to_string(),
        answer: "answer".to_string(),
        category,
        difficulty: 1,
    };
    QuestionRepo::create(pool, &input).await.unwrap().id
}

/// Insert `count` numbered questions in one category, returning their ids.
pub async fn insert_questions(pool: &PgPool, count: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        ids.push(insert_question(pool, &format!("Question number {i}"), category).await);
    }
    ids
}

pub async fn question_count(pool: &PgPool) -> i64 {
    QuestionRepo::count(pool).await.unwrap()
}

/// Assert the flat error envelope for `code`.
pub fn assert_error_envelope(json: &serde_json::Value, code: u16, message: &str) {
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], code);
    assert_eq!(json["message"], message);
}

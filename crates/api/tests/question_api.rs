//! HTTP-level integration tests for categories and questions.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    assert_error_envelope, body_json, delete, get, insert_question, insert_questions, post_json,
    question_count,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_categories_returns_map_and_total(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["status_code"], 200);
    assert_eq!(json["status_message"], "OK");
    assert_eq!(json["total_categories"], 6);
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(json["categories"]["6"], "Sports");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_categories_on_empty_table_returns_404(pool: PgPool) {
    sqlx::query("DELETE FROM categories").execute(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/categories").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({"success": false, "error": 404, "message": "Resource Not found"})
    );
}

// ---------------------------------------------------------------------------
// GET /questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_questions_first_page(pool: PgPool) {
    insert_questions(&pool, 8, 1).await;
    insert_questions(&pool, 7, 3).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["total_questions"], 15);
    assert_eq!(json["current_category"], serde_json::json!([1, 3]));
    assert_eq!(json["categories"]["2"], "Art");

    let first = &json["questions"][0];
    assert!(first["id"].is_number());
    assert!(first["question"].is_string());
    assert!(first["answer"].is_string());
    assert_eq!(first["category"], 1);
    assert_eq!(first["difficulty"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn last_page_is_partial_and_next_page_is_404(pool: PgPool) {
    insert_questions(&pool, 15, 2).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/questions?page=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 5);
    assert_eq!(json["total_questions"], 15);

    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_error_envelope(&body_json(response).await, 404, "Resource Not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn far_out_of_range_page_returns_404(pool: PgPool) {
    insert_questions(&pool, 3, 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_page_falls_back_to_first(pool: PgPool) {
    insert_questions(&pool, 3, 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=abc").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_page_parameter_uses_first_value(pool: PgPool) {
    insert_questions(&pool, 15, 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=1&page=2").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["total_questions"], 15);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_questions_on_empty_table_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// DELETE /questions/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_question_then_delete_again(pool: PgPool) {
    let ids = insert_questions(&pool, 3, 1).await;
    let id = ids[1];

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/questions/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], id);
    assert_eq!(question_count(&pool).await, 2);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/questions/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_error_envelope(&body_json(response).await, 404, "Resource Not found");
    assert_eq!(question_count(&pool).await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unknown_id_returns_404_and_keeps_rows(pool: PgPool) {
    let ids = insert_questions(&pool, 2, 1).await;
    let missing = ids.iter().max().unwrap() + 100;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/questions/{missing}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_error_envelope(&body_json(response).await, 404, "Resource Not found");
    assert_eq!(question_count(&pool).await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_non_numeric_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/questions/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_error_envelope(&body_json(response).await, 404, "Resource Not found");
}

// ---------------------------------------------------------------------------
// POST /questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_question_persists_one_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({"question": "q", "answer": "a", "category": "1", "difficulty": "1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({"success": true, "status_code": 200, "status_message": "OK"})
    );
    assert_eq!(question_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_question_with_blank_field_returns_422(pool: PgPool) {
    let bodies = [
        serde_json::json!({"question": "", "answer": "", "category": "", "difficulty": ""}),
        serde_json::json!({"question": "   ", "answer": "a", "category": "1", "difficulty": "1"}),
        serde_json::json!({"question": "q", "answer": "a", "category": "1", "difficulty": " "}),
        serde_json::json!({"question": "q", "answer": "a", "difficulty": "1"}),
    ];

    for body in bodies {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/questions", body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&body_json(response).await, 422, "Unprocessable Entity");
    }

    assert_eq!(question_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_question_with_non_numeric_difficulty_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({"question": "q", "answer": "a", "category": "1", "difficulty": "hard"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(question_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_question_appears_on_last_page(pool: PgPool) {
    insert_questions(&pool, 10, 1).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({"question": "Newest", "answer": "a", "category": "4", "difficulty": "5"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/questions?page=2").await).await;
    assert_eq!(json["questions"][0]["question"], "Newest");
    assert_eq!(json["questions"][0]["category"], 4);
    assert_eq!(json["questions"][0]["difficulty"], 5);
    assert_eq!(json["total_questions"], 11);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn question_with_unknown_category_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/questions",
        serde_json::json!({"question": "q", "answer": "a", "category": "99", "difficulty": "1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let id = insert_question(&pool, "another", 99).await;
    assert!(id > 0);
    assert_eq!(question_count(&pool).await, 2);
}

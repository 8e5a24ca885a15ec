//! HTTP-level integration tests for week endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_week_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/weeks",
        serde_json::json!({"week_id": "2025-W42"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["week_id"], "2025-W42");
    assert!(json["id"].is_number());
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_week_without_key_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/weeks", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_INPUT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_week_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/weeks",
        serde_json::json!({"week_id": "2025-W42"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/weeks",
        serde_json::json!({"week_id": "2025-W42"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE_KEY");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_weeks_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/weeks").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_weeks_groups_presentations_under_keys(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/weeks",
        serde_json::json!({"week_id": "2025-W41"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/presentations",
        serde_json::json!({"week_id": "2025-W42", "title": "Intro to X", "presenter": "Alice"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/weeks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // The explicitly created week has no presentations yet.
    assert_eq!(json["2025-W41"]["presentations"], serde_json::json!([]));
    // The implicitly created week carries its presentation.
    let presentations = json["2025-W42"]["presentations"].as_array().unwrap();
    assert_eq!(presentations.len(), 1);
    assert_eq!(presentations[0]["title"], "Intro to X");
    assert_eq!(presentations[0]["presenter"], "Alice");
    assert_eq!(presentations[0]["votes"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reset_votes_zeroes_the_week(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/presentations",
            serde_json::json!({"week_id": "2025-W42", "title": "Intro to X", "presenter": "Alice"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/presentations/{id}/vote"),
        serde_json::json!({"user_identifier": "user-1"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/weeks/2025-W42/reset-votes",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Votes reset for week");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/weeks").await).await;
    assert_eq!(json["2025-W42"]["presentations"][0]["votes"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reset_votes_for_unknown_week_succeeds(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/weeks/2099-W01/reset-votes",
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#![cfg(feature = "postgres-tests")]

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_shorten_postgres_sequential_tokens(pool: PgPool) {
    let server = common::create_server(common::create_pg_state(pool.clone()));

    let a = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;
    let again = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;
    let b = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com/b" }))
        .await;

    assert_eq!(a.json::<serde_json::Value>()["shortURL"], "https://s.example.com/1");
    assert_eq!(again.json::<serde_json::Value>()["shortURL"], "https://s.example.com/1");
    assert_eq!(b.json::<serde_json::Value>()["shortURL"], "https://s.example.com/2");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[sqlx::test]
async fn test_redirect_postgres(pool: PgPool) {
    let id = common::insert_url(&pool, "https://example.com/pg").await;
    let server = common::create_server(common::create_pg_state(pool));

    let response = server
        .get(&format!("/{}", radix_shortener::utils::token::encode(id as u64)))
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/pg");
}

#[sqlx::test]
async fn test_redirect_postgres_unknown_token(pool: PgPool) {
    let server = common::create_server(common::create_pg_state(pool));

    let response = server.get("/zzz").await;

    response.assert_status_ok();
    assert!(response.maybe_header("location").is_none());
}

#[sqlx::test]
async fn test_health_endpoint_postgres(pool: PgPool) {
    let server = common::create_server(common::create_pg_state(pool));

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

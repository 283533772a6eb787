mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_server(common::create_memory_state());

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["message"], "disabled");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::create_server(common::create_memory_state());

    let response = server.get("/api/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("store").is_some());
    assert!(json["checks"].get("cache").is_some());
}

#[tokio::test]
async fn test_health_reports_link_count() {
    let state = common::create_memory_state();
    state
        .url_service
        .shorten("https://example.com/a")
        .await
        .unwrap();
    let server = common::create_server(state);

    let response = server.get("/api/health").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["store"]["message"], "Connected, 1 links");
}

#[tokio::test]
async fn test_health_token_is_not_shadowed() {
    let state = common::create_memory_state();
    let server = common::create_server(state);

    // "health" is a valid token; with no such record it falls through
    let response = server.get("/health").await;

    response.assert_status_ok();
    assert!(response.text().contains("URL Shortener"));
}

#[tokio::test]
async fn test_health_reports_store_failure() {
    let server = common::create_server(common::create_failing_state());

    let response = server.get("/api/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

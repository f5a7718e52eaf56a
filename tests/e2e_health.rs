//! E2E tests for health check and basic server functionality

mod common;

use common::{TestServer, test_config};

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_cors_headers() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/health"))
        .header("Origin", "https://app.example.com")
        .send()
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
async fn test_cors_restricted_to_configured_origin() {
    let mut config = test_config();
    config.server.allowed_origin = Some("https://app.example.com".to_string());
    let server = TestServer::with_config(config).await;

    let response = server
        .client
        .get(&server.url("/health"))
        .header("Origin", "https://app.example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://app.example.com"
    );

    let response = server
        .client
        .get(&server.url("/health"))
        .header("Origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();
    assert!(
        !response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
async fn test_404_for_unknown_routes() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/unknown/route"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_metrics_exposes_request_counters() {
    let server = TestServer::new().await;
    server.register("metrics_user").await;

    let response = server
        .client
        .get(&server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("socialhub_http_requests_total"));
    assert!(body.contains("/api/auth/register"));
    assert!(body.contains("socialhub_store_operations_total"));
}

#[tokio::test]
async fn test_demo_data_is_seeded_when_enabled() {
    let mut config = test_config();
    config.store.seed_demo_data = true;
    let server = TestServer::with_config(config).await;

    let users = server.get_json("/api/users/search/alex").await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);

    let user_id = users[0]["id"].as_str().unwrap();
    let groups = server
        .get_json(&format!("/api/users/{user_id}/groups"))
        .await;
    assert_eq!(groups[0]["name"], "Web Developers Hub");
    assert_eq!(groups[0]["membersCount"], 1);
}

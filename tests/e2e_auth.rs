//! E2E tests for registration, login and profile endpoints

mod common;

use common::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_register_hides_password() {
    let server = TestServer::new().await;

    let (status, body) = server
        .post_json(
            "/api/auth/register",
            json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "password123",
                "displayName": "Alice",
                "location": "Berlin",
            }),
        )
        .await;

    assert_eq!(status, 200);
    let user = &body["user"];
    assert_eq!(user["username"], "alice");
    assert_eq!(user["displayName"], "Alice");
    assert_eq!(user["location"], "Berlin");
    assert_eq!(user["isOnline"], false);
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let server = TestServer::new().await;
    server.register("alice").await;

    let (status, body) = server
        .post_json(
            "/api/auth/register",
            json!({
                "username": "alice2",
                "email": "alice@example.com",
                "password": "password123",
                "displayName": "Alice",
            }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_register_validates_body() {
    let server = TestServer::new().await;

    let (status, _) = server
        .post_json(
            "/api/auth/register",
            json!({
                "username": "bob",
                "email": "not-an-email",
                "password": "password123",
                "displayName": "Bob",
            }),
        )
        .await;
    assert_eq!(status, 400);

    let (status, body) = server
        .post_json("/api/auth/register", json!({ "username": "bob" }))
        .await;
    assert_eq!(status, 400);
    assert!(body["message"].is_string());

    let response = server
        .client
        .post(server.url("/api/auth/register"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_login_marks_user_online() {
    let server = TestServer::new().await;
    server.register("carol").await;

    let (status, body) = server
        .post_json(
            "/api/auth/login",
            json!({ "email": "carol@example.com", "password": "password123" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["user"]["isOnline"], true);

    let (status, body) = server
        .post_json(
            "/api/auth/login",
            json!({ "email": "carol@example.com", "password": "wrong" }),
        )
        .await;
    assert_eq!(status, 401);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_get_and_update_user() {
    let server = TestServer::new().await;
    let id = server.register("dave").await;

    let user = server.get_json(&format!("/api/users/{id}")).await;
    assert_eq!(user["username"], "dave");

    let response = server
        .client
        .put(server.url(&format!("/api/users/{id}")))
        .json(&json!({ "bio": "Rustacean", "password": "ignored" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["bio"], "Rustacean");

    // Password is unchanged
    let (status, _) = server
        .post_json(
            "/api/auth/login",
            json!({ "email": "dave@example.com", "password": "password123" }),
        )
        .await;
    assert_eq!(status, 200);

    let response = server
        .client
        .get(server.url("/api/users/missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let response = server
        .client
        .put(server.url("/api/users/missing"))
        .json(&json!({ "bio": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_search_and_suggestions() {
    let server = TestServer::new().await;
    let me = server.register("erin").await;
    for name in ["frank", "grace", "heidi", "ivan", "judy", "mallory"] {
        server.register(name).await;
    }

    let results = server.get_json("/api/users/search/GRA").await;
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["username"], "grace");

    let suggestions = server
        .get_json(&format!("/api/users/{me}/suggested-friends"))
        .await;
    let suggestions = suggestions.as_array().unwrap();
    assert_eq!(suggestions.len(), 5);
    for suggestion in suggestions {
        assert_ne!(suggestion["id"], me.as_str());
        assert_eq!(suggestion["isFriend"], false);
        assert_eq!(suggestion["friendshipStatus"], "none");
        assert!(suggestion["friendsCount"].as_u64().unwrap() < 100);
        assert!(suggestion.get("passwordHash").is_none());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_share_one_email() {
    let server = std::sync::Arc::new(TestServer::new().await);

    let attempts: Vec<_> = (0..8)
        .map(|i| {
            let server = server.clone();
            tokio::spawn(async move {
                server
                    .post_json(
                        "/api/auth/register",
                        json!({
                            "username": format!("racer{i}"),
                            "email": "shared@example.com",
                            "password": "password123",
                            "displayName": format!("Racer {i}"),
                        }),
                    )
                    .await
                    .0
            })
        })
        .collect();

    let mut statuses = vec![];
    for attempt in attempts {
        statuses.push(attempt.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|status| **status == 200).count(), 1);
    assert_eq!(statuses.iter().filter(|status| **status == 400).count(), 7);

    let users = server.get_json("/api/users/search/racer").await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

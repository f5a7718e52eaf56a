//! Common test utilities for E2E tests

#![allow(dead_code)]

use serde_json::{Value, json};
use socialhub::{AppState, config};
use tokio::net::TcpListener;

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub client: reqwest::Client,
}

/// Test configuration: loopback, no demo data, default limits
pub fn test_config() -> config::AppConfig {
    config::AppConfig {
        server: config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Let OS assign port
            allowed_origin: None,
        },
        store: config::StoreConfig {
            seed_demo_data: false,
        },
        feed: config::FeedConfig {
            default_limit: 10,
            max_limit: 100,
        },
        suggestions: config::SuggestionConfig {
            limit: 5,
            max_friends_count: 100,
            max_posts_count: 50,
        },
        logging: config::LoggingConfig {
            level: "info".to_string(),
            format: "pretty".to_string(),
        },
    }
}

impl TestServer {
    /// Create a new test server instance with an empty store
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a test server from an explicit configuration
    pub async fn with_config(config: config::AppConfig) -> Self {
        socialhub::metrics::init_metrics();

        // Initialize app state
        let state = AppState::new(config).await.unwrap();

        // Create HTTP client
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        let app = socialhub::build_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr: addr_str,
            state,
            client,
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// GET and decode JSON, asserting 200
    pub async fn get_json(&self, path: &str) -> Value {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        assert_eq!(response.status(), 200, "GET {path}");
        response.json().await.unwrap()
    }

    /// POST a JSON body, returning status and decoded body
    pub async fn post_json(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap_or(Value::Null))
    }

    /// DELETE, returning status
    pub async fn delete(&self, path: &str) -> u16 {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .unwrap()
            .status()
            .as_u16()
    }

    /// Register a user through the API and return its id
    pub async fn register(&self, username: &str) -> String {
        let (status, body) = self
            .post_json(
                "/api/auth/register",
                json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": "password123",
                    "displayName": username.to_uppercase(),
                }),
            )
            .await;
        assert_eq!(status, 200, "register {username}: {body}");
        body["user"]["id"].as_str().unwrap().to_string()
    }

    /// Create a post through the API and return its id
    pub async fn create_post(&self, author_id: &str, content: &str) -> String {
        let (status, body) = self
            .post_json(
                "/api/posts",
                json!({ "authorId": author_id, "content": content }),
            )
            .await;
        assert_eq!(status, 200, "create post: {body}");
        body["id"].as_str().unwrap().to_string()
    }
}

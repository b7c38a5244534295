//! Shared helpers for the integration tests.

use hellosign_api::{Client, ClientConfig};
use wiremock::MockServer;

pub const API_KEY: &str = "123";

/// `Basic base64("123:")`: the API key as username with an empty password.
pub const AUTHORIZATION: &str = "Basic MTIzOg==";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn client_for(server: &MockServer) -> Client {
    client_with_timeout(server, 30)
}

#[allow(dead_code)]
pub fn client_with_timeout(server: &MockServer, timeout_secs: u64) -> Client {
    let config = ClientConfig {
        api_key: API_KEY.to_string(),
        base_url: server.uri(),
        timeout_secs,
    };
    Client::new(config, reqwest::Client::new())
}

#[allow(dead_code)]
pub fn error_body(name: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "error_name": name,
            "error_msg": message,
        }
    })
}

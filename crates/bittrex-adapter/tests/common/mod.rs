/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bittrex-adapter tests

use bittrex_adapter::{BittrexClient, ClientConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server's `/api/v1.1` root
pub fn mock_client(server: &MockServer, config: ClientConfig) -> BittrexClient {
    BittrexClient::with_config_and_base_url(config, &format!("{}/api/v1.1", server.uri()))
        .expect("client init")
}

/// Standard success envelope around `result`
pub fn envelope(result: Value) -> Value {
    json!({
        "success": true,
        "message": "",
        "result": result,
    })
}

/// Deterministic API key pair for testing
#[allow(dead_code)]
pub fn test_credentials() -> (&'static str, &'static str) {
    ("0123456789abcdef0123456789abcdef", "fedcba9876543210fedcba9876543210")
}

/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for fyb-adapter tests

use std::sync::Arc;
use std::time::Duration;

use fyb_adapter::{ClientConfig, FixedClock, FybClient, Market, RateLimiter};
use wiremock::MockServer;

/// Timestamp every signed test request carries
pub const TEST_TIMESTAMP: i64 = 1_700_000_000;

pub const TEST_KEY: &str = "my-key";
pub const TEST_SECRET: &str = "abc";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Base URL shaped like the live SGD endpoint
pub fn base_url(server: &MockServer) -> String {
    format!("{}/api/SGD", server.uri())
}

/// Client pointed at the mock server with a frozen clock
pub fn client_for(server: &MockServer, key: &str, secret: &str) -> FybClient {
    let config = ClientConfig::for_market(Market::Custom(base_url(server)))
        .with_credentials(key, secret)
        .with_timeout(Duration::from_secs(5));
    FybClient::builder(config)
        .clock(Arc::new(FixedClock(TEST_TIMESTAMP)))
        .rate_limiter(RateLimiter::new(Duration::from_millis(1)))
        .build()
        .expect("client init")
}

/// Client with the test key pair
pub fn signed_client(server: &MockServer) -> FybClient {
    client_for(server, TEST_KEY, TEST_SECRET)
}

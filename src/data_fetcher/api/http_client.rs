//! HTTP client creation and configuration utilities

use crate::constants::provider;
use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::time::Duration;

/// Headers the NBA stats site expects from a browser; requests without them tend to hang.
fn provider_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(header::REFERER, HeaderValue::from_static(provider::REFERER));
    headers.insert(header::ORIGIN, HeaderValue::from_static(provider::ORIGIN));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    headers
}

/// Creates a configured HTTP client with connection pooling and timeout handling.
///
/// # Features
/// * Configurable timeout for requests (default: 30 seconds, configurable via config/env)
/// * Connection pooling with centralized pool size configuration
/// * Browser-like default headers shared by both providers
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(provider::USER_AGENT)
        .default_headers(provider_headers())
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}

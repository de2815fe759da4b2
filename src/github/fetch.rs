// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public events from the GitHub REST API.
//
// Strategy:
// - Trim the username and refuse empty ones before touching the network
// - GET https://api.github.com/users/{username}/events (first page only)
// - Map every non-success outcome to an ActivityError
//
// Why a blocking client?
// - There is exactly one request per run, nothing to overlap it with
// - reqwest::blocking keeps the whole program a plain call-wait-return
//
// Rust concepts:
// - Builder pattern: Client::builder() configures the client step by step
// - Result + ?: For error propagation
// - match on StatusCode: To classify responses
// =============================================================================

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::ActivityError;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com/users";
pub const DEFAULT_USER_AGENT: &str = "GitHub-Activity-CLI/1.0";
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One GitHub event, kept as the raw JSON tree the API returned.
pub type Event = Value;

// Settings for the fetcher
//
// The defaults point at the real GitHub API. Tests (and the hidden --api-url
// flag) swap base_url for a local server.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Everything before "/{username}/events"
    pub base_url: String,
    /// Sent as the User-Agent header (GitHub rejects requests without one)
    pub user_agent: String,
    /// Total time allowed for the request, connect to last byte
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct ActivityFetcher {
    client: Client,
    base_url: String,
}

impl ActivityFetcher {
    pub fn with_config(config: FetcherConfig) -> Result<Self, ActivityError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));

        let client = Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(ActivityError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // Fetches the most recent public events for a user
    //
    // Parameters:
    //   username: GitHub login, surrounding whitespace is ignored
    //
    // Returns: the events exactly as GitHub sent them, newest first
    //
    // Makes at most one request. No retries, no caching.
    pub fn fetch(&self, username: &str) -> Result<Vec<Event>, ActivityError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ActivityError::EmptyUsername);
        }

        let url = self.events_url(username);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ActivityError::Network)?;

        let status = response.status();
        log::debug!("{} -> HTTP {}", url, status.as_u16());

        match status {
            StatusCode::OK => {
                let body: Value = response.json().map_err(|e| {
                    if e.is_decode() {
                        ActivityError::InvalidResponse
                    } else {
                        ActivityError::Network(e)
                    }
                })?;
                match body {
                    Value::Array(events) => Ok(events),
                    _ => Err(ActivityError::InvalidResponse),
                }
            }
            StatusCode::NOT_FOUND => Err(ActivityError::UserNotFound(username.to_string())),
            StatusCode::FORBIDDEN => Err(ActivityError::RateLimited),
            // Reason is the registered phrase for the code, whatever text
            // the server put on its status line
            other => Err(ActivityError::Http {
                status: other.as_u16(),
                reason: other.canonical_reason().unwrap_or("Unknown").to_string(),
            }),
        }
    }

    fn events_url(&self, username: &str) -> String {
        format!("{}/{}/events", self.base_url, username)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return ActivityError instead of anyhow::Error?
//    - Callers need to know *which* kind of failure happened
//    - A concrete enum lets them match on it (see ActivityError::kind)
//    - main.rs still uses anyhow, because it only prints errors
//
// 2. What does map_err do?
//    - Converts the error inside a Result into another error type
//    - map_err(ActivityError::Network) passes the reqwest::Error into the
//      Network variant (enum variants with one field are functions too!)
//
// 3. Why trim_end_matches('/') on the base URL?
//    - So "http://host/users" and "http://host/users/" build the same URL
// -----------------------------------------------------------------------------

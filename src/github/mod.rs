// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Fetching the first page of a user's public events
//
// Not implemented on purpose:
// - Pagination, authentication tokens, caching, retry on rate limits
// =============================================================================

mod fetch;

pub use fetch::{ActivityFetcher, Event, FetcherConfig, DEFAULT_BASE_URL};

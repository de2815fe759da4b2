// src/activity/mod.rs
// =============================================================================
// This module is what main.rs calls: fetch a user's events, then format them.
//
// Submodules:
// - format: Pure event -> text conversion (no I/O)
// =============================================================================

mod format;

pub use format::format_activity;

use crate::error::ActivityError;
use crate::github::ActivityFetcher;

// Fetches and formats a user's recent activity
//
// Returns: up to ten "- ..." lines (possibly none), or a classified error
pub fn recent_activity(
    fetcher: &ActivityFetcher,
    username: &str,
) -> Result<Vec<String>, ActivityError> {
    let events = fetcher.fetch(username)?;
    Ok(format_activity(&events))
}

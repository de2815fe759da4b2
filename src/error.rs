// src/error.rs
// =============================================================================
// Errors that can come out of fetching a user's activity.
//
// Every failure falls into one of two kinds:
// - InvalidInput: the request can never succeed as given (empty username,
//   user does not exist)
// - ConnectionProblem: something went wrong talking to GitHub (rate limit,
//   network failure, unexpected status, garbage body)
//
// The enum keeps the precise reason so messages stay specific, and kind()
// collapses it to the two-kind view callers act on.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - #[source]: Keeps the underlying error for error chains
// =============================================================================

use thiserror::Error;

/// The two classes of failure a caller has to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The username is empty or does not exist. Retrying won't help.
    InvalidInput,
    /// Provider-side or transport failure. A later retry may succeed.
    ConnectionProblem,
}

impl ErrorKind {
    pub fn is_retriable(self) -> bool {
        matches!(self, ErrorKind::ConnectionProblem)
    }
}

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("API rate limit exceeded. Please try again later")]
    RateLimited,

    #[error("HTTP error {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Invalid response from GitHub API")]
    InvalidResponse,

    #[error("Could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::EmptyUsername | ActivityError::UserNotFound(_) => ErrorKind::InvalidInput,
            ActivityError::RateLimited
            | ActivityError::Http { .. }
            | ActivityError::Network(_)
            | ActivityError::InvalidResponse
            | ActivityError::Client(_) => ErrorKind::ConnectionProblem,
        }
    }
}

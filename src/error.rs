use thiserror::Error;

/// Failure of a user-list fetch.
///
/// Transport failures, non-success HTTP statuses, and undecodable bodies
/// all surface as `RequestFailed` with a human-readable description; the
/// UI shows them uniformly.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Failed to load users: {0}")]
    RequestFailed(String),
}

//! Error Types
//!
//! `ApiError` is what the remote client reports; `TodoError` is the
//! taxonomy the store records and the notification banner shows.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single remote call. Never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Current error shown to the user. Display text is the banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Unable to load todos")]
    Loading,
    #[error("Title should not be empty")]
    EmptyTitle,
    #[error("Unable to add a todo")]
    Add,
    #[error("Unable to update a todo")]
    Update,
    #[error("Unable to delete a todo")]
    Delete,
}

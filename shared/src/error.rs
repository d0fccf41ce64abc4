//! Errors returned by an [`ExpenseClient`](crate::ExpenseClient).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// the request never produced a response
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    /// the response body was not the expected json
    #[error("invalid response body: {0}")]
    Decode(String),
}

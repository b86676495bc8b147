use reqwest::StatusCode;
use thiserror::Error;
use udk_core::UserId;

/// Closed error taxonomy of the remote collection client
///
/// The fixture service cannot distinguish "not found" from "server error" in
/// any richer way than its status code, so this is as fine-grained as the
/// taxonomy gets. Client-side validation failures never reach this type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, or a response body that could not be decoded
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The service answered 404 for the requested record
    #[error("user {0} not found")]
    NotFound(UserId),
    /// Any other non-success status
    #[error("request failed with status {0}")]
    Unexpected(StatusCode),
}

//! HTTP-specific error types for the FedEx API client.
//!
//! The transport never interprets status codes: any response that arrives is
//! handed back to the caller. Only two things can fail here:
//!
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError::Network`]: a connection, TLS or body-read failure
//!
//! # Example
//!
//! ```rust,ignore
//! use fedex_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Status {}", response.status_line()),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use fedex_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody;
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was built without a body.
    #[error("Cannot use post without specifying data.")]
    MissingBody,

    /// The request path does not start with `/`.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

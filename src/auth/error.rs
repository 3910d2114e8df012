//! Error types for OAuth token acquisition.
//!
//! # Example
//!
//! ```rust
//! use fedex_api::auth::AuthError;
//!
//! let error = AuthError::Api {
//!     status: 401,
//!     code: Some("NOT.AUTHORIZED.ERROR".to_string()),
//!     message: "The given client credentials were not valid.".to_string(),
//! };
//! assert_eq!(error.to_string(), "The given client credentials were not valid.");
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};
use crate::error::ApiErrorDetail;

/// Errors returned by [`authorize`](crate::auth::authorize).
///
/// # Thread Safety
///
/// `AuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token request could not be sent or its body could not be read.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A 200 response carried a body that is not a token.
    #[error("Failed to parse token response (HTTP {status}): {source}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// FedEx rejected the request. Displays the first vendor error message.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Vendor error code, e.g. `NOT.AUTHORIZED.ERROR`.
        code: Option<String>,
        /// Vendor error message.
        message: String,
    },

    /// FedEx rejected the request without an `errors[]` entry to report.
    #[error("unknown API error (HTTP {status})")]
    UnknownApiError {
        /// HTTP status code of the response.
        status: u16,
    },
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

impl AuthError {
    /// Builds the error for a non-200 token response.
    ///
    /// Uses the first `errors[]` entry that carries a message; an empty or
    /// unparsable body yields [`AuthError::UnknownApiError`].
    #[must_use]
    pub fn from_error_response(response: &HttpResponse) -> Self {
        let status = response.code;
        let errors = match response.json::<ErrorBody>() {
            Ok(body) => body.errors,
            Err(e) => {
                tracing::warn!(status, error = %e, "Token error response is not JSON");
                Vec::new()
            }
        };

        match errors.into_iter().next() {
            Some(ApiErrorDetail {
                code,
                message: Some(message),
            }) => Self::Api {
                status,
                code,
                message,
            },
            _ => Self::UnknownApiError { status },
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(_) => None,
            Self::Decode { status, .. }
            | Self::Api { status, .. }
            | Self::UnknownApiError { status } => Some(*status),
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};

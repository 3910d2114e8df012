//! Error types for rate quote calls.
//!
//! Both rate paths share [`RateError`]. Which variants can occur depends on
//! the path:
//!
//! | Variant | REST | SOAP |
//! |---|---|---|
//! | `Http` | yes | yes |
//! | `Encode` / `Decode` | yes | |
//! | `XmlEncode` / `XmlDecode` | | yes |
//! | `Status` | yes | |
//! | `BackendError` | | yes |

use thiserror::Error;

use crate::clients::HttpError;
use crate::rate::rest::RateResponse;

/// Errors returned by the rate quote calls.
///
/// # Example
///
/// ```rust
/// use fedex_api::RateError;
///
/// let error = RateError::BackendError { code: 503 };
/// assert_eq!(error.to_string(), "Backend Error with code 503");
/// ```
#[derive(Debug, Error)]
pub enum RateError {
    /// The request could not be sent or its body could not be read.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The REST request could not be serialized.
    #[error("Failed to encode rate request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The SOAP envelope could not be serialized.
    #[error("Failed to encode SOAP rate request: {0}")]
    XmlEncode(#[source] quick_xml::DeError),

    /// A 200 REST response carried a body that is not a rate response.
    #[error("Failed to parse rate response (HTTP {status}): {source}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The SOAP response is not a well-formed rate envelope.
    #[error("Failed to parse SOAP rate response (HTTP {status}): {source}")]
    XmlDecode {
        /// HTTP status code of the response.
        status: u16,
        /// The underlying XML error.
        source: quick_xml::DeError,
    },

    /// The REST endpoint answered with a status other than 200.
    ///
    /// Displays the status line, e.g. `400 Bad Request`. The vendor
    /// `errors[]` are available through `response` when the body parsed.
    #[error("{reason}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// The status line, e.g. `400 Bad Request`.
        reason: String,
        /// The decoded error body, if it was a rate response.
        response: Option<Box<RateResponse>>,
    },

    /// The SOAP endpoint is unavailable (HTTP 503).
    #[error("Backend Error with code {code}")]
    BackendError {
        /// HTTP status code of the response.
        code: u16,
    },
}

impl RateError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(_) | Self::Encode(_) | Self::XmlEncode(_) => None,
            Self::Decode { status, .. }
            | Self::XmlDecode { status, .. }
            | Self::Status { status, .. } => Some(*status),
            Self::BackendError { code } => Some(*code),
        }
    }

    /// Returns the vendor response attached to a [`RateError::Status`].
    #[must_use]
    pub fn response(&self) -> Option<&RateResponse> {
        match self {
            Self::Status { response, .. } => response.as_deref(),
            _ => None,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateError>();
};

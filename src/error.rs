//! Error types for the FedEx API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use fedex_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building configuration or credentials.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the API key of your FedEx project.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the secret key of your FedEx project.")]
    EmptyClientSecret,

    /// Account number is invalid.
    #[error("Invalid account number '{account}'. Expected a non-empty string of digits.")]
    InvalidAccountNumber {
        /// The invalid account number that was provided.
        account: String,
    },

    /// Locale is invalid.
    #[error("Invalid locale '{locale}'. Expected format: 'll_CC' (e.g., 'en_US').")]
    InvalidLocale {
        /// The invalid locale that was provided.
        locale: String,
    },

    /// Environment name is not recognized.
    #[error("Invalid environment '{value}'. Expected 'sandbox' or 'production'.")]
    InvalidEnvironment {
        /// The unrecognized environment name.
        value: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL without a trailing slash (e.g., 'https://apis.fedex.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// One entry of the `errors[]` array FedEx returns alongside a failed call.
///
/// # Example
///
/// ```rust
/// use fedex_api::ApiErrorDetail;
///
/// let detail: ApiErrorDetail = serde_json::from_str(
///     r#"{"code":"NOT.AUTHORIZED.ERROR","message":"The given client credentials were not valid."}"#,
/// ).unwrap();
/// assert_eq!(detail.code.as_deref(), Some("NOT.AUTHORIZED.ERROR"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_detail_tolerates_missing_fields() {
        let detail: ApiErrorDetail = serde_json::from_str("{}").unwrap();
        assert_eq!(detail, ApiErrorDetail::default());

        let json = serde_json::to_string(&detail).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_empty_client_id_error_message() {
        let message = ConfigError::EmptyClientId.to_string();
        assert!(message.contains("Client ID cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyClientSecret;
        let _: &dyn std::error::Error = &error;
    }
}

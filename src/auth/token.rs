//! OAuth token response for the FedEx REST APIs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiErrorDetail;

/// The body of a `/oauth/token` response.
///
/// On success FedEx fills `access_token`, `token_type`, `expires_in` and
/// `scope`; on failure only `errors` is present. After a successful
/// [`authorize`](crate::auth::authorize) call, `url` holds the API base URL
/// the token was issued for.
///
/// There is no refresh logic. [`expired`](Self::expired) only reports
/// whether the lifetime announced by FedEx has elapsed.
///
/// # Example
///
/// ```rust
/// use fedex_api::AccessTokenResponse;
///
/// let token: AccessTokenResponse = serde_json::from_str(r#"{
///     "access_token": "eyJhbGciOiJSUzI1NiJ9.payload.sig",
///     "token_type": "bearer",
///     "expires_in": 3599,
///     "scope": "CXS-TP"
/// }"#).unwrap();
///
/// assert_eq!(token.expires_in, 3599);
/// assert!(!token.expired());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// The bearer token.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,

    /// The token type, `bearer`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_type: String,

    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: u64,

    /// Granted scope.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scope: String,

    /// API base URL the token applies to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Vendor errors, present on failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,

    /// When this response was decoded locally.
    #[serde(skip, default = "Utc::now")]
    pub received_at: DateTime<Utc>,
}

impl AccessTokenResponse {
    /// Returns when the token stops being valid.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        let lifetime = i64::try_from(self.expires_in).unwrap_or(i64::MAX);
        self.received_at + Duration::seconds(lifetime.min(i64::from(i32::MAX)))
    }

    /// Returns `true` once the announced lifetime has elapsed.
    #[must_use]
    pub fn expired(&self) -> bool {
        Utc::now() >= self.expires_at()
    }

    /// Returns the value of the `Authorization` header for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Returns the first vendor error, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&ApiErrorDetail> {
        self.errors.first()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessTokenResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(expires_in: u64, received_at: DateTime<Utc>) -> AccessTokenResponse {
        AccessTokenResponse {
            access_token: "token".to_string(),
            token_type: "bearer".to_string(),
            expires_in,
            scope: "CXS".to_string(),
            url: String::new(),
            errors: Vec::new(),
            received_at,
        }
    }

    #[test]
    fn test_expired() {
        let expired = token_with(60, Utc::now() - Duration::hours(1));
        assert!(expired.expired());

        let valid = token_with(3599, Utc::now());
        assert!(!valid.expired());

        let zero = token_with(0, Utc::now() - Duration::seconds(1));
        assert!(zero.expired());
    }

    #[test]
    fn test_expires_at_adds_lifetime() {
        let received = Utc::now();
        let token = token_with(3600, received);
        assert_eq!(token.expires_at(), received + Duration::seconds(3600));
    }

    #[test]
    fn test_authorization_header() {
        let token = token_with(3600, Utc::now());
        assert_eq!(token.authorization_header(), "Bearer token");
    }

    #[test]
    fn test_error_body_deserializes() {
        let token: AccessTokenResponse = serde_json::from_str(
            r#"{"transactionId":"x","errors":[{"code":"NOT.AUTHORIZED.ERROR","message":"The given client credentials were not valid. Please modify your request and try again."}]}"#,
        )
        .unwrap();

        assert!(token.access_token.is_empty());
        assert_eq!(
            token.first_error().and_then(|e| e.code.as_deref()),
            Some("NOT.AUTHORIZED.ERROR")
        );
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let json = serde_json::to_value(token_with(10, Utc::now())).unwrap();
        assert!(json.get("url").is_none());
        assert!(json.get("errors").is_none());
        assert!(json.get("received_at").is_none());
        assert_eq!(json["access_token"], "token");
    }
}

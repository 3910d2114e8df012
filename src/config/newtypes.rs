//! Validated newtype wrappers for configuration and credential values.
//!
//! Invalid values are rejected on construction with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated FedEx OAuth client ID (the project's API key).
///
/// # Example
///
/// ```rust
/// use fedex_api::ClientId;
///
/// let id = ClientId::new("l7xx1234").unwrap();
/// assert_eq!(id.as_ref(), "l7xx1234");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated FedEx OAuth client secret.
///
/// The `Debug` implementation masks the value, displaying only
/// `ClientSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use fedex_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A FedEx account number.
///
/// Account numbers are digit strings. Surrounding whitespace is trimmed.
///
/// # Serialization
///
/// Serializes as the REST API's `{"value": "..."}` wrapper:
///
/// ```rust
/// use fedex_api::AccountNumber;
///
/// let account = AccountNumber::new("740561073").unwrap();
/// let json = serde_json::to_string(&account).unwrap();
/// assert_eq!(json, r#"{"value":"740561073"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Creates a new validated account number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountNumber`] if the value is empty or
    /// contains anything other than ASCII digits.
    pub fn new(account: impl Into<String>) -> Result<Self, ConfigError> {
        let account = account.into();
        let trimmed = account.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidAccountNumber { account });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize)]
struct AccountNumberRepr {
    value: String,
}

impl Serialize for AccountNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        AccountNumberRepr {
            value: self.0.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccountNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = AccountNumberRepr::deserialize(deserializer)?;
        Self::new(repr.value).map_err(de::Error::custom)
    }
}

/// A validated base URL for one of the FedEx services.
///
/// The URL must use `http` or `https`, carry a host and have no trailing
/// slash, since request paths are appended verbatim.
///
/// # Example
///
/// ```rust
/// use fedex_api::BaseUrl;
///
/// let url = BaseUrl::new("https://apis-sandbox.fedex.com").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "apis-sandbox.fedex.com");
/// assert_eq!(url.join("/oauth/token"), "https://apis-sandbox.fedex.com/oauth/token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }
        if url.ends_with('/') {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }

    /// Appends `path` to this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated `language_COUNTRY` locale sent in the `X-locale` header.
///
/// # Example
///
/// ```rust
/// use fedex_api::Locale;
///
/// assert_eq!(Locale::default().as_ref(), "en_US");
/// assert!(Locale::new("fr_CA").is_ok());
/// assert!(Locale::new("english").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale(String);

impl Locale {
    /// Creates a new validated locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocale`] if the value is not of the
    /// form `ll_CC`.
    pub fn new(locale: impl Into<String>) -> Result<Self, ConfigError> {
        let locale = locale.into();
        let valid = match locale.split_once('_') {
            Some((language, country)) => {
                language.len() == 2
                    && country.len() == 2
                    && language.chars().all(|c| c.is_ascii_lowercase())
                    && country.chars().all(|c| c.is_ascii_uppercase())
            }
            None => false,
        };
        if !valid {
            return Err(ConfigError::InvalidLocale { locale });
        }
        Ok(Self(locale))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en_US".to_string())
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_account_number_trims_and_validates() {
        let account = AccountNumber::new(" 740561073 ").unwrap();
        assert_eq!(account.as_ref(), "740561073");

        assert!(AccountNumber::new("").is_err());
        assert!(AccountNumber::new("7405-61073").is_err());
        assert!(AccountNumber::new("abc").is_err());
    }

    #[test]
    fn test_account_number_deserializes_from_value_wrapper() {
        let account: AccountNumber = serde_json::from_str(r#"{"value":"123456789"}"#).unwrap();
        assert_eq!(account.as_ref(), "123456789");

        let result: Result<AccountNumber, _> = serde_json::from_str(r#"{"value":"x1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("https://ws.fedex.com:443/web-services").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "ws.fedex.com");
        assert_eq!(url.join("/rate"), "https://ws.fedex.com:443/web-services/rate");

        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("apis.fedex.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("ftp://apis.fedex.com").is_err());
        assert!(BaseUrl::new("https://apis.fedex.com/").is_err());
    }

    #[test]
    fn test_locale_validation() {
        assert!(Locale::new("en_US").is_ok());
        assert!(Locale::new("es_MX").is_ok());
        assert!(Locale::new("en-US").is_err());
        assert!(Locale::new("EN_us").is_err());
        assert!(Locale::new("").is_err());
    }
}

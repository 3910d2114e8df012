//! Credentials for the two FedEx authentication schemes.
//!
//! - [`OAuthCredentials`]: client ID/secret exchanged for a bearer token on
//!   the REST APIs
//! - [`WebServiceCredentials`]: the key/password/account/meter quadruple
//!   embedded in every legacy SOAP request

use std::fmt;

use crate::config::{AccountNumber, ClientId, ClientSecret};

/// Default OAuth grant type.
pub const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// OAuth client credentials for the FedEx REST APIs.
///
/// # Example
///
/// ```rust
/// use fedex_api::{ClientId, ClientSecret, OAuthCredentials};
///
/// let credentials = OAuthCredentials::new(
///     ClientId::new("l7xx-id").unwrap(),
///     ClientSecret::new("s3cr3t").unwrap(),
/// );
/// assert_eq!(credentials.grant_type(), "client_credentials");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthCredentials {
    grant_type: String,
    client_id: ClientId,
    client_secret: ClientSecret,
}

impl OAuthCredentials {
    /// Creates credentials using the `client_credentials` grant type.
    #[must_use]
    pub fn new(client_id: ClientId, client_secret: ClientSecret) -> Self {
        Self {
            grant_type: CLIENT_CREDENTIALS_GRANT_TYPE.to_string(),
            client_id,
            client_secret,
        }
    }

    /// Replaces the grant type (e.g. `csp_credentials` for integrators).
    #[must_use]
    pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = grant_type.into();
        self
    }

    /// Returns the grant type.
    #[must_use]
    pub fn grant_type(&self) -> &str {
        &self.grant_type
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the token request body.
    ///
    /// Values are concatenated verbatim, without percent-encoding, which is
    /// what the FedEx token endpoint has always been sent by this client.
    #[must_use]
    pub fn form_body(&self) -> String {
        format!(
            "grant_type={}&client_id={}&client_secret={}",
            self.grant_type,
            self.client_id.as_ref(),
            self.client_secret.as_ref()
        )
    }
}

/// A key/password pair used in the SOAP `WebAuthenticationDetail`.
#[derive(Clone, PartialEq, Eq)]
pub struct WebCredential {
    /// The developer or production key.
    pub key: String,
    /// The password issued with the key.
    pub password: String,
}

impl WebCredential {
    /// Creates a new key/password pair.
    #[must_use]
    pub fn new(key: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for WebCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebCredential")
            .field("key", &self.key)
            .field("password", &"*****")
            .finish()
    }
}

/// Credentials for the legacy SOAP web services.
///
/// # Example
///
/// ```rust
/// use fedex_api::{AccountNumber, WebCredential, WebServiceCredentials};
///
/// let credentials = WebServiceCredentials::new(
///     WebCredential::new("dev-key", "dev-password"),
///     AccountNumber::new("510087020").unwrap(),
///     "119238439",
/// );
/// assert!(credentials.parent.is_none());
/// assert!(!format!("{credentials:?}").contains("dev-password"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebServiceCredentials {
    /// The user credential.
    pub user: WebCredential,
    /// The parent credential, used by compatible solution providers.
    pub parent: Option<WebCredential>,
    /// The FedEx account number.
    pub account_number: AccountNumber,
    /// The meter number issued with the key.
    pub meter_number: String,
}

impl WebServiceCredentials {
    /// Creates credentials without a parent credential.
    #[must_use]
    pub fn new(
        user: WebCredential,
        account_number: AccountNumber,
        meter_number: impl Into<String>,
    ) -> Self {
        Self {
            user,
            parent: None,
            account_number,
            meter_number: meter_number.into(),
        }
    }

    /// Sets the parent credential.
    #[must_use]
    pub fn with_parent(mut self, parent: WebCredential) -> Self {
        self.parent = Some(parent);
        self
    }
}

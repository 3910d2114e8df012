//! Authentication for the FedEx services.
//!
//! The REST APIs use an OAuth 2.0 bearer token obtained with
//! [`authorize`]; the legacy SOAP web services embed
//! [`WebServiceCredentials`] in every request instead.
//!
//! # Overview
//!
//! - [`OAuthCredentials`]: Client ID, secret and grant type
//! - [`authorize`]: Exchanges credentials for an [`AccessTokenResponse`]
//! - [`AuthError`]: Token acquisition failures
//! - [`WebServiceCredentials`]: Key, password, account and meter for SOAP calls
//!
//! Tokens are not cached or refreshed. Call [`authorize`] again once
//! [`AccessTokenResponse::expired`] returns `true`.

mod authorize;
mod credentials;
mod error;
mod token;

pub use authorize::{authorize, TOKEN_PATH};
pub use credentials::{
    OAuthCredentials, WebCredential, WebServiceCredentials, CLIENT_CREDENTIALS_GRANT_TYPE,
};
pub use error::AuthError;
pub use token::AccessTokenResponse;

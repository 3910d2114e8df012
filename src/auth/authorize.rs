//! OAuth 2.0 client credentials exchange against the FedEx API.

use crate::auth::credentials::OAuthCredentials;
use crate::auth::error::AuthError;
use crate::auth::token::AccessTokenResponse;
use crate::clients::{DataType, HttpClient, HttpError, HttpRequest};
use crate::config::{FedexConfig, Service};

/// Path of the token endpoint, relative to the API base URL.
pub const TOKEN_PATH: &str = "/oauth/token";

/// Exchanges client credentials for a bearer token.
///
/// POSTs `grant_type`, `client_id` and `client_secret` as a form body to
/// `{api_base_url}/oauth/token`. On success the returned token's `url` is
/// set to the API base URL it was issued by, so it can be handed straight
/// to the REST rate call.
///
/// # Errors
///
/// - [`AuthError::Http`] if the request cannot be sent
/// - [`AuthError::Decode`] if a 200 response is not a token
/// - [`AuthError::Api`] with the first vendor error for any other status
/// - [`AuthError::UnknownApiError`] when such a response has no usable error
///
/// # Example
///
/// ```rust,ignore
/// use fedex_api::{ClientId, ClientSecret, FedexConfig, OAuthCredentials};
/// use fedex_api::auth::authorize;
///
/// let config = FedexConfig::default();
/// let credentials = OAuthCredentials::new(
///     ClientId::new("your-client-id")?,
///     ClientSecret::new("your-client-secret")?,
/// );
///
/// let token = authorize(&config, &credentials).await?;
/// println!("Token valid until {}", token.expires_at());
/// ```
pub async fn authorize(
    config: &FedexConfig,
    credentials: &OAuthCredentials,
) -> Result<AccessTokenResponse, AuthError> {
    let client = HttpClient::new(Service::Api, config);
    let request = HttpRequest::builder(TOKEN_PATH)
        .body(credentials.form_body(), DataType::FormUrlEncoded)
        .build()
        .map_err(HttpError::from)?;

    let response = client.request(request).await?;

    if !response.is_ok() {
        let error = AuthError::from_error_response(&response);
        tracing::debug!(status = response.code, error = %error, "Token request rejected");
        return Err(error);
    }

    let mut token: AccessTokenResponse =
        response.json().map_err(|source| AuthError::Decode {
            status: response.code,
            source,
        })?;
    token.url = config.api_base_url().to_string();

    Ok(token)
}

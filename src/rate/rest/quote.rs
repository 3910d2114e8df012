//! The REST rate quote call.

use crate::auth::AccessTokenResponse;
use crate::clients::{DataType, HttpClient, HttpError, HttpRequest};
use crate::config::{FedexConfig, Service};
use crate::rate::error::RateError;
use crate::rate::rest::request::RateRequest;
use crate::rate::rest::response::RateResponse;

/// Path of the rate quote endpoint, relative to the API base URL.
pub const RATE_QUOTES_PATH: &str = "/rate/v1/rates/quotes";

impl RateRequest {
    /// Requests a rate quote over the REST API.
    ///
    /// Sends the request as JSON to `{api_base_url}/rate/v1/rates/quotes`
    /// with the bearer token and the configured `X-locale`.
    ///
    /// # Errors
    ///
    /// - [`RateError::Encode`] if the request cannot be serialized
    /// - [`RateError::Http`] if the request cannot be sent
    /// - [`RateError::Decode`] if a 200 response is not a rate response
    /// - [`RateError::Status`] for any other status, carrying the vendor
    ///   errors when the body parses
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fedex_api::auth::authorize;
    ///
    /// let token = authorize(&config, &credentials).await?;
    /// let response = request.rate(&config, &token.access_token).await?;
    /// for detail in response.rate_reply_details() {
    ///     println!("{:?}: {:?}", detail.service_type, detail.rated_shipment_details);
    /// }
    /// ```
    pub async fn rate(
        &self,
        config: &FedexConfig,
        access_token: &str,
    ) -> Result<RateResponse, RateError> {
        let body = serde_json::to_string(self).map_err(RateError::Encode)?;
        let request = HttpRequest::builder(RATE_QUOTES_PATH)
            .body(body, DataType::Json)
            .bearer_auth(access_token)
            .header("X-locale", config.locale().as_ref())
            .build()
            .map_err(HttpError::from)?;

        let client = HttpClient::new(Service::Api, config);
        let response = client.request(request).await?;

        if response.is_ok() {
            return response.json().map_err(|source| RateError::Decode {
                status: response.code,
                source,
            });
        }

        let vendor = match response.json::<RateResponse>() {
            Ok(parsed) => Some(Box::new(parsed)),
            Err(e) => {
                tracing::warn!(
                    status = response.code,
                    error = %e,
                    "Rate error response could not be decoded"
                );
                None
            }
        };

        Err(RateError::Status {
            status: response.code,
            reason: response.status_line(),
            response: vendor,
        })
    }

    /// Requests a rate quote using a token from
    /// [`authorize`](crate::auth::authorize).
    ///
    /// # Errors
    ///
    /// Same as [`rate`](Self::rate).
    pub async fn rate_with_token(
        &self,
        config: &FedexConfig,
        token: &AccessTokenResponse,
    ) -> Result<RateResponse, RateError> {
        if token.expired() {
            tracing::debug!(expires_at = %token.expires_at(), "Rating with an expired token");
        }
        self.rate(config, &token.access_token).await
    }
}

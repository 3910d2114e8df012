//! The SOAP rate call.

use crate::clients::HttpClient;
use crate::config::{FedexConfig, Service};
use crate::rate::error::RateError;
use crate::rate::soap::envelope::to_envelope;
use crate::rate::soap::request::RateXmlRequest;
use crate::rate::soap::response::RateXmlResponse;

/// Path of the rate service, relative to the web services base URL.
///
/// [`RateXmlRequest::rate`] always posts here; use
/// [`RateXmlRequest::rate_at`] to target another path.
pub const RATE_PATH: &str = "/rate";

/// Status the web service returns when its backend is down.
const SERVICE_UNAVAILABLE: u16 = 503;

impl RateXmlRequest {
    /// Requests a rate quote from the legacy SOAP web service.
    ///
    /// Wraps the request in a `SOAP-ENV:Envelope` and POSTs it to
    /// `{web_services_base_url}/rate`. A SOAP fault is not an error here:
    /// it decodes into the returned response, see
    /// [`RateXmlResponse::fault`].
    ///
    /// # Errors
    ///
    /// - [`RateError::XmlEncode`] if the envelope cannot be serialized
    /// - [`RateError::Http`] if the request cannot be sent
    /// - [`RateError::BackendError`] on HTTP 503, without decoding the body
    /// - [`RateError::XmlDecode`] if the body is not a SOAP envelope
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = request.rate(&config).await?;
    /// if let Some(fault) = response.fault() {
    ///     eprintln!("SOAP fault: {:?}", fault.message());
    /// }
    /// ```
    pub async fn rate(&self, config: &FedexConfig) -> Result<RateXmlResponse, RateError> {
        self.rate_at(config, RATE_PATH).await
    }

    /// Same as [`rate`](Self::rate), posting to `path` under the web
    /// services base URL instead of [`RATE_PATH`].
    ///
    /// # Errors
    ///
    /// Same as [`rate`](Self::rate). A `path` without a leading `/` is
    /// rejected as [`RateError::Http`].
    pub async fn rate_at(
        &self,
        config: &FedexConfig,
        path: &str,
    ) -> Result<RateXmlResponse, RateError> {
        let envelope = to_envelope(self).map_err(RateError::XmlEncode)?;

        let client = HttpClient::new(Service::WebServices, config);
        let response = client.post_xml(&envelope, path).await?;

        if response.code == SERVICE_UNAVAILABLE {
            return Err(RateError::BackendError {
                code: response.code,
            });
        }

        let body = response.text();
        tracing::trace!(status = response.code, %body, "SOAP rate response");

        RateXmlResponse::from_xml(&body).map_err(|source| RateError::XmlDecode {
            status: response.code,
            source,
        })
    }
}

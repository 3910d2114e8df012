//! HTTP transport shared by the OAuth, REST and SOAP calls.
//!
//! This module provides the [`HttpClient`] type. One client targets one
//! [`Service`]; its base URL comes from the configured environment or an
//! explicit override.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{DataType, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{FedexConfig, Service};

/// XML declaration prepended to every SOAP payload.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for POSTing payloads to a FedEx service.
///
/// The client handles:
/// - Base URL selection from the environment or an override
/// - Default headers including User-Agent
/// - Returning the complete response, whatever its status, for the caller to
///   interpret
///
/// There is no retry logic and no timeout beyond the `reqwest` default.
///
/// # Example
///
/// ```rust,ignore
/// use fedex_api::{FedexConfig, Service};
/// use fedex_api::clients::HttpClient;
///
/// let config = FedexConfig::default();
/// let client = HttpClient::new(Service::WebServices, &config);
/// let response = client.post_xml("<SOAP-ENV:Envelope>...</SOAP-ENV:Envelope>", "/rate").await?;
/// println!("{}", response.text());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    service: Service,
    /// Base URI (e.g., `https://apis-sandbox.fedex.com`).
    base_uri: String,
    test_mode: bool,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for `service`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(service: Service, config: &FedexConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}FedEx API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        if service == Service::Api {
            default_headers.insert("Accept".to_string(), "application/json".to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            service,
            base_uri: config.base_url(service).to_string(),
            test_mode: config.is_test_mode(),
            default_headers,
        }
    }

    /// Returns the service this client targets.
    #[must_use]
    pub const fn service(&self) -> Service {
        self.service
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for `path`.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_uri)
    }

    /// POSTs a request and returns the complete response.
    ///
    /// Non-2xx statuses are not errors at this layer; the response body,
    /// including any vendor error payload, is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs or the body cannot be read (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);
        if self.test_mode {
            tracing::debug!(%url, service = ?self.service, "Sending FedEx request");
        }

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self.client.post(&url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(
            code = status.as_u16(),
            bytes = body.len(),
            "Received FedEx response from {}",
            request.path
        );

        Ok(HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().map(String::from),
            res_headers,
            body,
        ))
    }

    /// POSTs a SOAP payload to `path`, prefixed with the XML declaration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] as [`request`](Self::request) does.
    pub async fn post_xml(&self, xml: &str, path: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(path)
            .body(format!("{XML_DECLARATION}{xml}"), DataType::Xml)
            .build()?;
        self.request(request).await
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Environment};

    #[test]
    fn test_client_uses_environment_base_uri() {
        let config = FedexConfig::new(Environment::Production);

        let api = HttpClient::new(Service::Api, &config);
        assert_eq!(api.base_uri(), "https://apis.fedex.com");
        assert_eq!(api.service(), Service::Api);

        let ws = HttpClient::new(Service::WebServices, &config);
        assert_eq!(ws.base_uri(), "https://ws.fedex.com:443/web-services");
        assert_eq!(ws.url_for("/rate"), "https://ws.fedex.com:443/web-services/rate");
    }

    #[test]
    fn test_client_honours_base_url_override() {
        let config = FedexConfig::builder()
            .api_base_url(BaseUrl::new("http://127.0.0.1:4010").unwrap())
            .build();
        let client = HttpClient::new(Service::Api, &config);

        assert_eq!(client.url_for("/oauth/token"), "http://127.0.0.1:4010/oauth/token");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(Service::Api, &FedexConfig::default());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("FedEx API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = FedexConfig::builder().user_agent_prefix("MyShop/1.0").build();
        let client = HttpClient::new(Service::WebServices, &config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/1.0 | "));
    }

    #[test]
    fn test_accept_header_only_for_rest_apis() {
        let config = FedexConfig::default();

        let api = HttpClient::new(Service::Api, &config);
        assert_eq!(
            api.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );

        let ws = HttpClient::new(Service::WebServices, &config);
        assert!(ws.default_headers().get("Accept").is_none());
    }

    #[test]
    fn test_xml_declaration() {
        assert_eq!(XML_DECLARATION, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    }
}

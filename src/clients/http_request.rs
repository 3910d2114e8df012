//! HTTP request types for the FedEx API client.
//!
//! Every FedEx call in this crate is a POST, so [`HttpRequest`] only carries
//! a path, a pre-encoded body and its content type.

use std::collections::HashMap;

use crate::clients::errors::InvalidHttpRequestError;

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// SOAP XML content type (`text/xml`).
    Xml,
    /// Form content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "text/xml",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// A POST request to be sent to a FedEx service.
///
/// # Example
///
/// ```rust
/// use fedex_api::clients::{DataType, HttpRequest};
///
/// let request = HttpRequest::builder("/rate/v1/rates/quotes")
///     .body(r#"{"accountNumber":{"value":"123"}}"#, DataType::Json)
///     .header("X-locale", "en_US")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "/rate/v1/rates/quotes");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The path appended to the service base URL. Starts with `/`.
    pub path: String,
    /// The encoded request body.
    pub body: Option<String>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for a POST to `path`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` does not start with `/`
    /// - `body` is `None`
    /// - `body` is `Some` but `body_type` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }
        if self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody);
        }
        if self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    body: Option<String>,
    body_type: Option<DataType>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: None,
            body_type: None,
            extra_headers: None,
        }
    }

    /// Sets the encoded body and its content type.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>, body_type: DataType) -> Self {
        self.body = Some(body.into());
        self.body_type = Some(body_type);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a `Bearer` authorization header.
    #[must_use]
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(DataType::Xml.as_content_type(), "text/xml");
        assert_eq!(
            DataType::FormUrlEncoded.as_content_type(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn test_builder_creates_valid_request() {
        let request = HttpRequest::builder("/oauth/token")
            .body("grant_type=client_credentials", DataType::FormUrlEncoded)
            .build()
            .unwrap();

        assert_eq!(request.path, "/oauth/token");
        assert_eq!(request.body.as_deref(), Some("grant_type=client_credentials"));
        assert_eq!(request.body_type, Some(DataType::FormUrlEncoded));
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_verify_requires_body() {
        let result = HttpRequest::builder("/rate").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::MissingBody)));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let request = HttpRequest {
            path: "/rate".to_string(),
            body: Some("<x/>".to_string()),
            body_type: None,
            extra_headers: None,
        };
        assert!(matches!(
            request.verify(),
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_verify_rejects_relative_path() {
        let result = HttpRequest::builder("rate")
            .body("<x/>", DataType::Xml)
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidPath { path }) if path == "rate"
        ));
    }

    #[test]
    fn test_bearer_auth_sets_authorization_header() {
        let request = HttpRequest::builder("/rate/v1/rates/quotes")
            .body("{}", DataType::Json)
            .bearer_auth("abc.def")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer abc.def".to_string())
        );
    }
}

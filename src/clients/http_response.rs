//! HTTP response type for the FedEx API client.
//!
//! The body is kept as raw bytes: the caller decides whether it is JSON or a
//! SOAP envelope, and whether a non-200 status is an error.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// A raw HTTP response from a FedEx service.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The canonical reason phrase for `code`, if known.
    pub reason: Option<String>,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        reason: Option<String>,
        headers: HashMap<String, Vec<String>>,
        body: Vec<u8>,
    ) -> Self {
        Self {
            code,
            reason,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is exactly 200.
    ///
    /// FedEx signals success with 200 only; every other code carries an
    /// error payload.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns the status line as `"<code> <reason>"`, e.g. `"400 Bad Request"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fedex_api::clients::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(401, Some("Unauthorized".into()), HashMap::new(), vec![]);
    /// assert_eq!(response.status_line(), "401 Unauthorized");
    /// ```
    #[must_use]
    pub fn status_line(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{} {reason}", self.code),
            None => self.code.to_string(),
        }
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Returns the first value of header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_is_ok_only_for_200() {
        let ok = HttpResponse::new(200, Some("OK".into()), HashMap::new(), vec![]);
        assert!(ok.is_ok());

        for code in [201, 204, 400, 401, 500, 503] {
            let response = HttpResponse::new(code, None, HashMap::new(), vec![]);
            assert!(!response.is_ok(), "Expected is_ok() to be false for {code}");
        }
    }

    #[test]
    fn test_status_line_without_reason() {
        let response = HttpResponse::new(599, None, HashMap::new(), vec![]);
        assert_eq!(response.status_line(), "599");
    }

    #[test]
    fn test_json_and_text_views_of_body() {
        let response = HttpResponse::new(
            200,
            None,
            HashMap::new(),
            br#"{"transactionId":"abc"}"#.to_vec(),
        );
        let value: Value = response.json().unwrap();
        assert_eq!(value["transactionId"], "abc");
        assert_eq!(response.text(), r#"{"transactionId":"abc"}"#);
    }

    #[test]
    fn test_json_reports_malformed_body() {
        let response = HttpResponse::new(200, None, HashMap::new(), b"{not json".to_vec());
        assert!(response.json::<Value>().is_err());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec!["text/xml".to_string()]);
        let response = HttpResponse::new(200, None, headers, vec![]);

        assert_eq!(response.header("Content-Type"), Some("text/xml"));
        assert!(response.header("x-missing").is_none());
    }
}

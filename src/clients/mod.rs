//! HTTP transport for FedEx API communication.
//!
//! One transport serves both FedEx services: the OAuth2/REST APIs and the
//! legacy SOAP web services. Which one a client talks to is a configuration
//! value ([`Service`](crate::Service)), not a separate code path.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async POST transport
//! - [`HttpRequest`]: A request to be sent
//! - [`HttpResponse`]: The raw response, returned for every status code
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`]: Transport and validation failures
//!
//! # Example
//!
//! ```rust,ignore
//! use fedex_api::{FedexConfig, Service};
//! use fedex_api::clients::{DataType, HttpClient, HttpRequest};
//!
//! let client = HttpClient::new(Service::Api, &FedexConfig::default());
//! let request = HttpRequest::builder("/rate/v1/rates/quotes")
//!     .body(json_body, DataType::Json)
//!     .bearer_auth(&token)
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION, XML_DECLARATION};
pub use http_request::{DataType, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

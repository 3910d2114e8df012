//! # FedEx API Rust Client
//!
//! A Rust client for FedEx rate quotes, covering both the OAuth-protected
//! REST API and the legacy SOAP web services.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`FedexConfig`] and [`FedexConfigBuilder`]
//! - Validated newtypes for credentials and domain values
//! - OAuth 2.0 client-credentials token acquisition via [`auth::authorize`]
//! - A single async POST transport for both services ([`clients::HttpClient`])
//! - REST JSON rate quotes via [`RateRequest::rate`](rate::rest::RateRequest::rate)
//! - SOAP XML rate quotes via [`RateXmlRequest::rate`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fedex_api::{ClientId, ClientSecret, Environment, FedexConfig, OAuthCredentials};
//!
//! let config = FedexConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .build();
//!
//! let credentials = OAuthCredentials::new(
//!     ClientId::new("your-client-id").unwrap(),
//!     ClientSecret::new("your-client-secret").unwrap(),
//! );
//!
//! assert!(config.is_test_mode());
//! assert_eq!(credentials.grant_type(), "client_credentials");
//! ```
//!
//! ## REST Rate Quotes
//!
//! ```rust,ignore
//! use fedex_api::auth::authorize;
//! use fedex_api::rate::rest::{Address, Party, RateRequest, RequestedPackageLineItem, RequestedShipment, Weight};
//!
//! let token = authorize(&config, &credentials).await?;
//!
//! let shipment = RequestedShipment {
//!     shipper: Party::at(Address { postal_code: Some("38017".into()), country_code: Some("US".into()), ..Default::default() }),
//!     recipient: Party::at(Address { postal_code: Some("90210".into()), country_code: Some("US".into()), ..Default::default() }),
//!     requested_package_line_items: vec![RequestedPackageLineItem { weight: Weight::pounds(10.0), ..Default::default() }],
//!     ..Default::default()
//! };
//!
//! let response = RateRequest::new(account, shipment)
//!     .rate_with_token(&config, &token)
//!     .await?;
//! println!("cheapest: {:?}", response.cheapest_net_charge());
//! ```
//!
//! ## SOAP Rate Quotes
//!
//! ```rust,ignore
//! use fedex_api::{RateXmlRequest, WebCredential, WebServiceCredentials};
//! use fedex_api::rate::soap::RequestedShipment;
//!
//! let credentials = WebServiceCredentials::new(
//!     WebCredential::new("key", "password"),
//!     account,
//!     "meter-number",
//! );
//! let response = RateXmlRequest::new(&credentials, RequestedShipment::default())
//!     .rate(&config)
//!     .await?;
//!
//! match response.fault() {
//!     Some(fault) => eprintln!("fault: {:?}", fault.message()),
//!     None => println!("{:?}", response.reply()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No token caching**: Callers decide when to call [`auth::authorize`] again

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rate;

// Re-export public types at crate root for convenience
pub use auth::{AccessTokenResponse, OAuthCredentials, WebCredential, WebServiceCredentials};
pub use config::{
    AccountNumber, BaseUrl, ClientId, ClientSecret, Environment, FedexConfig, FedexConfigBuilder,
    Locale, Service,
};
pub use error::{ApiErrorDetail, ConfigError};

// Re-export HTTP client types
pub use clients::{DataType, HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse};

// Re-export rate entry points
pub use rate::rest::{RateRequest, RateResponse};
pub use rate::soap::{RateXmlRequest, RateXmlResponse};
pub use rate::RateError;

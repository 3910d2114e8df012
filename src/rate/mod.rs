//! Rate quotes.
//!
//! FedEx exposes two independent rate interfaces, both supported here:
//!
//! - [`rest`]: JSON over the OAuth-protected REST API
//! - [`soap`]: XML envelopes over the legacy web services
//!
//! They share [`RateError`] but nothing else: the schemas differ, and so do
//! the authentication schemes.

mod error;
pub mod rest;
pub mod soap;

pub use error::RateError;

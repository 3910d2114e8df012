//! FedEx environment selection.
//!
//! This module provides the [`Environment`] enum choosing between the FedEx
//! sandbox and production hosts, and the [`Service`] enum naming which of
//! the two FedEx services (REST APIs or legacy web services) a request targets.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// REST API base URL for the sandbox environment.
pub const API_SANDBOX_URL: &str = "https://apis-sandbox.fedex.com";
/// REST API base URL for the production environment.
pub const API_PRODUCTION_URL: &str = "https://apis.fedex.com";
/// Legacy web-services base URL for the sandbox environment.
pub const WEB_SERVICES_SANDBOX_URL: &str = "https://wsbeta.fedex.com:443/web-services";
/// Legacy web-services base URL for the production environment.
pub const WEB_SERVICES_PRODUCTION_URL: &str = "https://ws.fedex.com:443/web-services";

/// The FedEx environment requests are sent to.
///
/// # Example
///
/// ```rust
/// use fedex_api::{Environment, Service};
///
/// let env: Environment = "sandbox".parse().unwrap();
/// assert!(env.is_sandbox());
/// assert_eq!(env.base_url(Service::Api), "https://apis-sandbox.fedex.com");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// FedEx test environment (`apis-sandbox` / `wsbeta`).
    #[default]
    Sandbox,
    /// FedEx live environment.
    Production,
}

impl Environment {
    /// Selects the environment from the classic `test_mode` flag.
    #[must_use]
    pub const fn from_test_mode(test_mode: bool) -> Self {
        if test_mode {
            Self::Sandbox
        } else {
            Self::Production
        }
    }

    /// Returns `true` for the sandbox environment.
    #[must_use]
    pub const fn is_sandbox(self) -> bool {
        matches!(self, Self::Sandbox)
    }

    /// Returns the default base URL of `service` in this environment.
    #[must_use]
    pub const fn base_url(self, service: Service) -> &'static str {
        match (self, service) {
            (Self::Sandbox, Service::Api) => API_SANDBOX_URL,
            (Self::Production, Service::Api) => API_PRODUCTION_URL,
            (Self::Sandbox, Service::WebServices) => WEB_SERVICES_SANDBOX_URL,
            (Self::Production, Service::WebServices) => WEB_SERVICES_PRODUCTION_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => f.write_str("sandbox"),
            Self::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "test" => Ok(Self::Sandbox),
            "production" | "live" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

/// The FedEx service a transport talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    /// The OAuth2 REST APIs (`/oauth/token`, `/rate/v1/...`).
    Api,
    /// The legacy SOAP web services (`/web-services/rate`).
    WebServices,
}

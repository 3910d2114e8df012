//! Configuration types for the FedEx API client.
//!
//! This module provides the configuration passed explicitly to every call.
//! There is no global state: the configuration only selects hosts and a
//! few request headers.
//!
//! # Overview
//!
//! - [`FedexConfig`]: The configuration struct
//! - [`FedexConfigBuilder`]: A builder for constructing [`FedexConfig`] instances
//! - [`Environment`]: Sandbox or production
//! - [`Service`]: REST APIs or legacy web services
//! - [`ClientId`], [`ClientSecret`], [`AccountNumber`], [`BaseUrl`], [`Locale`]:
//!   validated newtypes
//!
//! # Example
//!
//! ```rust
//! use fedex_api::{Environment, FedexConfig};
//!
//! let config = FedexConfig::builder()
//!     .environment(Environment::Production)
//!     .user_agent_prefix("MyShop/2.1")
//!     .build();
//!
//! assert_eq!(config.api_base_url(), "https://apis.fedex.com");
//! ```

mod environment;
mod newtypes;

pub use environment::{
    Environment, Service, API_PRODUCTION_URL, API_SANDBOX_URL, WEB_SERVICES_PRODUCTION_URL,
    WEB_SERVICES_SANDBOX_URL,
};
pub use newtypes::{AccountNumber, BaseUrl, ClientId, ClientSecret, Locale};

/// Configuration for the FedEx API client.
///
/// # Base URL Overrides
///
/// Each service's base URL defaults to the FedEx host for the configured
/// [`Environment`]. An override replaces it, which is how requests are routed
/// through a proxy or to a local mock server.
///
/// # Thread Safety
///
/// `FedexConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct FedexConfig {
    environment: Environment,
    api_base_url: Option<BaseUrl>,
    web_services_base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    locale: Locale,
}

impl FedexConfig {
    /// Creates a new builder for constructing a `FedexConfig`.
    #[must_use]
    pub fn builder() -> FedexConfigBuilder {
        FedexConfigBuilder::new()
    }

    /// Creates a configuration for `environment` with all other values defaulted.
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self::builder().environment(environment).build()
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns `true` when talking to the sandbox environment.
    #[must_use]
    pub const fn is_test_mode(&self) -> bool {
        self.environment.is_sandbox()
    }

    /// Returns the effective base URL for `service`.
    #[must_use]
    pub fn base_url(&self, service: Service) -> &str {
        let override_url = match service {
            Service::Api => self.api_base_url.as_ref(),
            Service::WebServices => self.web_services_base_url.as_ref(),
        };
        override_url.map_or_else(|| self.environment.base_url(service), |url| url.as_ref())
    }

    /// Returns the effective REST API base URL.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.base_url(Service::Api)
    }

    /// Returns the effective legacy web-services base URL.
    #[must_use]
    pub fn web_services_base_url(&self) -> &str {
        self.base_url(Service::WebServices)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the locale sent in the `X-locale` header.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FedexConfig>();
};

/// Builder for constructing [`FedexConfig`] instances.
///
/// # Defaults
///
/// - `environment`: [`Environment::Sandbox`]
/// - `api_base_url` / `web_services_base_url`: `None` (environment default)
/// - `user_agent_prefix`: `None`
/// - `locale`: `en_US`
///
/// # Example
///
/// ```rust
/// use fedex_api::{BaseUrl, Environment, FedexConfig, Locale};
///
/// let config = FedexConfig::builder()
///     .environment(Environment::Sandbox)
///     .api_base_url(BaseUrl::new("http://127.0.0.1:9000").unwrap())
///     .locale(Locale::new("es_MX").unwrap())
///     .build();
///
/// assert_eq!(config.api_base_url(), "http://127.0.0.1:9000");
/// assert_eq!(config.web_services_base_url(), "https://wsbeta.fedex.com:443/web-services");
/// ```
#[derive(Debug, Default)]
pub struct FedexConfigBuilder {
    environment: Option<Environment>,
    api_base_url: Option<BaseUrl>,
    web_services_base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    locale: Option<Locale>,
}

impl FedexConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Selects the environment from the classic `test_mode` flag.
    #[must_use]
    pub const fn test_mode(self, test_mode: bool) -> Self {
        self.environment(Environment::from_test_mode(test_mode))
    }

    /// Overrides the REST API base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Overrides the legacy web-services base URL.
    #[must_use]
    pub fn web_services_base_url(mut self, url: BaseUrl) -> Self {
        self.web_services_base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the locale sent in the `X-locale` header.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Builds the [`FedexConfig`].
    #[must_use]
    pub fn build(self) -> FedexConfig {
        FedexConfig {
            environment: self.environment.unwrap_or_default(),
            api_base_url: self.api_base_url,
            web_services_base_url: self.web_services_base_url,
            user_agent_prefix: self.user_agent_prefix,
            locale: self.locale.unwrap_or_default(),
        }
    }
}

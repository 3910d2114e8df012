//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use fedex_api::{
    AccountNumber, BaseUrl, ClientId, ClientSecret, FedexConfig, OAuthCredentials, WebCredential,
    WebServiceCredentials,
};
use std::net::TcpListener;
use wiremock::MockServer;

/// Creates a configuration whose hosts both point at `server`.
pub fn config_for(server: &MockServer) -> FedexConfig {
    FedexConfig::builder()
        .api_base_url(BaseUrl::new(server.uri()).unwrap())
        .web_services_base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
}

/// Creates a configuration whose hosts point at a local port nothing listens on.
pub fn unreachable_config() -> FedexConfig {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let url = format!("http://127.0.0.1:{port}");
    FedexConfig::builder()
        .api_base_url(BaseUrl::new(url.clone()).unwrap())
        .web_services_base_url(BaseUrl::new(url).unwrap())
        .build()
}

pub fn oauth_credentials() -> OAuthCredentials {
    OAuthCredentials::new(
        ClientId::new("l7xx-test-client").unwrap(),
        ClientSecret::new("test-secret").unwrap(),
    )
}

pub fn account() -> AccountNumber {
    AccountNumber::new("740561073").unwrap()
}

pub fn web_service_credentials() -> WebServiceCredentials {
    WebServiceCredentials::new(
        WebCredential::new("dev-key", "dev-password"),
        AccountNumber::new("510087020").unwrap(),
        "119238439",
    )
}

//! Integration tests for OAuth token acquisition.

mod common;

use common::{config_for, oauth_credentials, unreachable_config};
use fedex_api::auth::{authorize, AuthError, TOKEN_PATH};
use fedex_api::HttpError;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_authorize_posts_form_body_and_returns_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=client_credentials&client_id=l7xx-test-client&client_secret=test-secret",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9",
            "token_type": "bearer",
            "expires_in": 3599,
            "scope": "CXS-TP"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let token = authorize(&config, &oauth_credentials()).await.unwrap();

    assert_eq!(token.access_token, "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.expires_in, 3599);
    assert_eq!(token.scope, "CXS-TP");
    assert_eq!(token.url, server.uri());
    assert!(!token.expired());
    assert_eq!(
        token.authorization_header(),
        "Bearer eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9"
    );
}

#[tokio::test]
async fn test_authorize_honours_custom_grant_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string(
            "grant_type=csp_credentials&client_id=l7xx-test-client&client_secret=test-secret",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "csp-token",
            "token_type": "bearer",
            "expires_in": 3599,
            "scope": "CXS"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = oauth_credentials().with_grant_type("csp_credentials");
    let token = authorize(&config_for(&server), &credentials).await.unwrap();

    assert_eq!(token.access_token, "csp-token");
}

#[tokio::test]
async fn test_authorize_surfaces_first_vendor_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "transactionId": "0d2b2e4b-0e8a-4c41-9c10-3a4b9bb2a1f7",
            "errors": [
                {
                    "code": "NOT.AUTHORIZED.ERROR",
                    "message": "The given client credentials were not valid. Please modify your request and try again."
                },
                {
                    "code": "SECOND.ERROR",
                    "message": "ignored"
                }
            ]
        })))
        .mount(&server)
        .await;

    let error = authorize(&config_for(&server), &oauth_credentials())
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "The given client credentials were not valid. Please modify your request and try again."
    );
    match error {
        AuthError::Api { status, code, .. } => {
            assert_eq!(status, 401);
            assert_eq!(code.as_deref(), Some("NOT.AUTHORIZED.ERROR"));
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_authorize_with_empty_errors_is_unknown_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "errors": [] })))
        .mount(&server)
        .await;

    let error = authorize(&config_for(&server), &oauth_credentials())
        .await
        .unwrap_err();

    assert!(matches!(error, AuthError::UnknownApiError { status: 500 }));
    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_authorize_with_non_json_error_body_is_unknown_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let error = authorize(&config_for(&server), &oauth_credentials())
        .await
        .unwrap_err();

    assert!(matches!(error, AuthError::UnknownApiError { status: 502 }));
}

#[tokio::test]
async fn test_authorize_with_malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let error = authorize(&config_for(&server), &oauth_credentials())
        .await
        .unwrap_err();

    assert!(matches!(error, AuthError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn test_authorize_unreachable_host_is_http_error() {
    let error = authorize(&unreachable_config(), &oauth_credentials())
        .await
        .unwrap_err();

    assert!(matches!(error, AuthError::Http(HttpError::Network(_))));
    assert_eq!(error.status(), None);
}

use async_trait::async_trait;

use super::{
    client::{clear_session, persist_session, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse},
};
use crate::utils::storage as storage_utils;

/// Authentication backend the login form talks to.
///
/// Every call resolves to exactly one `Result`; callers never see callbacks
/// or a second outcome channel.
#[async_trait(?Send)]
pub trait AuthClient {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl AuthClient for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let login_response: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;

        if let Err(err) = storage_utils::local_storage()
            .and_then(|storage| persist_session(&storage, &login_response))
        {
            log::warn!("Session not persisted: {}", err);
        }
        Ok(login_response)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self.http_client().post(format!("{}/auth/logout", base_url));
        if let Some(headers) = Self::bearer_headers() {
            request = request.headers(headers);
        }

        let result = match request.send().await {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => Err(Self::error_from_response(response).await),
            Err(e) => Err(ApiError::request_failed(format!("Request failed: {}", e))),
        };
        clear_session();
        result
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_posts_credentials_and_decodes_session() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/auth/login")
                    .json_body(json!({ "email": "a@b.com", "password": "p" }));
                then.status(200).json_body(json!({
                    "access_token": "access-1",
                    "refresh_token": "refresh-1",
                    "user": { "id": "u1", "email": "a@b.com", "full_name": "Anna" }
                }));
            })
            .await;

        let client = ApiClient::new_with_base_url(server.url("/api"));
        let session = client
            .login(LoginRequest::new("a@b.com", "p"))
            .await
            .unwrap();

        mock.assert_hits_async(1).await;
        assert_eq!(session.access_token, "access-1");
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
        assert_eq!(session.user.display_name(), "Anna");
    }

    #[tokio::test]
    async fn login_rejection_returns_server_error_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(401).json_body(json!({
                    "error": "Invalid credentials",
                    "code": "INVALID_CREDENTIALS"
                }));
            })
            .await;

        let client = ApiClient::new_with_base_url(server.url("/api"));
        let err = client
            .login(LoginRequest::new("a@b.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.error, "Invalid credentials");
        assert_eq!(err.code, "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn login_error_without_json_body_maps_to_http_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(502).body("Bad Gateway");
            })
            .await;

        let client = ApiClient::new_with_base_url(server.url("/api"));
        let err = client
            .login(LoginRequest::new("a@b.com", "p"))
            .await
            .unwrap_err();

        assert_eq!(err.code, "HTTP_502");
    }

    #[tokio::test]
    async fn login_with_malformed_success_body_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(200).json_body(json!({ "unexpected": true }));
            })
            .await;

        let client = ApiClient::new_with_base_url(server.url("/api"));
        let err = client
            .login(LoginRequest::new("a@b.com", "p"))
            .await
            .unwrap_err();

        assert_eq!(err.code, "UNKNOWN");
    }

    #[tokio::test]
    async fn login_transport_failure_is_request_failed() {
        // Nothing listens on the discard port.
        let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
        let err = client
            .login(LoginRequest::new("a@b.com", "p"))
            .await
            .unwrap_err();

        assert_eq!(err.code, "REQUEST_FAILED");
    }

    #[tokio::test]
    async fn logout_reports_server_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/logout");
                then.status(500).json_body(json!({ "error": "boom", "code": "INTERNAL" }));
            })
            .await;

        let client = ApiClient::new_with_base_url(server.url("/api"));
        let err = client.logout().await.unwrap_err();
        assert_eq!(err.code, "INTERNAL");
    }
}

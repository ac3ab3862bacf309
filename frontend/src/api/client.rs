use reqwest::{header, Client, Response};
use web_sys::Storage;

use crate::{api::types::*, config, utils::storage as storage_utils};

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const CURRENT_USER_KEY: &str = "current_user";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) fn bearer_headers() -> Option<header::HeaderMap> {
        let token = storage_utils::local_storage()
            .ok()?
            .get_item(ACCESS_TOKEN_KEY)
            .ok()
            .flatten()?;
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token).parse().ok()?,
        );
        Some(headers)
    }

    /// Turns a non-success response into an `ApiError`, keeping the server's
    /// message when the body carries one.
    pub(super) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        match response.json::<ApiError>().await {
            Ok(error) if !error.error.trim().is_empty() => {
                if error.code.is_empty() {
                    ApiError {
                        code: format!("HTTP_{}", status),
                        ..error
                    }
                } else {
                    error
                }
            }
            _ => ApiError::http_status(status),
        }
    }
}

pub(super) fn persist_session(storage: &Storage, response: &LoginResponse) -> Result<(), String> {
    storage
        .set_item(ACCESS_TOKEN_KEY, &response.access_token)
        .map_err(|_| "Failed to store token")?;
    match &response.refresh_token {
        Some(token) => storage
            .set_item(REFRESH_TOKEN_KEY, token)
            .map_err(|_| "Failed to store refresh token")?,
        None => {
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
    let user_json =
        serde_json::to_string(&response.user).map_err(|_| "Failed to serialize user profile")?;
    storage
        .set_item(CURRENT_USER_KEY, &user_json)
        .map_err(|_| "Failed to store user profile")?;
    Ok(())
}

pub(super) fn clear_session() {
    if let Ok(storage) = storage_utils::local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        let _ = storage.remove_item(CURRENT_USER_KEY);
    }
}

/// User persisted by the last successful login, if the browser still holds a token.
pub fn stored_user() -> Option<UserResponse> {
    let storage = storage_utils::local_storage().ok()?;
    storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()?;
    let raw = storage.get_item(CURRENT_USER_KEY).ok().flatten()?;
    parse_stored_user(&raw)
}

fn parse_stored_user(raw: &str) -> Option<UserResponse> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("Discarding unreadable stored user profile: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stored_user_reads_persisted_profile() {
        let user = parse_stored_user(r#"{"id":"u1","email":"a@b.com"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn parse_stored_user_rejects_garbage() {
        assert!(parse_stored_user("not json").is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn stored_user_is_none_without_browser_storage() {
        assert!(stored_user().is_none());
        assert!(ApiClient::bearer_headers().is_none());
    }
}

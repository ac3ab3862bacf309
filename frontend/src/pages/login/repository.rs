use crate::api::{ApiClient, ApiError, AuthClient, LoginRequest, LoginResponse};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<dyn AuthClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<dyn AuthClient>) -> Self {
        Self { client }
    }

    /// Uses the `ApiClient` provided at the app root, falling back to a fresh one.
    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }
}

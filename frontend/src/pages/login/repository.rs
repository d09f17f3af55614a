use crate::{
    api::{ApiClient, ApiError, LoginRequest, LoginResponse},
    state::session::SessionStore,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }
}

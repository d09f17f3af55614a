use reqwest::Method;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Exchanges credentials for a token. Storing the session is left to the
    /// caller so a failed login never touches it.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/auth/login")
            .await
            .json(request);
        let response: LoginResponse = self.send_json(builder).await?;
        if response.access_token.trim().is_empty() {
            return Err(ApiError::parse("Login response did not include a token"));
        }
        Ok(response)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        if self.session().token().is_none() {
            return Err(ApiError::no_session());
        }
        let builder = self
            .request(Method::POST, "/auth/logout")
            .await
            .json(&json!({}));
        self.send_unit(builder).await
    }
}

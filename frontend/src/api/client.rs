use leptos::*;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, state::session::SessionStore};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_session(SessionStore::new())
    }

    pub fn with_session(session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Builds a request against the backend, attaching the bearer token when
    /// a session exists.
    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .client
            .request(method, format!("{}{}", base_url, path));
        match self.session.token() {
            Some(token) => builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        self.handle_unauthorized_status(status);
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED && self.session.token().is_some() {
            log::warn!("Backend rejected the session token; clearing session");
            self.session.clear();
        }
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
    }

    /// For endpoints whose success body is irrelevant.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.dispatch(builder).await.map(|_| ())
    }
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        ApiClient::with_session(crate::state::session::use_session())
    })
}

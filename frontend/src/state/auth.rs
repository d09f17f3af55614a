use crate::{
    api::{use_api_client, ApiError, LoginRequest},
    components::guard::LOGIN_PATH,
    pages::login::repository::LoginRepository,
    state::session::{use_session, Session},
    utils::navigation::Navigator,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        Self {
            is_authenticated: session.is_some(),
            session,
            loading: false,
        }
    }

    pub fn admin_id(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.admin_id.as_str())
    }
}

fn create_auth_context() -> AuthContext {
    let session = use_session();
    let (auth_state, set_auth_state) = create_signal(AuthState::from_session(session.get()));

    session.subscribe(move |current| {
        let next = AuthState::from_session(current.cloned());
        set_auth_state.update(|state| {
            state.session = next.session;
            state.is_authenticated = next.is_authenticated;
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| create_signal(AuthState::from_session(use_session().get())))
}

/// Logs in and stores the session. An error leaves any stored session as it was.
pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    let result = repo.login(&request).await.and_then(|response| {
        let session = Session {
            token: response.access_token,
            admin_id: response.user.admin_id,
        };
        repo.session()
            .set(&session)
            .map(|_| session)
            .map_err(ApiError::unknown)
    });

    match result {
        Ok(session) => {
            log::info!("Signed in as admin {}", session.admin_id);
            set_auth_state.set(AuthState::from_session(Some(session.clone())));
            Ok(session)
        }
        Err(error) => {
            log::warn!("Login failed: {}", error);
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Notifies the backend, then clears the session whatever the outcome.
pub async fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    if let Err(error) = repo.logout().await {
        log::warn!("Logout request failed, clearing session anyway: {}", error);
    }
    repo.session().clear();
    log::info!("Session cleared");
    set_auth_state.set(AuthState::default());
}

/// Logs out and always lands on the login page.
pub async fn sign_out(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
    navigator: &Navigator,
) {
    logout(repo, set_auth_state).await;
    navigator.go(LOGIN_PATH);
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(use_api_client()));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action(navigator: Navigator) -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(use_api_client()));

    create_action(move |_: &()| {
        let repo = repo.clone();
        let navigator = navigator.clone();
        async move { sign_out(&repo, set_auth, &navigator).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::state::session::SessionStore;
    use crate::test_support::helpers::{recording_navigator, signed_in_session};
    use httpmock::prelude::*;
    use std::rc::Rc;

    fn repo_for(base_url: &str, session: SessionStore) -> LoginRepository {
        LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(base_url, session)))
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(201).json_body(serde_json::json!({
                    "access_token": "jwt-token",
                    "user": { "adminId": "a-1" }
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/logout");
                then.status(200).json_body(serde_json::json!({}));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let session = SessionStore::in_memory();
        let repo = repo_for(&server.base_url(), session.clone());

        let stored = login_request(
            LoginRequest {
                email: "admin@example.com".into(),
                password: "secret".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        assert_eq!(stored.token, "jwt-token");
        assert_eq!(session.admin_id().as_deref(), Some("a-1"));
        assert!(state.get().is_authenticated);

        logout(&repo, set_state).await;
        assert!(!state.get().is_authenticated);
        assert!(session.get().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_session_untouched() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(401).json_body(serde_json::json!({"message": "Unauthorized"}));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let session = SessionStore::in_memory();
        let repo = repo_for(&server.base_url(), session.clone());

        let err = login_request(
            LoginRequest {
                email: "admin@example.com".into(),
                password: "wrong".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "Unauthorized");
        assert!(session.get().is_none());
        assert!(!state.get().is_authenticated);
        assert!(!state.get().loading);
        runtime.dispose();
    }

    #[tokio::test]
    async fn logout_clears_session_when_backend_is_unreachable() {
        let runtime = create_runtime();
        let session = SessionStore::in_memory();
        session
            .set(&Session {
                token: "jwt".into(),
                admin_id: "1".into(),
            })
            .unwrap();
        let (state, set_state) = create_signal(AuthState::from_session(session.get()));
        let repo = repo_for("http://127.0.0.1:9", session.clone());

        logout(&repo, set_state).await;

        assert!(session.get().is_none());
        assert!(!state.get().is_authenticated);
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_out_lands_on_login_even_when_backend_fails() {
        let server = MockServer::start_async().await;
        let logout_call = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/logout")
                    .header("authorization", "Bearer jwt");
                then.status(500).json_body(serde_json::json!({"message": "boom"}));
            })
            .await;

        let runtime = create_runtime();
        let session = signed_in_session("jwt", "4");
        let (state, set_state) = create_signal(AuthState::from_session(session.get()));
        let repo = repo_for(&server.base_url(), session.clone());
        let (navigator, visited) = recording_navigator();

        sign_out(&repo, set_state, &navigator).await;

        logout_call.assert_async().await;
        assert!(session.get().is_none());
        assert!(!state.get_untracked().is_authenticated);
        assert_eq!(*visited.borrow(), vec!["/login"]);
        runtime.dispose();
    }
}

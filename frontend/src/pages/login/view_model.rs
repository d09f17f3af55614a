use super::utils::{self, LoginFormState};
use crate::api::{ApiError, LoginRequest};
use crate::state::{auth, session::Session};
use crate::utils::navigation::use_navigator;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<Session, ApiError>>,
}

impl LoginViewModel {
    /// Validates locally, then dispatches. Returns whether a request was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(message) = utils::validate_credentials(&email, &password) {
            self.error.set(Some(ApiError::new("VALIDATION_ERROR", message)));
            return false;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
        true
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let navigator = use_navigator();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.password.set(String::new());
                    navigator.go("/");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

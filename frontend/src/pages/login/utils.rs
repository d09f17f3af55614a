use leptos::*;
use validator::ValidateEmail;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please input your email!".into());
    }
    if !email.validate_email() {
        return Err("Please input a valid email!".into());
    }
    if password.is_empty() {
        return Err("Please input your password!".into());
    }
    Ok(())
}

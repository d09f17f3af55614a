use crate::{components::layout::LoadingSpinner, state::auth::use_auth};
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

pub const DEFAULT_GUARDED_PATHS: &[&str] = &[
    "/",
    "/login",
    "/admin/add-admin",
    "/admin/update-admin",
    "/admin/update-profile",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Pass,
    RedirectToLogin,
    RedirectToRoot,
}

impl GuardDecision {
    pub fn target(self) -> Option<&'static str> {
        match self {
            GuardDecision::Pass => None,
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectToRoot => Some(ROOT_PATH),
        }
    }
}

/// Strips the query string, fragment and trailing slash (except for `/`).
pub fn normalize_path(raw: &str) -> String {
    let path = raw
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardPolicy {
    guarded: Vec<String>,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self::with_guarded_paths(DEFAULT_GUARDED_PATHS.iter().copied())
    }
}

impl GuardPolicy {
    pub fn with_guarded_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            guarded: paths
                .into_iter()
                .map(|path| normalize_path(path.as_ref()))
                .collect(),
        }
    }

    pub fn is_guarded(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.guarded.iter().any(|guarded| *guarded == path)
    }

    pub fn decide(&self, path: &str, has_token: bool) -> GuardDecision {
        if !self.is_guarded(path) {
            return GuardDecision::Pass;
        }
        let on_login = normalize_path(path) == LOGIN_PATH;
        match (has_token, on_login) {
            (false, false) => GuardDecision::RedirectToLogin,
            (true, true) => GuardDecision::RedirectToRoot,
            _ => GuardDecision::Pass,
        }
    }
}

/// Re-evaluates the policy on every navigation and session change.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let policy = use_context::<GuardPolicy>().unwrap_or_else(crate::config::guard_policy);
    let (auth, _) = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let decision = create_memo(move |_| {
        let path = location.pathname.get();
        policy.decide(&path, auth.get().is_authenticated)
    });

    create_effect(move |_| {
        if let Some(target) = decision.get().target() {
            log::debug!(
                "Route guard redirecting {} -> {}",
                location.pathname.get_untracked(),
                target
            );
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { <GuardOutlet decision=decision.into()>{children()}</GuardOutlet> }
}

#[component]
pub fn GuardOutlet(decision: Signal<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Pass
            fallback=|| view! { <LoadingSpinner /> }
        >
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn outlet_renders_children_on_pass() {
        let html = render_to_string(move || {
            view! {
                <GuardOutlet decision=Signal::derive(|| GuardDecision::Pass)>
                    {|| view! { <div>"protected-content"</div> }}
                </GuardOutlet>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn outlet_hides_children_while_redirecting() {
        let html = render_to_string(move || {
            view! {
                <GuardOutlet decision=Signal::derive(|| GuardDecision::RedirectToLogin)>
                    {|| view! { <div>"protected-content"</div> }}
                </GuardOutlet>
            }
        });
        assert!(!html.contains("protected-content"));
        assert!(html.contains("animate-spin"));
    }
}

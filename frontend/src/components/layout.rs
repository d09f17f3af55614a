use crate::{
    state::auth::{self, use_auth},
    utils::navigation::use_navigator,
};
use leptos::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub fn profile_href(admin_id: &str) -> String {
    format!(
        "/admin/update-profile?id={}",
        utf8_percent_encode(admin_id, NON_ALPHANUMERIC)
    )
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let navigator = store_value(use_navigator());
    let logout_action = auth::use_logout_action(navigator.get_value());
    let logout_pending = logout_action.pending();

    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    let on_profile = move |_| {
        let target = match auth.get_untracked().admin_id() {
            Some(id) => profile_href(id),
            None => "/admin/update-profile".to_string(),
        };
        navigator.with_value(|nav| nav.go(&target));
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">{"StaffDesk"}</h1>
                    <nav class="flex items-center space-x-2">
                        <button
                            on:click=on_profile
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            {"Profile"}
                        </button>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                        >
                            {move || if logout_pending.get() { "Logging out..." } else { "Logout" }}
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

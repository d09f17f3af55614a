use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {"Sign in to StaffDesk"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {"Employee and leave administration"}
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">{"Email"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="username"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-fg rounded-t-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Email"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    email.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-fg rounded-b-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    password.set(target.value());
                                }
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_renders_error_and_pending_label() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(ApiError::new("UNAUTHORIZED", "Invalid credentials")));
            view! {
                <LoginForm
                    email=create_rw_signal(String::new())
                    password=create_rw_signal(String::new())
                    error=error.into()
                    pending=Signal::derive(|| true)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("Signing in..."));
    }
}

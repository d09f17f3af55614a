use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let messages = error.get().map(|e| e.validation_messages()).unwrap_or_default();
                    (!messages.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}

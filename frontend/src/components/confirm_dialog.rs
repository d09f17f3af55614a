use crate::components::common::ButtonVariant;
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Asks before a record is deleted. Open while `target` holds the record id.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] target: Signal<Option<String>>,
    entity_label: &'static str,
    on_confirm: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
) -> impl IntoView {
    let confirm = move || {
        if let Some(id) = target.get_untracked() {
            on_confirm.call(id);
        }
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></div>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                        "Escape" => {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                        "Enter" if !busy.get_untracked() => {
                            ev.prevent_default();
                            confirm();
                        }
                        _ => {}
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{format!("Delete {}", entity_label)}</h2>
                    <p class="text-sm text-fg-muted">
                        {move || {
                            format!(
                                "{} {} will be removed permanently.",
                                entity_label,
                                target.get().unwrap_or_default()
                            )
                        }}
                    </p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class=format!("rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Secondary.classes())
                            on:click=move |_| on_cancel.call(())
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="button"
                            class=format!("rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Danger.classes())
                            disabled=move || busy.get()
                            on:click=move |_| confirm()
                        >
                            {move || if busy.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

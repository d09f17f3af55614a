use leptos::*;

const WINDOW: u32 = 5;

/// Up to five page numbers centred on `current`, clamped to `1..=total_pages`.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let half = WINDOW / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + WINDOW - 1).min(total_pages);
    if end + 1 - start < WINDOW {
        start = end.saturating_sub(WINDOW - 1).max(1);
    }
    (start..=end).collect()
}

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_change: Callback<u32>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let go = move |page: u32| {
        if disabled.get_untracked() || page == current.get_untracked() {
            return;
        }
        on_change.call(page);
    };

    view! {
        <nav class="flex items-center justify-between py-3" aria-label="Pagination">
            <span class="text-sm text-fg-muted">
                {move || format!("Page {} of {}", current.get(), total_pages.get().max(1))}
            </span>
            <div class="flex gap-1">
                <button
                    class="px-3 py-1 rounded border border-border text-sm disabled:opacity-50"
                    disabled=move || { disabled.get() || current.get() <= 1 }
                    on:click=move |_| go(current.get_untracked().saturating_sub(1).max(1))
                >
                    {"Previous"}
                </button>
                {move || page_window(current.get(), total_pages.get()).into_iter().map(|page| {
                    let active = page == current.get_untracked();
                    view! {
                        <button
                            class={if active {
                                "px-3 py-1 rounded text-sm bg-action-primary-bg text-action-primary-text"
                            } else {
                                "px-3 py-1 rounded border border-border text-sm"
                            }}
                            aria-current=active.then_some("page")
                            disabled=move || disabled.get()
                            on:click=move |_| go(page)
                        >
                            {page.to_string()}
                        </button>
                    }
                }).collect_view()}
                <button
                    class="px-3 py-1 rounded border border-border text-sm disabled:opacity-50"
                    disabled=move || { disabled.get() || current.get() >= total_pages.get() }
                    on:click=move |_| go(current.get_untracked() + 1)
                >
                    {"Next"}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::page_window;

    #[test]
    fn window_is_centred_and_clamped() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(12, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(3, 0), vec![1]);
    }
}

use crate::{
    components::layout::Layout,
    pages::entity_list::{config::ListVariant, EntityListPanel},
    state::shell::{use_shell_state, ShellState},
};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let shell = use_shell_state();
    view! {
        <Layout>
            <div class="flex flex-col gap-6 md:flex-row">
                <SideMenu shell=shell />
                <div class="flex-1 min-w-0">
                    {move || {
                        let variant = shell.selected.get();
                        view! { <EntityListPanel variant=variant /> }
                    }}
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn SideMenu(shell: ShellState) -> impl IntoView {
    view! {
        <nav class="md:w-56 shrink-0">
            <ul class="flex gap-2 md:flex-col">
                {ListVariant::ALL
                    .into_iter()
                    .map(|variant| {
                        let is_active = move || shell.selected.get() == variant;
                        view! {
                            <li>
                                <button
                                    class=move || {
                                        if is_active() {
                                            "w-full text-left px-3 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                        } else {
                                            "w-full text-left px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover"
                                        }
                                    }
                                    aria-current=move || is_active().then_some("page")
                                    on:click=move |_| {
                                        log::debug!("Showing {}", variant.label());
                                        shell.selected.set(variant);
                                    }
                                >
                                    {variant.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::shell::provide_shell_state;
    use crate::test_support::{
        helpers::{provide_auth, signed_in_session},
        ssr::render_to_string,
    };

    #[test]
    fn home_lists_every_menu_entry_and_starts_on_admins() {
        let html = render_to_string(move || {
            provide_auth(signed_in_session("tok", "7"));
            view! { <HomePage /> }
        });
        for label in ["Admins", "Employees", "Leaves", "Employee Leaves"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("Add Admin"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn selected_variant_survives_in_shell_state() {
        let html = render_to_string(move || {
            provide_auth(signed_in_session("tok", "7"));
            let shell = provide_shell_state();
            shell.selected.set(ListVariant::Leaves);
            view! { <HomePage /> }
        });
        assert!(html.contains("Add Leave"));
        assert!(!html.contains("Add Admin"));
    }
}

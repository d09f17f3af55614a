use super::view_model::use_list_view_model;
use crate::{
    components::{
        confirm_dialog::ConfirmDialog, data_table::DataTable,
        pagination::Pagination,
    },
    pages::entity_list::config::ListVariant,
    utils::navigation::use_navigator,
};
use leptos::{ev::SubmitEvent, *};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use web_sys::HtmlInputElement;

pub fn edit_href(route: &str, id: &str) -> String {
    format!("{}?id={}", route, utf8_percent_encode(id, NON_ALPHANUMERIC))
}

#[component]
pub fn EntityListPanel(variant: ListVariant) -> impl IntoView {
    let vm = use_list_view_model(variant);
    let navigator = store_value(use_navigator());
    let config = vm.config.get_value();
    let title = config.title();
    let searchable = config.searchable();
    let add_route = config.add_route;
    let edit_route = config.edit_route;

    let rows = Signal::derive(move || vm.state.with(|s| s.rows.clone()));
    let loading = Signal::derive(move || vm.state.with(|s| s.loading));
    let current_page = Signal::derive(move || vm.state.with(|s| s.page));
    let total_pages = Signal::derive(move || vm.state.with(|s| s.page_count()));
    let search_input = create_rw_signal(String::new());

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.search(&search_input.get_untracked());
    };

    let on_edit = edit_route.map(|route| {
        Callback::new(move |id: String| {
            navigator.with_value(|nav| nav.go(&edit_href(route, &id)));
        })
    });
    let on_delete = config
        .has_row_actions()
        .then(|| Callback::new(move |id: String| vm.request_delete(id)));

    view! {
        <section class="space-y-4">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <h2 class="text-2xl font-bold text-fg">{title}</h2>
                <div class="flex gap-2 items-center">
                    {searchable.then(|| view! {
                        <form class="flex gap-2" on:submit=on_search>
                            <input
                                type="search"
                                placeholder="Search"
                                class="px-3 py-2 border border-form-control-border rounded-md bg-form-control-bg text-fg text-sm"
                                prop:value=move || search_input.get()
                                on:input=move |ev| {
                                    search_input.set(event_target::<HtmlInputElement>(&ev).value());
                                }
                            />
                            <button
                                type="submit"
                                class="px-3 py-2 rounded-md border border-border text-sm"
                                disabled=move || loading.get()
                            >
                                {"Search"}
                            </button>
                        </form>
                    })}
                    {add_route.map(|route| view! {
                        <button
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text"
                            on:click=move |_| navigator.with_value(|nav| nav.go(route))
                        >
                            {format!("Add {}", config.kind().label())}
                        </button>
                    })}
                </div>
            </div>

            <DataTable
                columns=config.columns.clone()
                rows=rows
                loading=loading
                on_edit=on_edit
                on_delete=on_delete
            />

            <Pagination
                current=current_page
                total_pages=total_pages
                disabled=loading
                on_change=Callback::new(move |page| vm.go_to_page(page))
            />

            <ConfirmDialog
                target=vm.pending_delete
                entity_label=config.kind().label()
                busy=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |id: String| vm.confirm_delete(id))
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </section>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionStore;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_list_renders_search_and_add() {
        let html = render_to_string(move || {
            provide_context(SessionStore::in_memory());
            view! { <EntityListPanel variant=ListVariant::Admins /> }
        });
        assert!(html.contains("Admins"));
        assert!(html.contains("Search"));
        assert!(html.contains("Add Admin"));
        assert!(html.contains("Date of Birth"));
    }

    #[test]
    fn leave_list_has_no_search() {
        let html = render_to_string(move || {
            provide_context(SessionStore::in_memory());
            view! { <EntityListPanel variant=ListVariant::Leaves /> }
        });
        assert!(html.contains("Add Leave"));
        assert!(!html.contains("type=\"search\""));
    }

    #[test]
    fn employee_leaves_list_is_read_only() {
        let html = render_to_string(move || {
            provide_context(SessionStore::in_memory());
            view! { <EntityListPanel variant=ListVariant::EmployeeLeaves /> }
        });
        assert!(html.contains("Employee Leaves"));
        assert!(!html.contains("Add Employee"));
    }
}

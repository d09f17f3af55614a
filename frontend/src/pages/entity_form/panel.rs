use super::{
    field::FormField,
    state::FormRoute,
    view_model::{use_form_view_model, FormViewModel},
};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::navigation::use_navigator,
};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_query_map;

fn form_fields(vm: FormViewModel) -> View {
    vm.spec
        .fields
        .iter()
        .map(|spec| {
            let key = spec.key;
            view! {
                <FormField
                    spec=*spec
                    value=Signal::derive(move || vm.values.with(|values| values.get(key).to_string()))
                    error=Signal::derive(move || vm.errors.with(|errors| errors.get(key).map(str::to_string)))
                    on_input=Callback::new(move |value: String| vm.set_field(key, value))
                    employees=vm.employees
                />
            }
        })
        .collect_view()
}

#[component]
pub fn EntityFormPage(route: FormRoute) -> impl IntoView {
    let query = use_query_map();
    let id_param = Signal::derive(move || query.with(|params| params.get("id").cloned()));
    view! { <EntityFormPanel route=route id_param=id_param /> }
}

#[component]
pub fn EntityFormPanel(route: FormRoute, id_param: Signal<Option<String>>) -> impl IntoView {
    let vm = use_form_view_model(route, id_param);
    let navigator = store_value(use_navigator());
    let pending = vm.submit_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen bg-surface py-8">
            <div class="max-w-2xl mx-auto bg-surface-elevated shadow rounded-lg p-6 space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">{route.title()}</h2>
                    <button
                        type="button"
                        class=format!("rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Secondary.classes())
                        on:click=move |_| navigator.with_value(|nav| nav.go("/"))
                    >
                        {"Back"}
                    </button>
                </div>
                <Show
                    when=move || vm.mode.with(Option::is_some)
                    fallback=|| view! { <ErrorMessage message="No record selected to edit." /> }
                >
                    <Show when=move || vm.loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <form class="space-y-4" on:submit=on_submit>
                        {form_fields(vm)}
                        <div class="flex justify-end">
                            <Button loading=pending disabled=Signal::derive(move || vm.loading.get())>
                                {"Submit"}
                            </Button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionStore;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn add_employee_form_renders_all_fields() {
        let html = render_to_string(move || {
            provide_context(SessionStore::in_memory());
            view! { <EntityFormPanel route=FormRoute::AddEmployee id_param=Signal::derive(|| None) /> }
        });
        assert!(html.contains("Add Employee"));
        for label in ["First Name", "Last Name", "Email", "Gender", "Phone Number", "Address"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("Back"));
        assert!(html.contains("Submit"));
    }

    #[test]
    fn update_without_id_shows_error() {
        let html = render_to_string(move || {
            provide_context(SessionStore::in_memory());
            view! { <EntityFormPanel route=FormRoute::UpdateLeave id_param=Signal::derive(|| None) /> }
        });
        assert!(html.contains("No record selected to edit."));
        assert!(!html.contains("Submit"));
    }
}

use super::{
    fields::{FieldKind, FieldSpec},
    repository::EmployeeOption,
};
use leptos::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const CONTROL_CLASS: &str = "mt-1 block w-full px-3 py-2 border border-form-control-border rounded-md bg-form-control-bg text-fg sm:text-sm";

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Date => "date",
        FieldKind::Password => "password",
        _ => "text",
    }
}

#[component]
pub fn FormField(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
    #[prop(optional, into)] employees: MaybeSignal<Vec<EmployeeOption>>,
) -> impl IntoView {
    let id = format!("field-{}", spec.key);

    let control = match spec.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=id.clone()
                name=spec.key
                rows="3"
                class=CONTROL_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target::<HtmlTextAreaElement>(&ev).value())
            ></textarea>
        }
        .into_view(),
        FieldKind::Select(options) => view! {
            <select
                id=id.clone()
                name=spec.key
                class=CONTROL_CLASS
                on:change=move |ev| on_input.call(event_target::<HtmlSelectElement>(&ev).value())
            >
                <option value="" selected=move || value.get().is_empty()>{format!("Select {}", spec.label)}</option>
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>{option}</option>
                    }
                }).collect_view()}
            </select>
        }
        .into_view(),
        FieldKind::EmployeePicker => view! {
            <select
                id=id.clone()
                name=spec.key
                class=CONTROL_CLASS
                on:change=move |ev| on_input.call(event_target::<HtmlSelectElement>(&ev).value())
            >
                <option value="" selected=move || value.get().is_empty()>{"Select Employee"}</option>
                {move || employees.get().into_iter().map(|employee| {
                    let option_id = employee.id.clone();
                    view! {
                        <option
                            value=employee.id
                            selected=move || value.get() == option_id
                        >
                            {employee.label}
                        </option>
                    }
                }).collect_view()}
            </select>
        }
        .into_view(),
        kind => view! {
            <input
                id=id.clone()
                name=spec.key
                type=input_type(kind)
                class=CONTROL_CLASS
                autocomplete={if kind == FieldKind::Password { "new-password" } else { "off" }}
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target::<HtmlInputElement>(&ev).value())
            />
        }
        .into_view(),
    };

    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm font-medium text-fg">{spec.label}</label>
            {control}
            {move || error.get().map(|message| view! {
                <p class="text-sm text-status-error-text" role="alert">{message}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_types_follow_field_kind() {
        assert_eq!(input_type(FieldKind::Email), "email");
        assert_eq!(input_type(FieldKind::Date), "date");
        assert_eq!(input_type(FieldKind::Password), "password");
        assert_eq!(input_type(FieldKind::Text), "text");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::entity_form::fields::{Requirement, GENDERS};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn select_field_renders_options_and_error() {
        let html = render_to_string(move || {
            view! {
                <FormField
                    spec=FieldSpec {
                        key: "gender",
                        label: "Gender",
                        kind: FieldKind::Select(GENDERS),
                        requirement: Requirement::Always,
                    }
                    value=Signal::derive(String::new)
                    error=Signal::derive(|| Some("Gender is required!".to_string()))
                    on_input=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Male"));
        assert!(html.contains("Female"));
        assert!(html.contains("Gender is required!"));
    }

    #[test]
    fn employee_picker_lists_options() {
        let html = render_to_string(move || {
            let employees = create_rw_signal(vec![EmployeeOption {
                id: "e1".into(),
                label: "Rina Wijaya".into(),
            }]);
            view! {
                <FormField
                    spec=FieldSpec {
                        key: "employeeId",
                        label: "Employee",
                        kind: FieldKind::EmployeePicker,
                        requirement: Requirement::Always,
                    }
                    value=Signal::derive(|| "e1".to_string())
                    error=Signal::derive(|| None)
                    on_input=Callback::new(|_| {})
                    employees=employees
                />
            }
        });
        assert!(html.contains("Rina Wijaya"));
        assert!(html.contains("value=\"e1\""));
    }
}

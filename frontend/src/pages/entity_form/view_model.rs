use super::{
    fields::{form_spec, FormSpec},
    repository::{EmployeeOption, FormRepository},
    state::{resolve_mode, to_payload, validate, FieldErrors, FormMode, FormRoute, FormValues},
};
use crate::{
    api::{use_api_client, ApiError, EntityKind},
    state::{
        auth::use_auth,
        notifications::{use_notifications, Notifications},
    },
    utils::{
        navigation::{use_navigator, Navigator},
        request_sequence::{RequestSequence, RequestTicket},
    },
};
use leptos::*;
use serde_json::Value;
use std::rc::Rc;

/// Fetches a record for editing and writes it into `values` if `ticket` is
/// still current. Returns whether the form was filled.
pub async fn prefill(
    repo: &FormRepository,
    kind: EntityKind,
    id: &str,
    ticket: RequestTicket,
    sequence: &RequestSequence,
    values: RwSignal<FormValues>,
) -> Result<bool, ApiError> {
    let loaded = repo.load(kind, id).await?;
    if !sequence.is_current(ticket) {
        log::debug!("Dropping stale {} detail for {}", kind.label(), id);
        return Ok(false);
    }
    Ok(values.try_set(loaded).is_none())
}

/// Reports a finished save. Success leaves the form for `/`; a failure keeps
/// the entered values and only shows a notice. Returns whether it navigated.
pub fn after_submit(
    result: &Result<(), ApiError>,
    kind: EntityKind,
    notifications: Notifications,
    navigator: &Navigator,
) -> bool {
    match result {
        Ok(()) => {
            notifications.success(format!("{} saved", kind.label()));
            navigator.go("/");
            true
        }
        Err(err) => {
            log::error!("Failed to save {}: {}", kind.label(), err);
            notifications.error(format!("Failed to save {}: {}", kind.label(), err));
            false
        }
    }
}

#[derive(Clone, Copy)]
pub struct FormViewModel {
    pub route: FormRoute,
    pub spec: FormSpec,
    pub mode: Memo<Option<FormMode>>,
    pub values: RwSignal<FormValues>,
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub employees: RwSignal<Vec<EmployeeOption>>,
    pub submit_action: Action<(FormMode, Value), Result<(), ApiError>>,
}

impl FormViewModel {
    pub fn set_field(&self, key: &str, value: String) {
        self.values.update(|values| values.set(key, value));
        self.errors.update(|errors| errors.clear_field(key));
    }

    /// Validates and dispatches. Returns whether a request was sent.
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() || self.loading.get_untracked() {
            return false;
        }
        let Some(mode) = self.mode.get_untracked() else {
            return false;
        };
        let values = self.values.get_untracked();
        let errors = validate(&self.spec, &values, &mode);
        if !errors.is_empty() {
            self.errors.set(errors);
            return false;
        }
        self.errors.set(FieldErrors::default());
        self.submit_action
            .dispatch((mode, to_payload(&self.spec, &values)));
        true
    }
}

pub fn use_form_view_model(route: FormRoute, id_param: Signal<Option<String>>) -> FormViewModel {
    let repo = FormRepository::new_with_client(Rc::new(use_api_client()));
    let notifications = use_notifications();
    let navigator = store_value(use_navigator());
    let (auth, _) = use_auth();
    let spec = form_spec(route.kind());
    let kind = spec.kind;

    let values = create_rw_signal(FormValues::default());
    let errors = create_rw_signal(FieldErrors::default());
    let loading = create_rw_signal(false);
    let employees = create_rw_signal(Vec::<EmployeeOption>::new());
    let sequence = RequestSequence::new();

    let mode = create_memo(move |_| {
        let session_admin = auth.with(|state| state.admin_id().map(str::to_string));
        resolve_mode(route, id_param.get().as_deref(), session_admin.as_deref())
    });

    {
        let repo = repo.clone();
        let sequence = sequence.clone();
        create_effect(move |_| match mode.get() {
            Some(FormMode::Edit(id)) => {
                let ticket = sequence.issue();
                loading.set(true);
                let repo = repo.clone();
                let sequence = sequence.clone();
                spawn_local(async move {
                    match prefill(&repo, kind, &id, ticket, &sequence, values).await {
                        Ok(_) => {}
                        Err(err) => {
                            log::error!("Failed to load {} {}: {}", kind.label(), id, err);
                            notifications.error(format!("Failed to load {}: {}", kind.label(), err));
                        }
                    }
                    if sequence.is_current(ticket) {
                        loading.try_set(false);
                    }
                });
            }
            Some(FormMode::Add) => {
                sequence.invalidate();
                values.set(FormValues::default());
                loading.set(false);
            }
            None => {
                log::warn!("{} opened without an identifier", route.path());
                loading.set(false);
            }
        });
    }

    if spec.needs_employee_options() {
        let repo = repo.clone();
        create_effect(move |_| {
            let repo = repo.clone();
            spawn_local(async move {
                match repo.employee_options().await {
                    Ok(options) => {
                        employees.try_set(options);
                    }
                    Err(err) => log::error!("Failed to load employees: {}", err),
                }
            });
        });
    }

    on_cleanup(move || sequence.invalidate());

    let submit_action = create_action(move |(mode, payload): &(FormMode, Value)| {
        let repo = repo.clone();
        let mode = mode.clone();
        let payload = payload.clone();
        async move { repo.save(kind, &mode, &payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            navigator.with_value(|nav| after_submit(&result, kind, notifications, nav));
        }
    });

    FormViewModel {
        route,
        spec,
        mode,
        values,
        errors,
        loading,
        employees,
        submit_action,
    }
}

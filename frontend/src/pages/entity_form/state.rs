use super::fields::{FieldKind, FormSpec, Requirement};
use crate::{
    api::{Admin, Employee, EntityKind, Leave},
    utils::time::{format_optional_date, normalize_date_input},
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use validator::ValidateEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRoute {
    AddAdmin,
    UpdateAdmin,
    UpdateProfile,
    AddEmployee,
    UpdateEmployee,
    AddLeave,
    UpdateLeave,
}

impl FormRoute {
    pub const ALL: [FormRoute; 7] = [
        FormRoute::AddAdmin,
        FormRoute::UpdateAdmin,
        FormRoute::UpdateProfile,
        FormRoute::AddEmployee,
        FormRoute::UpdateEmployee,
        FormRoute::AddLeave,
        FormRoute::UpdateLeave,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            FormRoute::AddAdmin => "/admin/add-admin",
            FormRoute::UpdateAdmin => "/admin/update-admin",
            FormRoute::UpdateProfile => "/admin/update-profile",
            FormRoute::AddEmployee => "/employee/add-employee",
            FormRoute::UpdateEmployee => "/employee/update-employee",
            FormRoute::AddLeave => "/leave/add-leave",
            FormRoute::UpdateLeave => "/leave/update-leave",
        }
    }

    pub const fn kind(self) -> EntityKind {
        match self {
            FormRoute::AddAdmin | FormRoute::UpdateAdmin | FormRoute::UpdateProfile => {
                EntityKind::Admin
            }
            FormRoute::AddEmployee | FormRoute::UpdateEmployee => EntityKind::Employee,
            FormRoute::AddLeave | FormRoute::UpdateLeave => EntityKind::Leave,
        }
    }

    pub const fn is_add(self) -> bool {
        matches!(
            self,
            FormRoute::AddAdmin | FormRoute::AddEmployee | FormRoute::AddLeave
        )
    }

    pub fn title(self) -> String {
        match self {
            FormRoute::UpdateProfile => "Update Profile".to_string(),
            route if route.is_add() => format!("Add {}", route.kind().label()),
            route => format!("Update {}", route.kind().label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(String),
}

impl FormMode {
    pub fn is_add(&self) -> bool {
        matches!(self, FormMode::Add)
    }
}

/// Edit routes need an id; the profile page falls back to the signed-in
/// admin. `None` means the page cannot know what to edit.
pub fn resolve_mode(
    route: FormRoute,
    id_param: Option<&str>,
    session_admin_id: Option<&str>,
) -> Option<FormMode> {
    if route.is_add() {
        return Some(FormMode::Add);
    }
    let id = id_param
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .or_else(|| match route {
            FormRoute::UpdateProfile => session_admin_id.filter(|id| !id.trim().is_empty()),
            _ => None,
        })?;
    Some(FormMode::Edit(id.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear_field(&mut self, key: &str) {
        self.0.remove(key);
    }
}

fn field_required(requirement: Requirement, mode: &FormMode) -> bool {
    match requirement {
        Requirement::Always => true,
        Requirement::OnAdd => mode.is_add(),
    }
}

pub fn validate(spec: &FormSpec, values: &FormValues, mode: &FormMode) -> FieldErrors {
    let mut errors = BTreeMap::new();
    for field in spec.fields {
        let raw = values.get(field.key);
        let value = if field.kind == FieldKind::Password {
            raw
        } else {
            raw.trim()
        };
        if value.is_empty() {
            if field_required(field.requirement, mode) {
                errors.insert(field.key.to_string(), format!("{} is required!", field.label));
            }
            continue;
        }
        let message = match field.kind {
            FieldKind::Email if !value.validate_email() => {
                Some(format!("{} is not a valid email!", field.label))
            }
            FieldKind::Date if normalize_date_input(value).is_none() => {
                Some(format!("{} is not a valid date!", field.label))
            }
            FieldKind::Select(options) if !options.iter().any(|option| *option == value) => {
                Some(format!("{} is required!", field.label))
            }
            _ => None,
        };
        if let Some(message) = message {
            errors.insert(field.key.to_string(), message);
        }
    }
    FieldErrors(errors)
}

/// JSON body for create/update. Blank optional fields are omitted so an edit
/// never overwrites the stored password with an empty one.
pub fn to_payload(spec: &FormSpec, values: &FormValues) -> Value {
    let mut body = Map::new();
    for field in spec.fields {
        let raw = values.get(field.key);
        let value = match field.kind {
            FieldKind::Password => raw.to_string(),
            FieldKind::Date => normalize_date_input(raw).unwrap_or_else(|| raw.trim().to_string()),
            _ => raw.trim().to_string(),
        };
        if value.is_empty() && field.requirement == Requirement::OnAdd {
            continue;
        }
        body.insert(field.key.to_string(), Value::String(value));
    }
    Value::Object(body)
}

/// Maps a fetched record onto the string values the form inputs hold.
pub trait FormRecord {
    fn form_values(&self) -> FormValues;
}

impl FormRecord for Admin {
    fn form_values(&self) -> FormValues {
        FormValues::default()
            .with("firstName", self.first_name.as_str())
            .with("lastName", self.last_name.as_str())
            .with("email", self.email.as_str())
            .with("dateOfBirth", format_optional_date(self.date_of_birth))
            .with("gender", self.gender.as_str())
    }
}

impl FormRecord for Employee {
    fn form_values(&self) -> FormValues {
        FormValues::default()
            .with("firstName", self.first_name.as_str())
            .with("lastName", self.last_name.as_str())
            .with("email", self.email.as_str())
            .with("gender", self.gender.as_str())
            .with("phoneNumber", self.phone_number.as_str())
            .with("address", self.address.as_str())
    }
}

impl FormRecord for Leave {
    fn form_values(&self) -> FormValues {
        FormValues::default()
            .with("employeeId", self.employee_id.clone().unwrap_or_default())
            .with("reason", self.reason.as_str())
            .with("startDate", format_optional_date(self.start_date))
            .with("endDate", format_optional_date(self.end_date))
    }
}

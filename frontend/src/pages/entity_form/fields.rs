use crate::api::EntityKind;

pub const GENDERS: &[&str] = &["Male", "Female"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Date,
    Password,
    TextArea,
    Select(&'static [&'static str]),
    EmployeePicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    /// Required when creating; blank on edit leaves the stored value alone.
    OnAdd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
}

impl FieldSpec {
    const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            requirement: Requirement::Always,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    pub kind: EntityKind,
    pub fields: &'static [FieldSpec],
}

const ADMIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("firstName", "First Name", FieldKind::Text),
    FieldSpec::required("lastName", "Last Name", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::required("dateOfBirth", "Date of Birth", FieldKind::Date),
    FieldSpec::required("gender", "Gender", FieldKind::Select(GENDERS)),
    FieldSpec {
        key: "password",
        label: "Password",
        kind: FieldKind::Password,
        requirement: Requirement::OnAdd,
    },
];

const EMPLOYEE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("firstName", "First Name", FieldKind::Text),
    FieldSpec::required("lastName", "Last Name", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::required("gender", "Gender", FieldKind::Select(GENDERS)),
    FieldSpec::required("phoneNumber", "Phone Number", FieldKind::Text),
    FieldSpec::required("address", "Address", FieldKind::TextArea),
];

const LEAVE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("employeeId", "Employee", FieldKind::EmployeePicker),
    FieldSpec::required("reason", "Reason", FieldKind::TextArea),
    FieldSpec::required("startDate", "Start Date", FieldKind::Date),
    FieldSpec::required("endDate", "End Date", FieldKind::Date),
];

pub const fn form_spec(kind: EntityKind) -> FormSpec {
    let fields = match kind {
        EntityKind::Admin => ADMIN_FIELDS,
        EntityKind::Employee => EMPLOYEE_FIELDS,
        EntityKind::Leave => LEAVE_FIELDS,
    };
    FormSpec { kind, fields }
}

impl FormSpec {
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn needs_employee_options(&self) -> bool {
        self.fields
            .iter()
            .any(|field| field.kind == FieldKind::EmployeePicker)
    }
}

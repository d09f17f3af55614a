use chrono::NaiveDate;
use reqwest::Method;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::utils::time::serde_opt_date;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn unknown(error: impl Into<String>) -> Self {
        Self::new("UNKNOWN", error)
    }

    pub fn request_failed(error: impl Into<String>) -> Self {
        Self::new("REQUEST_FAILED", error)
    }

    pub fn parse(error: impl Into<String>) -> Self {
        Self::new("PARSE_ERROR", error)
    }

    pub fn no_session() -> Self {
        Self::new("NO_SESSION", "You are not signed in")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Builds an error from a non-2xx response. `message` may be a string or
    /// a list of validation messages.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let message = parsed.as_ref().and_then(|value| value.get("message"));

        let base_code = if status == 401 {
            "UNAUTHORIZED".to_string()
        } else {
            format!("HTTP_{}", status)
        };

        match message {
            Some(Value::String(text)) if !text.trim().is_empty() => Self::new(base_code, text.clone()),
            Some(Value::Array(items)) => {
                let errors: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect();
                Self {
                    error: "Validation failed".into(),
                    code: "VALIDATION_ERROR".into(),
                    details: Some(json!({ "errors": errors })),
                }
            }
            _ => {
                let fallback = parsed
                    .as_ref()
                    .and_then(|value| value.get("error"))
                    .and_then(|value| value.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Request failed with status {}", status));
                Self::new(base_code, fallback)
            }
        }
    }

    pub fn validation_messages(&self) -> Vec<String> {
        self.details
            .as_ref()
            .and_then(|details| details.get("errors"))
            .and_then(|errors| errors.as_array())
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|err| err.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Backends disagree on whether identifiers are numbers or strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub admin_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Admin,
    Employee,
    Leave,
}

impl EntityKind {
    pub const fn segment(self) -> &'static str {
        match self {
            EntityKind::Admin => "admin",
            EntityKind::Employee => "employee",
            EntityKind::Leave => "leave",
        }
    }

    pub const fn id_field(self) -> &'static str {
        match self {
            EntityKind::Admin => "adminId",
            EntityKind::Employee => "employeeId",
            EntityKind::Leave => "leaveId",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Admin => "Admin",
            EntityKind::Employee => "Employee",
            EntityKind::Leave => "Leave",
        }
    }

    pub const fn supports_search(self) -> bool {
        !matches!(self, EntityKind::Leave)
    }

    pub fn collection_path(self) -> String {
        format!("/{}", self.segment())
    }

    pub fn list_path(self) -> String {
        format!("/{}/list", self.segment())
    }

    pub fn detail_path(self) -> String {
        format!("/{}/detail", self.segment())
    }

    pub fn update_path(self) -> String {
        format!("/{}/update", self.segment())
    }

    pub fn update_method(self) -> Method {
        match self {
            EntityKind::Employee => Method::PUT,
            EntityKind::Admin | EntityKind::Leave => Method::POST,
        }
    }

    pub fn delete_path(self, encoded_id: &str) -> String {
        format!("/{}/delete/{}", self.segment(), encoded_id)
    }
}

/// A record type served by one of the CRUD endpoint families.
pub trait Entity: DeserializeOwned + Clone + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(deserialize_with = "deserialize_id")]
    pub admin_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, with = "serde_opt_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: String,
    /// Write-only: never echoed back or prefilled.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl Entity for Admin {
    const KIND: EntityKind = EntityKind::Admin;

    fn id(&self) -> &str {
        &self.admin_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "deserialize_id")]
    pub employee_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_list: Option<Vec<Leave>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn leaves(&self) -> &[Leave] {
        self.leave_list.as_deref().unwrap_or_default()
    }
}

impl Entity for Employee {
    const KIND: EntityKind = EntityKind::Employee;

    fn id(&self) -> &str {
        &self.employee_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    #[serde(deserialize_with = "deserialize_id")]
    pub leave_id: String,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default, with = "serde_opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "serde_opt_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_last_name: Option<String>,
}

impl Entity for Leave {
    const KIND: EntityKind = EntityKind::Leave;

    fn id(&self) -> &str {
        &self.leave_id
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

impl<T> Paged<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            per_page: self.per_page,
            page: self.page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
}

impl ListQuery {
    /// Query-string pairs; `search` is only sent when the endpoint takes it
    /// and the term is non-empty.
    pub fn params(&self, supports_search: bool) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ];
        if supports_search {
            if let Some(term) = self.search.as_deref().filter(|term| !term.is_empty()) {
                params.push(("search", term.to_string()));
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_normalise_to_strings() {
        let admin: Admin = serde_json::from_value(json!({
            "adminId": 42,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "dateOfBirth": "1815-12-10T00:00:00.000Z",
            "gender": "Female"
        }))
        .unwrap();
        assert_eq!(admin.admin_id, "42");
        assert_eq!(admin.date_of_birth, NaiveDate::from_ymd_opt(1815, 12, 10));

        let leave: Leave = serde_json::from_value(json!({
            "leaveId": "l-1",
            "employeeId": 9,
            "reason": "Flu",
            "startDate": "2024-01-02",
            "endDate": "2024-01-03"
        }))
        .unwrap();
        assert_eq!(leave.employee_id.as_deref(), Some("9"));
    }

    #[test]
    fn admin_password_is_never_serialized() {
        let admin = Admin {
            admin_id: "1".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.io".into(),
            date_of_birth: None,
            gender: "Male".into(),
            password: Some("secret".into()),
        };
        let value = serde_json::to_value(&admin).unwrap();
        assert!(value.get("password").is_none());
    }

    #[test]
    fn employee_embeds_optional_leaves() {
        let with_leaves: Employee = serde_json::from_value(json!({
            "employeeId": "e1",
            "firstName": "Budi",
            "lastName": "Santoso",
            "leaveList": [{"leaveId": "l1", "reason": "Trip", "startDate": "2024-05-01", "endDate": "2024-05-03"}]
        }))
        .unwrap();
        assert_eq!(with_leaves.leaves().len(), 1);
        assert_eq!(with_leaves.full_name(), "Budi Santoso");

        let without: Employee = serde_json::from_value(json!({"employeeId": "e2", "leaveList": null})).unwrap();
        assert!(without.leaves().is_empty());
    }

    #[test]
    fn paged_result_defaults_missing_counters() {
        let page: Paged<Leave> = serde_json::from_value(json!({"data": [], "total": 0})).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 10);
    }

    #[test]
    fn list_query_params_skip_empty_or_unsupported_search() {
        let query = ListQuery {
            page: 3,
            per_page: 10,
            search: Some("ana".into()),
        };
        assert_eq!(
            query.params(true),
            vec![
                ("page", "3".to_string()),
                ("perPage", "10".to_string()),
                ("search", "ana".to_string())
            ]
        );
        assert_eq!(query.params(false).len(), 2);

        let blank = ListQuery {
            search: Some(String::new()),
            ..query
        };
        assert_eq!(blank.params(true).len(), 2);
    }

    #[test]
    fn endpoint_mapping_per_kind() {
        assert_eq!(EntityKind::Admin.list_path(), "/admin/list");
        assert_eq!(EntityKind::Employee.detail_path(), "/employee/detail");
        assert_eq!(EntityKind::Leave.delete_path("7"), "/leave/delete/7");
        assert_eq!(EntityKind::Employee.update_method(), Method::PUT);
        assert_eq!(EntityKind::Admin.update_method(), Method::POST);
        assert_eq!(EntityKind::Leave.update_method(), Method::POST);
        assert_eq!(EntityKind::Leave.id_field(), "leaveId");
        assert!(!EntityKind::Leave.supports_search());
        assert!(EntityKind::Admin.supports_search());
    }

    #[test]
    fn error_body_string_message() {
        let err = ApiError::from_status(400, r#"{"statusCode":400,"message":"Email already used"}"#);
        assert_eq!(err.error, "Email already used");
        assert_eq!(err.code, "HTTP_400");
    }

    #[test]
    fn error_body_message_list_becomes_validation_error() {
        let err = ApiError::from_status(
            400,
            r#"{"message":["email must be an email","firstName should not be empty"]}"#,
        );
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(
            err.validation_messages(),
            vec!["email must be an email", "firstName should not be empty"]
        );
    }

    #[test]
    fn error_body_fallbacks() {
        let unauthorized = ApiError::from_status(401, r#"{"error":"Unauthorized"}"#);
        assert!(unauthorized.is_unauthorized());
        assert_eq!(unauthorized.error, "Unauthorized");

        let opaque = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(opaque.error, "Request failed with status 502");
        assert_eq!(opaque.to_string(), "Request failed with status 502");
    }
}

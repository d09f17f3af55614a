use super::state::{FormMode, FormRecord, FormValues};
use crate::api::{Admin, ApiClient, ApiError, Employee, EntityKind, Leave};
use serde_json::Value;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeOption {
    pub id: String,
    pub label: String,
}

#[derive(Clone)]
pub struct FormRepository {
    client: Rc<ApiClient>,
}

impl FormRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self, kind: EntityKind, id: &str) -> Result<FormValues, ApiError> {
        Ok(match kind {
            EntityKind::Admin => self.client.detail::<Admin>(id).await?.form_values(),
            EntityKind::Employee => self.client.detail::<Employee>(id).await?.form_values(),
            EntityKind::Leave => self.client.detail::<Leave>(id).await?.form_values(),
        })
    }

    pub async fn save(
        &self,
        kind: EntityKind,
        mode: &FormMode,
        payload: &Value,
    ) -> Result<(), ApiError> {
        match mode {
            FormMode::Add => self.client.create(kind, payload).await,
            FormMode::Edit(id) => self.client.update(kind, id, payload).await,
        }
    }

    pub async fn employee_options(&self) -> Result<Vec<EmployeeOption>, ApiError> {
        Ok(self
            .client
            .list_all_employees()
            .await?
            .into_iter()
            .map(|employee| EmployeeOption {
                label: employee.full_name(),
                id: employee.employee_id,
            })
            .collect())
    }
}

use crate::{
    api::{Admin, ApiClient, ApiError, Employee, EntityKind, Leave, ListQuery, Paged},
    components::data_table::TableRow,
    pages::entity_list::{config::ListVariant, rows},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ListRepository {
    client: Rc<ApiClient>,
}

impl ListRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(
        &self,
        variant: ListVariant,
        query: &ListQuery,
    ) -> Result<Paged<TableRow>, ApiError> {
        match variant {
            ListVariant::Admins => Ok(self.client.list::<Admin>(query).await?.map(rows::admin_row)),
            ListVariant::Employees => Ok(self
                .client
                .list::<Employee>(query)
                .await?
                .map(rows::employee_row)),
            ListVariant::EmployeeLeaves => Ok(self
                .client
                .list::<Employee>(query)
                .await?
                .map(rows::employee_with_leaves_row)),
            ListVariant::Leaves => Ok(self.client.list::<Leave>(query).await?.map(rows::leave_row)),
        }
    }

    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), ApiError> {
        self.client.delete(kind, id).await
    }
}

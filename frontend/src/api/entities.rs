use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};

use super::{
    client::ApiClient,
    types::{ApiError, Employee, Entity, EntityKind, ListQuery, Paged},
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Merges the identifier field into an update payload.
fn with_id_field(kind: EntityKind, id: &str, payload: Value) -> Value {
    match payload {
        Value::Object(mut map) => {
            map.insert(kind.id_field().to_string(), json!(id));
            Value::Object(map)
        }
        other => other,
    }
}

impl ApiClient {
    pub async fn list<T: Entity>(&self, query: &ListQuery) -> Result<Paged<T>, ApiError> {
        let kind = T::KIND;
        let builder = self
            .request(Method::GET, &kind.list_path())
            .await
            .query(&query.params(kind.supports_search()));
        self.send_json(builder).await
    }

    pub async fn detail<T: Entity>(&self, id: &str) -> Result<T, ApiError> {
        let kind = T::KIND;
        let builder = self
            .request(Method::GET, &kind.detail_path())
            .await
            .query(&[(kind.id_field(), id)]);
        self.send_json(builder).await
    }

    pub async fn create<P: Serialize + ?Sized>(
        &self,
        kind: EntityKind,
        payload: &P,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, &kind.collection_path())
            .await
            .json(payload);
        self.send_unit(builder).await
    }

    pub async fn update<P: Serialize + ?Sized>(
        &self,
        kind: EntityKind,
        id: &str,
        payload: &P,
    ) -> Result<(), ApiError> {
        let value = serde_json::to_value(payload)
            .map_err(|e| ApiError::parse(format!("Failed to encode payload: {}", e)))?;
        let builder = self
            .request(kind.update_method(), &kind.update_path())
            .await
            .json(&with_id_field(kind, id, value));
        self.send_unit(builder).await
    }

    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), ApiError> {
        let encoded = utf8_percent_encode(id, PATH_SEGMENT).to_string();
        let builder = self
            .request(Method::POST, &kind.delete_path(&encoded))
            .await
            .json(&json!({}));
        self.send_unit(builder).await
    }

    /// Every employee, unpaged; feeds the leave form's picker.
    pub async fn list_all_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let builder = self
            .request(Method::GET, &EntityKind::Employee.collection_path())
            .await;
        self.send_json(builder).await
    }
}

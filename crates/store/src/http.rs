//! REST client for a hosted record-store service.
//!
//! Wraps the hosted backend's JSON endpoints (`GET /v1/{collection}/{id}`,
//! filtered `GET /v1/{collection}`, `POST /v1/{collection}:upsert`) using
//! [`reqwest`]. Transport and non-2xx failures surface as
//! [`StoreError::Transport`].

use async_trait::async_trait;
use panelcast_core::types::Id;
use serde_json::Value;

use crate::error::StoreError;
use crate::filter::Filter;
use crate::traits::RecordStore;

/// HTTP client for a single hosted record-store service.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Create a new client for the service at `base_url`
    /// (e.g. `https://records.internal:8443`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across stores).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/v1/{collection}", self.base_url)
    }

    /// Check the response status, returning the response for body reads.
    ///
    /// Non-2xx responses are reported with their status and raw body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Transport(format!(
            "record store returned {status}: {body}"
        )))
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

/// Render a filter value as a query-string value.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl RecordStore for HttpStore {
    async fn fetch_by_id(&self, collection: &str, id: Id) -> Result<Option<Value>, StoreError> {
        let url = format!("{}/{id}", self.collection_url(collection));
        let response = self.client.get(url).send().await.map_err(transport)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response).await?;
        let record = response.json().await.map_err(transport)?;
        Ok(Some(record))
    }

    async fn fetch_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Value>, StoreError> {
        let query: Vec<(String, String)> = filter
            .clauses()
            .iter()
            .map(|(field, value)| (field.clone(), query_value(value)))
            .collect();

        let response = self
            .client
            .get(self.collection_url(collection))
            .query(&query)
            .send()
            .await
            .map_err(transport)?;

        let response = Self::check(response).await?;
        response.json().await.map_err(transport)
    }

    async fn upsert_many(
        &self,
        collection: &str,
        records: Vec<Value>,
    ) -> Result<Vec<Value>, StoreError> {
        let url = format!("{}:upsert", self.collection_url(collection));
        let response = self
            .client
            .post(url)
            .json(&records)
            .send()
            .await
            .map_err(transport)?;

        let response = Self::check(response).await?;
        response.json().await.map_err(transport)
    }

    async fn exists(&self, collection: &str, id: Id) -> Result<bool, StoreError> {
        Ok(self.fetch_by_id(collection, id).await?.is_some())
    }
}

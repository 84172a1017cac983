//! In-memory record store for tests and local development.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use panelcast_core::types::Id;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::filter::Filter;
use crate::traits::RecordStore;

/// A [`RecordStore`] holding all collections in process memory.
///
/// Collections are created lazily on first upsert; fetching from a
/// collection that was never written is an empty result, not an error,
/// matching the permissive behavior of the hosted backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<Id, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in a collection.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

/// Extract and parse the `"id"` field of a record.
fn record_id(collection: &str, record: &Value) -> Result<Id, StoreError> {
    let raw = record
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::InvalidRecord {
            collection: collection.to_string(),
            reason: "missing string `id` field".to_string(),
        })?;
    raw.parse().map_err(|_| StoreError::InvalidRecord {
        collection: collection.to_string(),
        reason: format!("`id` is not a valid UUID: {raw}"),
    })
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_by_id(&self, collection: &str, id: Id) -> Result<Option<Value>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|records| records.get(&id))
            .cloned())
    }

    async fn fetch_many(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|records| {
                records
                    .values()
                    .filter(|record| filter.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn upsert_many(
        &self,
        collection: &str,
        records: Vec<Value>,
    ) -> Result<Vec<Value>, StoreError> {
        let mut guard = self.collections.write().await;
        let entries = guard.entry(collection.to_string()).or_default();
        for record in &records {
            let id = record_id(collection, record)?;
            entries.insert(id, record.clone());
        }
        Ok(records)
    }

    async fn exists(&self, collection: &str, id: Id) -> Result<bool, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .is_some_and(|records| records.contains_key(&id)))
    }
}

use async_trait::async_trait;
use panelcast_core::types::Id;
use serde_json::Value;

use crate::error::StoreError;
use crate::filter::Filter;

/// Generic record-store capability backing the entity repositories.
///
/// Records are JSON objects carrying their identity in an `"id"` field
/// (hyphenated UUID string). `upsert_many` is create-or-replace by id —
/// partial patches are not part of the interface. Identifier allocation is
/// the application's job ([`panelcast_core::types::new_id`]), never the
/// store's.
///
/// Implementations must be `Send + Sync + 'static` so a single handle can
/// be shared across axum handlers and async task boundaries.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Fetch a single record by id, or `None` when absent.
    async fn fetch_by_id(&self, collection: &str, id: Id) -> Result<Option<Value>, StoreError>;

    /// Fetch all records matching every clause of `filter`.
    ///
    /// No ordering is guaranteed.
    async fn fetch_many(&self, collection: &str, filter: &Filter)
        -> Result<Vec<Value>, StoreError>;

    /// Create-or-replace a batch of records, returning them as stored.
    ///
    /// The batch is not atomic across records; callers sequence their
    /// writes so a partially applied batch never leaves dangling
    /// references behind.
    async fn upsert_many(
        &self,
        collection: &str,
        records: Vec<Value>,
    ) -> Result<Vec<Value>, StoreError>;

    /// Check whether a record with the given id exists.
    async fn exists(&self, collection: &str, id: Id) -> Result<bool, StoreError>;
}

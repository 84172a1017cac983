//! Repository for the `journey_item_versions` collection.

use panelcast_core::types::Id;
use panelcast_store::{Filter, RecordStore, StoreError};

use crate::models::journey_item_version::JourneyItemVersion;
use crate::records::{decode, decode_all, encode_all};

/// Collection name in the record store.
const COLLECTION: &str = "journey_item_versions";

/// Provides read/write operations for journey item versions.
pub struct JourneyItemVersionRepo;

impl JourneyItemVersionRepo {
    /// Find an item version by its primary key.
    pub async fn find_by_id(
        store: &dyn RecordStore,
        id: Id,
    ) -> Result<Option<JourneyItemVersion>, StoreError> {
        match store.fetch_by_id(COLLECTION, id).await? {
            Some(record) => Ok(Some(decode(record)?)),
            None => Ok(None),
        }
    }

    /// List all item versions belonging to a journey, historical ones
    /// included.
    pub async fn list_by_journey(
        store: &dyn RecordStore,
        journey_id: Id,
    ) -> Result<Vec<JourneyItemVersion>, StoreError> {
        let filter = Filter::new().eq_id("journey_id", journey_id);
        decode_all(store.fetch_many(COLLECTION, &filter).await?)
    }

    /// Batch create-or-replace item version rows.
    pub async fn upsert_many(
        store: &dyn RecordStore,
        versions: &[JourneyItemVersion],
    ) -> Result<(), StoreError> {
        if versions.is_empty() {
            return Ok(());
        }
        store.upsert_many(COLLECTION, encode_all(versions)?).await?;
        Ok(())
    }
}

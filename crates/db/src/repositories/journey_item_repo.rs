//! Repository for the `journey_items` collection.

use panelcast_core::types::Id;
use panelcast_store::{Filter, RecordStore, StoreError};

use crate::models::journey_item::JourneyItem;
use crate::records::{decode, decode_all, encode_all};

/// Collection name in the record store.
const COLLECTION: &str = "journey_items";

/// Provides read/write operations for journey items.
pub struct JourneyItemRepo;

impl JourneyItemRepo {
    /// Find an item by its primary key.
    pub async fn find_by_id(
        store: &dyn RecordStore,
        id: Id,
    ) -> Result<Option<JourneyItem>, StoreError> {
        match store.fetch_by_id(COLLECTION, id).await? {
            Some(record) => Ok(Some(decode(record)?)),
            None => Ok(None),
        }
    }

    /// List all items belonging to a journey.
    pub async fn list_by_journey(
        store: &dyn RecordStore,
        journey_id: Id,
    ) -> Result<Vec<JourneyItem>, StoreError> {
        let filter = Filter::new().eq_id("journey_id", journey_id);
        decode_all(store.fetch_many(COLLECTION, &filter).await?)
    }

    /// Batch create-or-replace item rows.
    pub async fn upsert_many(
        store: &dyn RecordStore,
        items: &[JourneyItem],
    ) -> Result<(), StoreError> {
        if items.is_empty() {
            return Ok(());
        }
        store.upsert_many(COLLECTION, encode_all(items)?).await?;
        Ok(())
    }
}

//! Repository for the `journey_versions` collection.

use panelcast_core::types::Id;
use panelcast_store::{Filter, RecordStore, StoreError};

use crate::models::journey_version::JourneyVersion;
use crate::records::{decode, decode_all, encode};

/// Collection name in the record store.
const COLLECTION: &str = "journey_versions";

/// Provides read/write operations for journey versions.
pub struct JourneyVersionRepo;

impl JourneyVersionRepo {
    /// Persist a version row (create-or-replace).
    pub async fn upsert(
        store: &dyn RecordStore,
        version: &JourneyVersion,
    ) -> Result<(), StoreError> {
        store.upsert_many(COLLECTION, vec![encode(version)?]).await?;
        Ok(())
    }

    /// Find a version by its primary key.
    pub async fn find_by_id(
        store: &dyn RecordStore,
        id: Id,
    ) -> Result<Option<JourneyVersion>, StoreError> {
        match store.fetch_by_id(COLLECTION, id).await? {
            Some(record) => Ok(Some(decode(record)?)),
            None => Ok(None),
        }
    }

    /// List all versions belonging to a journey.
    pub async fn list_by_journey(
        store: &dyn RecordStore,
        journey_id: Id,
    ) -> Result<Vec<JourneyVersion>, StoreError> {
        let filter = Filter::new().eq_id("journey_id", journey_id);
        decode_all(store.fetch_many(COLLECTION, &filter).await?)
    }
}

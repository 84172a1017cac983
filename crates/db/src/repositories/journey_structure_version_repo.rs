//! Repository for the `journey_structure_versions` collection.

use panelcast_core::types::Id;
use panelcast_store::{Filter, RecordStore, StoreError};

use crate::models::journey_structure_version::JourneyStructureVersion;
use crate::records::{decode_all, encode_all};

/// Collection name in the record store.
const COLLECTION: &str = "journey_structure_versions";

/// Provides read/write operations for journey structure versions.
pub struct JourneyStructureVersionRepo;

impl JourneyStructureVersionRepo {
    /// List all structure versions belonging to a journey.
    pub async fn list_by_journey(
        store: &dyn RecordStore,
        journey_id: Id,
    ) -> Result<Vec<JourneyStructureVersion>, StoreError> {
        let filter = Filter::new().eq_id("journey_id", journey_id);
        decode_all(store.fetch_many(COLLECTION, &filter).await?)
    }

    /// Batch create-or-replace structure version rows.
    pub async fn upsert_many(
        store: &dyn RecordStore,
        versions: &[JourneyStructureVersion],
    ) -> Result<(), StoreError> {
        if versions.is_empty() {
            return Ok(());
        }
        store.upsert_many(COLLECTION, encode_all(versions)?).await?;
        Ok(())
    }
}

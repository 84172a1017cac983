//! Repository for the `journey_structures` collection.

use panelcast_core::types::Id;
use panelcast_store::{Filter, RecordStore, StoreError};

use crate::models::journey_structure::JourneyStructure;
use crate::records::{decode_all, encode_all};

/// Collection name in the record store.
const COLLECTION: &str = "journey_structures";

/// Provides read/write operations for journey structures.
pub struct JourneyStructureRepo;

impl JourneyStructureRepo {
    /// List all structure nodes belonging to a journey.
    pub async fn list_by_journey(
        store: &dyn RecordStore,
        journey_id: Id,
    ) -> Result<Vec<JourneyStructure>, StoreError> {
        let filter = Filter::new().eq_id("journey_id", journey_id);
        decode_all(store.fetch_many(COLLECTION, &filter).await?)
    }

    /// Batch create-or-replace structure rows.
    pub async fn upsert_many(
        store: &dyn RecordStore,
        structures: &[JourneyStructure],
    ) -> Result<(), StoreError> {
        if structures.is_empty() {
            return Ok(());
        }
        store.upsert_many(COLLECTION, encode_all(structures)?).await?;
        Ok(())
    }
}

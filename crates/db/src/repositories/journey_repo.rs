//! Repository for the `journeys` collection.

use panelcast_core::types::{now, Id};
use panelcast_store::{Filter, RecordStore, StoreError};

use crate::models::journey::{CreateJourney, Journey};
use crate::records::{decode, decode_all, encode};

/// Collection name in the record store.
const COLLECTION: &str = "journeys";

/// Provides CRUD operations for journeys.
pub struct JourneyRepo;

impl JourneyRepo {
    /// Insert a new journey, returning the created row.
    pub async fn create(
        store: &dyn RecordStore,
        input: &CreateJourney,
    ) -> Result<Journey, StoreError> {
        let journey = Journey::new(input);
        store.upsert_many(COLLECTION, vec![encode(&journey)?]).await?;
        Ok(journey)
    }

    /// Find a journey by its primary key.
    pub async fn find_by_id(
        store: &dyn RecordStore,
        id: Id,
    ) -> Result<Option<Journey>, StoreError> {
        match store.fetch_by_id(COLLECTION, id).await? {
            Some(record) => Ok(Some(decode(record)?)),
            None => Ok(None),
        }
    }

    /// List enabled journeys for an organization.
    pub async fn list_by_organization(
        store: &dyn RecordStore,
        organization_id: Id,
    ) -> Result<Vec<Journey>, StoreError> {
        let filter = Filter::new()
            .eq_id("organization_id", organization_id)
            .eq("disabled", false);
        decode_all(store.fetch_many(COLLECTION, &filter).await?)
    }

    /// Persist a journey row as-is (create-or-replace).
    pub async fn upsert(store: &dyn RecordStore, journey: &Journey) -> Result<(), StoreError> {
        store.upsert_many(COLLECTION, vec![encode(journey)?]).await?;
        Ok(())
    }

    /// Point a journey at a new current version.
    ///
    /// Returns the updated row, or `None` if the journey does not exist.
    pub async fn set_current_version(
        store: &dyn RecordStore,
        id: Id,
        version_id: Id,
    ) -> Result<Option<Journey>, StoreError> {
        let Some(mut journey) = Self::find_by_id(store, id).await? else {
            return Ok(None);
        };
        journey.current_version_id = Some(version_id);
        journey.updated_at = now();
        Self::upsert(store, &journey).await?;
        Ok(Some(journey))
    }

    /// Soft-disable a journey.
    ///
    /// Journeys are never hard-deleted in normal flow; disabling hides
    /// them from listings while keeping all rows in place. Returns the
    /// updated row, or `None` if the journey does not exist.
    pub async fn disable(
        store: &dyn RecordStore,
        id: Id,
    ) -> Result<Option<Journey>, StoreError> {
        let Some(mut journey) = Self::find_by_id(store, id).await? else {
            return Ok(None);
        };
        let at = now();
        journey.disabled = true;
        journey.disabled_at = Some(at);
        journey.updated_at = at;
        Self::upsert(store, &journey).await?;
        Ok(Some(journey))
    }
}

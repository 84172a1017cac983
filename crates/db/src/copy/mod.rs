//! Journey copy engine.
//!
//! Produces a complete, independent copy of a journey: the journey and
//! version header, every item that has live content, and the structural
//! graph, with all internal cross-references remapped onto freshly
//! allocated ids.
//!
//! No transaction spans the phases. Source resolution is fully validated
//! before the first write; once writes begin, a store failure leaves a
//! partial journey behind and surfaces its id so the caller can discard
//! it (see [`discard_partial`]). Retrying a failed copy always allocates
//! an entirely new journey id.

mod items;
mod remap;
mod structures;

pub use remap::{ItemIdMap, StructureIdMap};

use panelcast_core::types::{now, Id};
use panelcast_store::{RecordStore, StoreError};
use serde::{Deserialize, Serialize};

use crate::models::journey::{CreateJourney, Journey};
use crate::models::journey_item::JourneyItem;
use crate::models::journey_item_version::JourneyItemVersion;
use crate::models::journey_structure::JourneyStructure;
use crate::models::journey_structure_version::JourneyStructureVersion;
use crate::models::journey_version::JourneyVersion;
use crate::repositories::{JourneyRepo, JourneyVersionRepo};

// ---------------------------------------------------------------------------
// Request / result types
// ---------------------------------------------------------------------------

/// Caller context for a copy operation.
///
/// At least one of `journey_id`/`journey_version_id` must resolve to an
/// existing journey. Organization and owner are supplied by the caller —
/// the copy may land in a different tenant than the source — and are
/// applied to every created entity.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyRequest {
    pub journey_id: Option<Id>,
    pub journey_version_id: Option<Id>,
    pub organization_id: Id,
    pub owner_id: Option<Id>,
}

/// Everything created by one copy operation.
#[derive(Debug, Serialize)]
pub struct CopyResult {
    pub journey: Journey,
    pub version: JourneyVersion,
    pub items: Vec<JourneyItem>,
    pub item_versions: Vec<JourneyItemVersion>,
    pub structures: Vec<JourneyStructure>,
    pub structure_versions: Vec<JourneyStructureVersion>,
}

/// Shared per-invocation context handed to the copy phases.
pub(crate) struct CopyContext {
    pub old_journey_id: Id,
    pub new_journey_id: Id,
    pub organization_id: Id,
    pub owner_id: Option<Id>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the copy engine.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// The source journey or version could not be resolved. Raised during
    /// read-only resolution, before any write.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Id },

    /// The copy could not be parameterized (no version specified and the
    /// source has no current version, or no source named at all). Raised
    /// before any write.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A store call failed. When `journey_id` is set, writes had already
    /// begun and a partial journey with that id may exist.
    #[error("Store error during copy: {source}")]
    Store {
        journey_id: Option<Id>,
        #[source]
        source: StoreError,
    },
}

impl CopyError {
    /// Id of the partially created journey, when writes had begun.
    pub fn partial_journey_id(&self) -> Option<Id> {
        match self {
            CopyError::Store { journey_id, .. } => *journey_id,
            _ => None,
        }
    }
}

/// Wrap a store failure from the read-only resolution step.
fn read_error(source: StoreError) -> CopyError {
    CopyError::Store {
        journey_id: None,
        source,
    }
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Copy a journey, returning the full set of created entities.
///
/// Three phases run in sequence: the journey + version header, the item
/// set (producing the item id map), and the structural graph (consuming
/// that map). Each phase only ever creates rows under the new journey id;
/// the source journey is read, never written.
pub async fn copy_journey(
    store: &dyn RecordStore,
    request: &CopyRequest,
) -> Result<CopyResult, CopyError> {
    // -- Read-only resolution, fully validated before any write --
    let (source_journey, source_version) = resolve_source(store, request).await?;

    // -- New journey header --
    let mut journey = Journey::new(&CreateJourney {
        organization_id: request.organization_id,
        owner_id: request.owner_id,
        template_id: source_journey.template_id,
    });
    let journey_id = journey.id;
    let write_error = |source: StoreError| CopyError::Store {
        journey_id: Some(journey_id),
        source,
    };

    JourneyRepo::upsert(store, &journey).await.map_err(write_error)?;

    let version = JourneyVersion::fork(
        journey_id,
        &source_version,
        request.organization_id,
        request.owner_id,
    );
    JourneyVersionRepo::upsert(store, &version)
        .await
        .map_err(write_error)?;

    // The forked version becomes the new journey's active one. Two-pass
    // write: the version row exists before anything points at it.
    journey.current_version_id = Some(version.id);
    journey.updated_at = now();
    JourneyRepo::upsert(store, &journey).await.map_err(write_error)?;

    let ctx = CopyContext {
        old_journey_id: source_journey.id,
        new_journey_id: journey_id,
        organization_id: request.organization_id,
        owner_id: request.owner_id,
    };

    // -- Phase: items --
    let item_outcome = items::copy_items_from_journey(store, &ctx)
        .await
        .map_err(write_error)?;

    // -- Phase: structures --
    let structure_outcome =
        structures::copy_structures_from_journey(store, &ctx, &item_outcome.map)
            .await
            .map_err(write_error)?;

    tracing::info!(
        source_journey_id = %source_journey.id,
        journey_id = %journey_id,
        items = item_outcome.items.len(),
        structures = structure_outcome.structures.len(),
        "Journey copied"
    );

    Ok(CopyResult {
        journey,
        version,
        items: item_outcome.items,
        item_versions: item_outcome.item_versions,
        structures: structure_outcome.structures,
        structure_versions: structure_outcome.structure_versions,
    })
}

/// Resolve the source journey and the version to copy.
///
/// An explicit version id wins over the journey's current version; when
/// only a version id is given, the owning journey is derived from it.
async fn resolve_source(
    store: &dyn RecordStore,
    request: &CopyRequest,
) -> Result<(Journey, JourneyVersion), CopyError> {
    let journey = match request.journey_id {
        Some(id) => Some(
            JourneyRepo::find_by_id(store, id)
                .await
                .map_err(read_error)?
                .ok_or(CopyError::NotFound {
                    entity: "Journey",
                    id,
                })?,
        ),
        None => None,
    };

    let version_id = match (request.journey_version_id, journey.as_ref()) {
        (Some(id), _) => id,
        (None, Some(journey)) => journey.current_version_id.ok_or_else(|| {
            CopyError::InvalidState(
                "no version specified and no current version available".to_string(),
            )
        })?,
        (None, None) => {
            return Err(CopyError::InvalidState(
                "neither a journey id nor a journey version id was given".to_string(),
            ))
        }
    };

    let version = JourneyVersionRepo::find_by_id(store, version_id)
        .await
        .map_err(read_error)?
        .ok_or(CopyError::NotFound {
            entity: "JourneyVersion",
            id: version_id,
        })?;

    let journey = match journey {
        Some(journey) => journey,
        None => JourneyRepo::find_by_id(store, version.journey_id)
            .await
            .map_err(read_error)?
            .ok_or(CopyError::NotFound {
                entity: "Journey",
                id: version.journey_id,
            })?,
    };

    Ok((journey, version))
}

// ---------------------------------------------------------------------------
// Cleanup
// ---------------------------------------------------------------------------

/// Soft-disable a partially created journey left behind by a failed copy.
///
/// Rows already written under the journey id stay in place; disabling the
/// header is enough to hide the journey from listings. A retried copy
/// allocates an entirely new journey id, so the partial one is inert.
pub async fn discard_partial(store: &dyn RecordStore, journey_id: Id) -> Result<(), StoreError> {
    match JourneyRepo::disable(store, journey_id).await? {
        Some(_) => {
            tracing::info!(%journey_id, "Discarded partially copied journey");
        }
        None => {
            tracing::debug!(%journey_id, "No partial journey row to discard");
        }
    }
    Ok(())
}

//! Journey container model and DTOs.
//!
//! A journey is the top-level versioned flow definition. It is created by
//! the API or by the copy engine, soft-disabled rather than deleted, and
//! points at the [`JourneyVersion`](super::journey_version::JourneyVersion)
//! currently considered active.

use panelcast_core::types::{new_id, now, Id, Timestamp};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A journey record from the `journeys` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journey {
    pub id: Id,
    /// Template this journey was instantiated from, when any.
    pub template_id: Option<Id>,
    pub organization_id: Id,
    pub owner_id: Option<Id>,
    /// The active version, absent only on a journey that has never had a
    /// version committed.
    pub current_version_id: Option<Id>,
    pub disabled: bool,
    pub disabled_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub updated_by: Option<Id>,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a new journey.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJourney {
    pub organization_id: Id,
    pub owner_id: Option<Id>,
    pub template_id: Option<Id>,
}

impl Journey {
    /// Build a fresh journey row: new id, current timestamps, enabled.
    pub fn new(input: &CreateJourney) -> Self {
        let created = now();
        Self {
            id: new_id(),
            template_id: input.template_id,
            organization_id: input.organization_id,
            owner_id: input.owner_id,
            current_version_id: None,
            disabled: false,
            disabled_at: None,
            created_at: created,
            updated_at: created,
            updated_by: input.owner_id,
        }
    }
}

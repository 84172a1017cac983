//! Journey version model: a named snapshot marker for a journey.

use panelcast_core::types::{new_id, now, Id, Timestamp};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A record from the `journey_versions` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyVersion {
    pub id: Id,
    /// Owning journey.
    pub journey_id: Id,
    /// Version this one was forked from, when any.
    pub template_id: Option<Id>,
    pub template_version_id: Option<Id>,
    pub name: String,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub organization_id: Id,
    pub owner_id: Option<Id>,
    /// Journey this is a version of. Tracks lineage separately from
    /// `journey_id`.
    pub version_of_id: Id,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl JourneyVersion {
    /// Fork `source` as a version of `journey_id`.
    ///
    /// The forked version's own id becomes the new version's template
    /// pointer; the source's origin pointer is carried forward unchanged.
    pub fn fork(
        journey_id: Id,
        source: &JourneyVersion,
        organization_id: Id,
        owner_id: Option<Id>,
    ) -> Self {
        let created = now();
        Self {
            id: new_id(),
            journey_id,
            template_id: Some(source.id),
            template_version_id: source.template_version_id,
            name: source.name.clone(),
            description: source.description.clone(),
            metadata: source.metadata.clone(),
            organization_id,
            owner_id,
            version_of_id: journey_id,
            created_at: created,
            updated_at: created,
        }
    }
}

//! Journey structure model: a node in the structural graph placing a
//! versioned item at a position in the flow.

use panelcast_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};

/// A record from the `journey_structures` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyStructure {
    pub id: Id,
    pub journey_id: Id,
    pub organization_id: Id,
    pub owner_id: Option<Id>,
    /// The [`JourneyStructureVersion`] carrying this node's current
    /// placement and links.
    ///
    /// [`JourneyStructureVersion`]: super::journey_structure_version::JourneyStructureVersion
    pub current_version_id: Option<Id>,
    pub disabled: bool,
    pub disabled_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

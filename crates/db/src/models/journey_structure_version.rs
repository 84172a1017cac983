//! Journey structure version model: the positional and link content of
//! one structure node.

use panelcast_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};

/// A record from the `journey_structure_versions` collection.
///
/// `parent_id`, `next_id`, and `previous_id` form the tree/linked-list
/// hybrid describing the flow's shape. Link targets are ids of other
/// structure nodes of the same journey (structure or structure-version
/// ids); a link must never reach outside its journey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyStructureVersion {
    pub id: Id,
    pub journey_id: Id,
    /// The item placed at this position.
    pub journey_item_id: Id,
    /// The content version of that item shown at this position.
    pub version_id: Id,
    pub parent_id: Option<Id>,
    pub next_id: Option<Id>,
    pub previous_id: Option<Id>,
    pub organization_id: Id,
    pub owner_id: Option<Id>,
    /// The structure node this is a version of.
    pub version_of_id: Id,
    pub disabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

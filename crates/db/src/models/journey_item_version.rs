//! Journey item version model: an immutable content snapshot of one item.

use panelcast_core::journey::JourneyItemType;
use panelcast_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};

/// A record from the `journey_item_versions` collection.
///
/// An item accumulates historical versions; only the one referenced by the
/// item's `current_version_id` represents its live content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyItemVersion {
    pub id: Id,
    pub journey_id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: JourneyItemType,
    /// Opaque content payload (player markup, audio references, etc.).
    pub data: Option<serde_json::Value>,
    pub metadata: Option<serde_json::Value>,
    pub organization_id: Id,
    pub owner_id: Option<Id>,
    /// The item this is a version of.
    pub version_of_id: Id,
    pub disabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

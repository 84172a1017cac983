//! Journey item model: a content node (step/section/module/action slot)
//! within a journey.

use panelcast_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};

/// A record from the `journey_items` collection.
///
/// `current_version_id`, when set, points at the
/// [`JourneyItemVersion`](super::journey_item_version::JourneyItemVersion)
/// holding this item's live content. An item with no current version has
/// no live content at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyItem {
    pub id: Id,
    pub journey_id: Id,
    /// Item this one was copied from, when any.
    pub template_item_id: Option<Id>,
    pub organization_id: Id,
    pub owner_id: Option<Id>,
    pub current_version_id: Option<Id>,
    pub disabled: bool,
    pub disabled_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

//! Item copy phase: carries every item with live content into the new
//! journey, together with its current content version.

use std::collections::HashMap;

use panelcast_core::types::{new_id, now, Id};
use panelcast_store::{RecordStore, StoreError};

use crate::models::journey_item::JourneyItem;
use crate::models::journey_item_version::JourneyItemVersion;
use crate::repositories::{JourneyItemRepo, JourneyItemVersionRepo};

use super::remap::ItemIdMap;
use super::CopyContext;

/// Everything produced by the item phase. The id map feeds the structure
/// phase, which resolves its item references through it.
pub(crate) struct ItemCopyOutcome {
    pub items: Vec<JourneyItem>,
    pub item_versions: Vec<JourneyItemVersion>,
    pub map: ItemIdMap,
}

/// Copy all items of `ctx.old_journey_id` into `ctx.new_journey_id`.
///
/// Items without a current version are excluded: an item with no live
/// content has nothing to carry forward. Items whose current version is
/// missing from the fetched set are copied without content (recoverable
/// source inconsistency, logged and continued).
pub(crate) async fn copy_items_from_journey(
    store: &dyn RecordStore,
    ctx: &CopyContext,
) -> Result<ItemCopyOutcome, StoreError> {
    // The two source reads are independent of each other.
    let (old_items, old_versions) = futures::try_join!(
        JourneyItemRepo::list_by_journey(store, ctx.old_journey_id),
        JourneyItemVersionRepo::list_by_journey(store, ctx.old_journey_id),
    )?;

    // All historical versions come back; index them once for
    // current-version lookups.
    let versions_by_id: HashMap<Id, &JourneyItemVersion> =
        old_versions.iter().map(|v| (v.id, v)).collect();

    let mut map = ItemIdMap::default();
    let mut items: Vec<JourneyItem> = Vec::with_capacity(old_items.len());
    let mut item_versions: Vec<JourneyItemVersion> = Vec::new();
    // Old current-version id per new item, for the second write pass.
    let mut old_current_ids: Vec<Id> = Vec::with_capacity(old_items.len());

    let created = now();

    for old_item in &old_items {
        let Some(old_version_id) = old_item.current_version_id else {
            continue;
        };

        let new_item_id = new_id();
        map.record_item(old_item.id, new_item_id);
        old_current_ids.push(old_version_id);
        items.push(JourneyItem {
            id: new_item_id,
            journey_id: ctx.new_journey_id,
            template_item_id: Some(old_item.id),
            organization_id: ctx.organization_id,
            owner_id: ctx.owner_id,
            current_version_id: None,
            disabled: false,
            disabled_at: None,
            created_at: created,
            updated_at: created,
        });

        let Some(old_version) = versions_by_id.get(&old_version_id) else {
            tracing::warn!(
                item_id = %old_item.id,
                version_id = %old_version_id,
                "Item's current version not found among fetched versions; \
                 copying item without content"
            );
            continue;
        };

        let new_version_id = new_id();
        map.record_version(old_version.id, new_version_id);
        item_versions.push(JourneyItemVersion {
            id: new_version_id,
            journey_id: ctx.new_journey_id,
            name: old_version.name.clone(),
            item_type: old_version.item_type,
            data: old_version.data.clone(),
            metadata: old_version.metadata.clone(),
            organization_id: ctx.organization_id,
            owner_id: ctx.owner_id,
            version_of_id: new_item_id,
            disabled: false,
            created_at: created,
            updated_at: created,
        });
    }

    JourneyItemRepo::upsert_many(store, &items).await?;
    JourneyItemVersionRepo::upsert_many(store, &item_versions).await?;

    // Second pass: versions now exist, so items may point at them without
    // a dangling-reference window for concurrent readers.
    for (item, old_version_id) in items.iter_mut().zip(&old_current_ids) {
        if let Some(new_version_id) = map.version(*old_version_id) {
            item.current_version_id = Some(new_version_id);
        }
    }
    JourneyItemRepo::upsert_many(store, &items).await?;

    tracing::debug!(
        journey_id = %ctx.new_journey_id,
        items = items.len(),
        item_versions = item_versions.len(),
        "Copied journey items"
    );

    Ok(ItemCopyOutcome {
        items,
        item_versions,
        map,
    })
}

//! Structure copy phase: rebuilds the structural graph of the source
//! journey on top of the freshly copied item set.
//!
//! Runs in two passes over the graph. Pass A creates every node and its
//! content version with links unset; pass B remaps `parent_id`/`next_id`/
//! `previous_id` once every new id exists. Links can reference siblings in
//! any iteration order, which is exactly why relinking cannot be inlined
//! into pass A.

use std::collections::HashMap;

use panelcast_core::types::{new_id, now, Id};
use panelcast_store::{RecordStore, StoreError};

use crate::models::journey_structure::JourneyStructure;
use crate::models::journey_structure_version::JourneyStructureVersion;
use crate::repositories::{JourneyStructureRepo, JourneyStructureVersionRepo};

use super::remap::{ItemIdMap, StructureIdMap};
use super::CopyContext;

/// Everything produced by the structure phase.
pub(crate) struct StructureCopyOutcome {
    pub structures: Vec<JourneyStructure>,
    pub structure_versions: Vec<JourneyStructureVersion>,
}

/// Copy the structural graph of `ctx.old_journey_id` into
/// `ctx.new_journey_id`, resolving item references through `item_map`.
pub(crate) async fn copy_structures_from_journey(
    store: &dyn RecordStore,
    ctx: &CopyContext,
    item_map: &ItemIdMap,
) -> Result<StructureCopyOutcome, StoreError> {
    let (old_structures, old_versions) = futures::try_join!(
        JourneyStructureRepo::list_by_journey(store, ctx.old_journey_id),
        JourneyStructureVersionRepo::list_by_journey(store, ctx.old_journey_id),
    )?;

    let versions_by_id: HashMap<Id, &JourneyStructureVersion> =
        old_versions.iter().map(|v| (v.id, v)).collect();

    let mut map = StructureIdMap::default();
    let mut structures: Vec<JourneyStructure> = Vec::with_capacity(old_structures.len());
    let mut structure_versions: Vec<JourneyStructureVersion> = Vec::new();
    // Old current-version id per new structure, for the second write pass.
    let mut old_current_ids: Vec<Id> = Vec::with_capacity(old_structures.len());
    // Old structure-version id per new structure version, for pass B.
    let mut link_sources: Vec<Id> = Vec::new();

    let created = now();

    // -- Pass A: nodes and their content versions, links unset --
    for old_structure in &old_structures {
        let Some(old_version_id) = old_structure.current_version_id else {
            continue;
        };

        let new_structure_id = new_id();
        map.record_structure(old_structure.id, new_structure_id);
        old_current_ids.push(old_version_id);
        structures.push(JourneyStructure {
            id: new_structure_id,
            journey_id: ctx.new_journey_id,
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
                structure_id = %old_structure.id,
                version_id = %old_version_id,
                "Structure's current version not found among fetched versions; \
                 copying node without content"
            );
            continue;
        };

        // Item references must resolve through the item phase's map; a
        // miss means the referenced item was not carried into the copy.
        let (Some(journey_item_id), Some(version_id)) = (
            item_map.item(old_version.journey_item_id),
            item_map.version(old_version.version_id),
        ) else {
            tracing::warn!(
                structure_id = %old_structure.id,
                item_id = %old_version.journey_item_id,
                "Structure version references an item that was not copied; \
                 skipping its content version"
            );
            continue;
        };

        let new_version_id = new_id();
        map.record_version(old_version.id, new_version_id);
        link_sources.push(old_version.id);
        structure_versions.push(JourneyStructureVersion {
            id: new_version_id,
            journey_id: ctx.new_journey_id,
            journey_item_id,
            version_id,
            parent_id: None,
            next_id: None,
            previous_id: None,
            organization_id: ctx.organization_id,
            owner_id: ctx.owner_id,
            version_of_id: new_structure_id,
            disabled: false,
            created_at: created,
            updated_at: created,
        });
    }

    JourneyStructureRepo::upsert_many(store, &structures).await?;
    JourneyStructureVersionRepo::upsert_many(store, &structure_versions).await?;

    // Point each node at its copied content version, now that the version
    // rows exist.
    for (structure, old_version_id) in structures.iter_mut().zip(&old_current_ids) {
        if let Some(new_version_id) = map.version(*old_version_id) {
            structure.current_version_id = Some(new_version_id);
        }
    }
    JourneyStructureRepo::upsert_many(store, &structures).await?;

    // -- Pass B: link remapping, after every new id has been allocated --
    for (new_version, old_version_id) in structure_versions.iter_mut().zip(&link_sources) {
        let Some(old_version) = versions_by_id.get(old_version_id) else {
            continue;
        };
        new_version.parent_id = map.link(old_version.parent_id);
        new_version.next_id = map.link(old_version.next_id);
        new_version.previous_id = map.link(old_version.previous_id);
    }
    JourneyStructureVersionRepo::upsert_many(store, &structure_versions).await?;

    tracing::debug!(
        journey_id = %ctx.new_journey_id,
        structures = structures.len(),
        structure_versions = structure_versions.len(),
        "Copied journey structures"
    );

    Ok(StructureCopyOutcome {
        structures,
        structure_versions,
    })
}

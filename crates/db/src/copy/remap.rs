//! Id remapping tables built during a single copy invocation.
//!
//! Each phase owns its own maps; they never outlive the call. Item ids and
//! item-version ids are tracked separately (likewise structure ids and
//! structure-version ids), so a key's entity kind is always explicit.

use std::collections::HashMap;

use panelcast_core::types::Id;

// ---------------------------------------------------------------------------
// Item phase
// ---------------------------------------------------------------------------

/// Old-to-new id mappings produced by the item copy phase.
#[derive(Debug, Default)]
pub struct ItemIdMap {
    items: HashMap<Id, Id>,
    versions: HashMap<Id, Id>,
}

impl ItemIdMap {
    pub fn record_item(&mut self, old: Id, new: Id) {
        self.items.insert(old, new);
    }

    pub fn record_version(&mut self, old: Id, new: Id) {
        self.versions.insert(old, new);
    }

    /// New id of a copied item, or `None` when the item was not copied.
    pub fn item(&self, old: Id) -> Option<Id> {
        self.items.get(&old).copied()
    }

    /// New id of a copied item version.
    pub fn version(&self, old: Id) -> Option<Id> {
        self.versions.get(&old).copied()
    }
}

// ---------------------------------------------------------------------------
// Structure phase
// ---------------------------------------------------------------------------

/// Old-to-new id mappings produced by the structure copy phase.
#[derive(Debug, Default)]
pub struct StructureIdMap {
    structures: HashMap<Id, Id>,
    versions: HashMap<Id, Id>,
}

impl StructureIdMap {
    pub fn record_structure(&mut self, old: Id, new: Id) {
        self.structures.insert(old, new);
    }

    pub fn record_version(&mut self, old: Id, new: Id) {
        self.versions.insert(old, new);
    }

    /// New id of a copied structure node.
    pub fn structure(&self, old: Id) -> Option<Id> {
        self.structures.get(&old).copied()
    }

    /// New id of a copied structure version.
    pub fn version(&self, old: Id) -> Option<Id> {
        self.versions.get(&old).copied()
    }

    /// Resolve a structural link target.
    ///
    /// Link fields may reference either a structure-version or a structure
    /// id; version ids are checked first. Targets outside the copied set
    /// resolve to `None`.
    pub fn link(&self, old: Option<Id>) -> Option<Id> {
        let old = old?;
        self.versions
            .get(&old)
            .or_else(|| self.structures.get(&old))
            .copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&dyn RecordStore` as the first argument. Absence is `Option`;
//! store failures propagate as `StoreError`.

pub mod journey_item_repo;
pub mod journey_item_version_repo;
pub mod journey_repo;
pub mod journey_structure_repo;
pub mod journey_structure_version_repo;
pub mod journey_version_repo;

pub use journey_item_repo::JourneyItemRepo;
pub use journey_item_version_repo::JourneyItemVersionRepo;
pub use journey_repo::JourneyRepo;
pub use journey_structure_repo::JourneyStructureRepo;
pub use journey_structure_version_repo::JourneyStructureVersionRepo;
pub use journey_version_repo::JourneyVersionRepo;

//! Entity models and DTOs for the journey schema.
//!
//! Each submodule covers one record-store collection:
//! - A `Serialize + Deserialize` entity struct matching the stored record
//! - A `Deserialize` create DTO where the API creates rows directly
//! - Constructors that allocate fresh ids and timestamps

pub mod journey;
pub mod journey_item;
pub mod journey_item_version;
pub mod journey_structure;
pub mod journey_structure_version;
pub mod journey_version;

//! Data-access layer for the Panelcast journey service.
//!
//! Entity models and repositories wrap the generic record store; the
//! [`copy`] module implements journey duplication (the copy engine).

pub mod copy;
pub mod models;
pub(crate) mod records;
pub mod repositories;

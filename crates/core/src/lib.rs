//! Shared domain types, errors, and validation for the Panelcast journey
//! service.

pub mod error;
pub mod journey;
pub mod types;

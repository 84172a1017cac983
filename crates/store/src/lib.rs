//! Record-store abstraction for the Panelcast journey service.
//!
//! The hosted database backend is consumed through the generic
//! [`RecordStore`] capability: fetch-by-id, filtered fetch-many, batch
//! upsert, and existence checks over JSON records. Two implementations are
//! provided — [`MemoryStore`] for tests and local development, and
//! [`HttpStore`] for a hosted record-store service.

pub mod error;
pub mod filter;
pub mod http;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use filter::Filter;
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use traits::RecordStore;

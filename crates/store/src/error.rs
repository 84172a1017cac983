/// Errors surfaced by [`RecordStore`](crate::RecordStore) implementations
/// and the serde boundary above them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record failed to serialize or deserialize.
    #[error("Record serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backing service could not be reached, or returned a non-2xx
    /// status.
    #[error("Store transport error: {0}")]
    Transport(String),

    /// A record is structurally invalid (e.g. missing its `id` field).
    #[error("Invalid record in collection `{collection}`: {reason}")]
    InvalidRecord { collection: String, reason: String },
}

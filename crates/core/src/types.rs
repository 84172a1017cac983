/// All record identifiers are opaque UUIDs allocated by the application,
/// never by the store.
pub type Id = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh identifier.
pub fn new_id() -> Id {
    uuid::Uuid::now_v7()
}

/// Current UTC timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

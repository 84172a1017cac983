//! Serde bridge between typed models and store records.

use panelcast_store::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Encode a model as a store record.
pub(crate) fn encode<T: Serialize>(model: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(model)?)
}

/// Encode a batch of models.
pub(crate) fn encode_all<T: Serialize>(models: &[T]) -> Result<Vec<Value>, StoreError> {
    models.iter().map(encode).collect()
}

/// Decode a store record into a model.
pub(crate) fn decode<T: DeserializeOwned>(record: Value) -> Result<T, StoreError> {
    Ok(serde_json::from_value(record)?)
}

/// Decode a batch of store records.
pub(crate) fn decode_all<T: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>, StoreError> {
    records.into_iter().map(decode).collect()
}

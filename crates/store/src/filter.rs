//! Equality filters for record queries.

use panelcast_core::types::Id;
use serde_json::Value;

/// A conjunction of `field = value` constraints.
///
/// Every query the service issues is a keyed lookup, so equality is the
/// whole filter language; richer predicates stay out of the interface.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `field = value` clause.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    /// Add a `field = id` clause. Identifiers are stored in their
    /// hyphenated string form.
    pub fn eq_id(self, field: impl Into<String>, id: Id) -> Self {
        self.eq(field, id.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clauses in insertion order.
    pub fn clauses(&self) -> &[(String, Value)] {
        &self.clauses
    }

    /// True when every clause matches the given record.
    pub fn matches(&self, record: &Value) -> bool {
        self.clauses
            .iter()
            .all(|(field, expected)| record.get(field) == Some(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelcast_core::types::new_id;
    use serde_json::json;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::new().matches(&json!({"anything": 1})));
    }

    #[test]
    fn single_clause_matches_equal_field() {
        let filter = Filter::new().eq("kind", "module");
        assert!(filter.matches(&json!({"kind": "module"})));
        assert!(!filter.matches(&json!({"kind": "section"})));
    }

    #[test]
    fn missing_field_does_not_match() {
        let filter = Filter::new().eq("kind", "module");
        assert!(!filter.matches(&json!({"other": "module"})));
    }

    #[test]
    fn clauses_are_a_conjunction() {
        let filter = Filter::new().eq("a", 1).eq("b", 2);
        assert!(filter.matches(&json!({"a": 1, "b": 2, "c": 3})));
        assert!(!filter.matches(&json!({"a": 1, "b": 9})));
    }

    #[test]
    fn eq_id_matches_serialized_uuid() {
        let id = new_id();
        let filter = Filter::new().eq_id("journey_id", id);
        let record = json!({"journey_id": id.to_string()});
        assert!(filter.matches(&record));
    }

    #[test]
    fn bool_values_match() {
        let filter = Filter::new().eq("disabled", false);
        assert!(filter.matches(&json!({"disabled": false})));
        assert!(!filter.matches(&json!({"disabled": true})));
    }
}

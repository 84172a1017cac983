//! Journey domain constants, item typing, and validation.
//!
//! Provides the closed set of item kinds a journey can contain plus the
//! name validation applied when journeys and versions are created or
//! forked.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum allowed length for a journey version name.
pub const MAX_VERSION_NAME_LENGTH: usize = 200;

/// Maximum allowed length for a journey version description.
pub const MAX_VERSION_DESCRIPTION_LENGTH: usize = 2000;

// ---------------------------------------------------------------------------
// Item typing
// ---------------------------------------------------------------------------

/// Kind of content node a journey item version represents.
///
/// Closed set; unknown kinds in stored data are a deserialization error
/// rather than a silently accepted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyItemType {
    Journey,
    Section,
    Module,
    Action,
}

impl JourneyItemType {
    /// Stable string form, matching the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyItemType::Journey => "journey",
            JourneyItemType::Section => "section",
            JourneyItemType::Module => "module",
            JourneyItemType::Action => "action",
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a journey version name: non-empty, trimmed, within
/// [`MAX_VERSION_NAME_LENGTH`].
pub fn validate_version_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Version name must not be empty".to_string(),
        ));
    }
    if trimmed.len() != name.len() {
        return Err(CoreError::Validation(
            "Version name must not have leading or trailing whitespace".to_string(),
        ));
    }
    if name.len() > MAX_VERSION_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Version name must not exceed {MAX_VERSION_NAME_LENGTH} characters, got {}",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a journey version description length.
pub fn validate_version_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_VERSION_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Version description must not exceed {MAX_VERSION_DESCRIPTION_LENGTH} characters, \
             got {}",
            description.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- JourneyItemType ----------------------------------------------------

    #[test]
    fn item_type_serializes_lowercase() {
        let json = serde_json::to_value(JourneyItemType::Section).unwrap();
        assert_eq!(json, serde_json::json!("section"));
    }

    #[test]
    fn item_type_round_trips() {
        for kind in [
            JourneyItemType::Journey,
            JourneyItemType::Section,
            JourneyItemType::Module,
            JourneyItemType::Action,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            let back: JourneyItemType = serde_json::from_value(json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn unknown_item_type_is_rejected() {
        let result: Result<JourneyItemType, _> =
            serde_json::from_value(serde_json::json!("episode"));
        assert!(result.is_err());
    }

    #[test]
    fn as_str_matches_serialized_form() {
        let json = serde_json::to_value(JourneyItemType::Action).unwrap();
        assert_eq!(json.as_str().unwrap(), JourneyItemType::Action.as_str());
    }

    // -- validate_version_name ----------------------------------------------

    #[test]
    fn valid_short_name() {
        assert!(validate_version_name("v1").is_ok());
    }

    #[test]
    fn valid_name_at_max_length() {
        let name = "a".repeat(MAX_VERSION_NAME_LENGTH);
        assert!(validate_version_name(&name).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(validate_version_name("").is_err());
    }

    #[test]
    fn rejects_whitespace_only_name() {
        assert!(validate_version_name("   ").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(validate_version_name(" draft").is_err());
        assert!(validate_version_name("draft ").is_err());
    }

    #[test]
    fn rejects_name_exceeding_max() {
        let name = "a".repeat(MAX_VERSION_NAME_LENGTH + 1);
        assert!(validate_version_name(&name).is_err());
    }

    // -- validate_version_description ----------------------------------------

    #[test]
    fn empty_description_is_valid() {
        assert!(validate_version_description("").is_ok());
    }

    #[test]
    fn rejects_description_exceeding_max() {
        let description = "a".repeat(MAX_VERSION_DESCRIPTION_LENGTH + 1);
        assert!(validate_version_description(&description).is_err());
    }
}

//! Typed errors for the pluralizer crate
//!
//! The inflection engine itself never fails: every `&str` has a plural and a
//! singular form. Errors only come from validating a
//! [`NamingConfig`](crate::config::NamingConfig).

use thiserror::Error;

/// Semantic errors in a naming configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An entity entry has an empty singular name
    #[error("Entity at index {index} has an empty singular name")]
    EmptySingular { index: usize },

    /// An explicit plural override is empty
    #[error("Entity '{singular}' has an empty plural override")]
    EmptyPlural { singular: String },

    /// Two entities resolve to the same plural name
    #[error("Entities '{first}' and '{second}' both resolve to plural '{plural}'")]
    DuplicatePlural {
        plural: String,
        first: String,
        second: String,
    },
}

impl ConfigError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::EmptySingular { .. } => "EMPTY_SINGULAR",
            ConfigError::EmptyPlural { .. } => "EMPTY_PLURAL",
            ConfigError::DuplicatePlural { .. } => "DUPLICATE_PLURAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::DuplicatePlural {
            plural: "people".to_string(),
            first: "person".to_string(),
            second: "people".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Entities 'person' and 'people' both resolve to plural 'people'"
        );
        assert_eq!(err.error_code(), "DUPLICATE_PLURAL");
    }

    #[test]
    fn test_empty_singular_display() {
        let err = ConfigError::EmptySingular { index: 2 };
        assert_eq!(err.to_string(), "Entity at index 2 has an empty singular name");
        assert_eq!(err.error_code(), "EMPTY_SINGULAR");
    }
}

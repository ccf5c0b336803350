//! Naming overrides: entity names and their collection names
//!
//! Collection names are derived with the [`Pluralizer`] unless an entity
//! carries an explicit `plural` override. The types derive serde traits so a
//! host application can embed them in its own configuration.

use crate::core::error::ConfigError;
use crate::core::pluralize::Pluralizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for an entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Singular form (e.g., "user", "company")
    pub singular: String,

    /// Plural override; derived from `singular` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}

impl EntityConfig {
    pub fn new(singular: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: None,
        }
    }

    pub fn with_plural(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: Some(plural.into()),
        }
    }

    /// The configured plural, or the derived one
    pub fn resolved_plural(&self) -> String {
        match &self.plural {
            Some(plural) => plural.clone(),
            None => Pluralizer::pluralize(&self.singular),
        }
    }
}

/// Set of entity names with optional plural overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// List of entity configurations
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

impl NamingConfig {
    pub fn new(entities: Vec<EntityConfig>) -> Self {
        Self { entities }
    }

    /// Merge several configurations into one
    ///
    /// Entities keep the position where their singular name first appears;
    /// a later entry for the same name replaces the earlier one.
    pub fn merge(configs: Vec<NamingConfig>) -> Self {
        let mut entities: Vec<EntityConfig> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for entity in configs.into_iter().flat_map(|config| config.entities) {
            match positions.get(&entity.singular) {
                Some(&index) => {
                    tracing::debug!(singular = %entity.singular, "entity overridden during merge");
                    entities[index] = entity;
                }
                None => {
                    positions.insert(entity.singular.clone(), entities.len());
                    entities.push(entity);
                }
            }
        }

        Self { entities }
    }

    /// Check that every entity resolves to a distinct, non-empty plural
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut owners: HashMap<String, &str> = HashMap::new();

        for (index, entity) in self.entities.iter().enumerate() {
            if entity.singular.trim().is_empty() {
                return Err(ConfigError::EmptySingular { index });
            }
            if entity.plural.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err(ConfigError::EmptyPlural {
                    singular: entity.singular.clone(),
                });
            }

            let plural = entity.resolved_plural();
            if let Some(first) = owners.insert(plural.to_lowercase(), &entity.singular) {
                return Err(ConfigError::DuplicatePlural {
                    plural,
                    first: first.to_string(),
                    second: entity.singular.clone(),
                });
            }
        }

        Ok(())
    }

    /// Find the entry for a singular name
    pub fn find_entity(&self, singular: &str) -> Option<&EntityConfig> {
        self.entities.iter().find(|e| e.singular == singular)
    }

    /// Collection name for an entity
    ///
    /// Uses the configured override when there is one.
    pub fn plural_of(&self, singular: &str) -> String {
        let plural = match self.find_entity(singular) {
            Some(entity) => entity.resolved_plural(),
            None => Pluralizer::pluralize(singular),
        };
        tracing::debug!(singular, plural = %plural, "resolved collection name");
        plural
    }

    /// Entity name for a collection name
    ///
    /// Configured plurals are matched case-insensitively before falling back
    /// to the pluralizer.
    pub fn singular_of(&self, plural: &str) -> String {
        let configured = self
            .entities
            .iter()
            .find(|e| e.resolved_plural().eq_ignore_ascii_case(plural));

        let singular = match configured {
            Some(entity) => entity.singular.clone(),
            None => Pluralizer::singularize(plural),
        };
        tracing::debug!(plural, singular = %singular, "resolved entity name");
        singular
    }

    /// Every entity with its plural filled in, in configuration order
    pub fn resolved(&self) -> Vec<(String, String)> {
        self.entities
            .iter()
            .map(|e| (e.singular.clone(), e.resolved_plural()))
            .collect()
    }
}

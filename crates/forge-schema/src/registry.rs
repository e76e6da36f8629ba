//! Central registry of persisted entity schemas.
//!
//! The `SchemaRegistry` builds JSON Schemas from `forge-core` entity types at
//! construction time using [`schemars::schema_for!`] and validates values with
//! `jsonschema`.

use std::collections::HashMap;

use forge_core::entities::{AutomationResult, Entity, Idea, Risk, Solution, Timeline};
use schemars::schema_for;

use crate::error::SchemaError;

/// JSON Schemas of every entity Forge persists, keyed by
/// [`Domain::schema_name`](forge_core::enums::Domain::schema_name).
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $ty:ty) => {
        $map.insert(
            <$ty as Entity>::DOMAIN.schema_name(),
            schema_for!($ty).to_value(),
        );
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, AutomationResult);
        register!(schemas, Idea);
        register!(schemas, Risk);
        register!(schemas, Timeline);
        register!(schemas, Solution);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate a JSON value against the schema of entity type `T`.
    ///
    /// # Errors
    ///
    /// See [`Self::validate`].
    pub fn validate_entity<T: Entity>(
        &self,
        instance: &serde_json::Value,
    ) -> Result<(), SchemaError> {
        self.validate(T::DOMAIN.schema_name(), instance)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

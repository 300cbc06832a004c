//! Central schema registry for all EstrichManager value types.
//!
//! The `SchemaRegistry` builds JSON Schemas from estrich-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas exposed by the `estrich` tooling.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).unwrap_or_default(),
        );
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all value, input, and response
    /// schemas from estrich-core.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Value types (6) ---
        register!(schemas, "binder_type", estrich_core::BinderType);
        register!(schemas, "test_type", estrich_core::TestType);
        register!(schemas, "conformity_verdict", estrich_core::ConformityVerdict);
        register!(schemas, "statistics", estrich_core::Statistics);
        register!(schemas, "series_report", estrich_core::SeriesReport);
        register!(
            schemas,
            "parsed_designation",
            estrich_core::designation::ParsedDesignation
        );

        // --- Inputs (2) ---
        register!(schemas, "designation_input", estrich_core::DesignationInput);
        register!(
            schemas,
            "conformity_record",
            estrich_core::responses::ConformityRecord
        );

        // --- CLI response types (7) ---
        register!(
            schemas,
            "classification_response",
            estrich_core::responses::ClassificationResponse
        );
        register!(
            schemas,
            "wear_classes_response",
            estrich_core::responses::WearClassesResponse
        );
        register!(
            schemas,
            "designation_response",
            estrich_core::responses::DesignationResponse
        );
        register!(
            schemas,
            "validation_response",
            estrich_core::responses::ValidationResponse
        );
        register!(
            schemas,
            "requirements_response",
            estrich_core::responses::RequirementsResponse
        );
        register!(schemas, "batch_entry", estrich_core::responses::BatchEntry);
        register!(schemas, "batch_report", estrich_core::responses::BatchReport);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Compile a named schema once for repeated validation.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::Compile` if the generated schema is rejected by
    /// `jsonschema`.
    pub fn compile(&self, name: &str) -> Result<CompiledSchema, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(CompiledSchema { validator })
    }

    /// Validate a JSON value against a named schema.
    ///
    /// Compiles the schema on every call; use [`Self::compile`] when checking
    /// many instances.
    ///
    /// # Errors
    ///
    /// See [`Self::compile`] and [`CompiledSchema::validate`].
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        self.compile(name)?.validate(instance)
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

/// A registered schema compiled into a reusable validator.
pub struct CompiledSchema {
    validator: jsonschema::Validator,
}

impl CompiledSchema {
    /// Check one instance, collecting every violated rule.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` with one message per error.
    pub fn validate(&self, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

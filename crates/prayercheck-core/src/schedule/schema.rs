//! JSON Schema validation for extracted schedules.
//!
//! The extraction step emits loosely-typed JSON. Validating it against
//! `schema/schedule.schema.json` before deserializing gives the caller every
//! structural problem at once, with instance paths, instead of the first
//! serde error.

use std::sync::OnceLock;
use thiserror::Error;

/// Embedded schedule schema (loaded at compile time).
const SCHEDULE_SCHEMA_JSON: &str = include_str!("../../../../schema/schedule.schema.json");

/// Compiled JSON Schema validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

/// Errors from schema loading.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to load schema: {0}")]
    LoadError(String),
}

/// The compiled schedule validator, built on first use.
///
/// A broken embedded schema is remembered, so every later call reports the
/// same load error instead of recompiling.
fn get_validator() -> Result<&'static jsonschema::Validator, SchemaError> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = match serde_json::from_str(SCHEDULE_SCHEMA_JSON) {
            Ok(v) => v,
            Err(e) => return Err(format!("Invalid schema JSON: {}", e)),
        };

        jsonschema::options()
            .build(&schema_value)
            .map_err(|e| format!("Failed to compile schema: {}", e))
    });

    match result {
        Ok(v) => Ok(v),
        Err(e) => Err(SchemaError::LoadError(e.clone())),
    }
}

/// Validate a raw schedule document.
///
/// Returns every violation as `"<message> at <instance path>"`.
pub fn validate_schedule_schema(document: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e.to_string()])?;

    let violations: Vec<String> = validator
        .iter_errors(document)
        .map(|violation| format!("{} at {}", violation, violation.instance_path))
        .collect();

    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "Schedule failed schema validation");
        return Err(violations);
    }
    Ok(())
}

use jsonschema::{validator_for, Validator};
use serde_json::Value;

/// JSON Schema (draft 2020-12) of one response line written by the listener.
pub const RESPONSE_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "title": "JSON-RPC 2.0 response line",
  "type": "object",
  "required": ["jsonrpc", "id"],
  "additionalProperties": false,
  "properties": {
    "jsonrpc": { "type": "string" },
    "id": { "type": ["string", "integer"] },
    "result": true,
    "error": {
      "type": "object",
      "required": ["code", "message"],
      "additionalProperties": false,
      "properties": {
        "code": { "type": "integer" },
        "message": { "type": "string", "minLength": 1 }
      }
    }
  },
  "oneOf": [
    { "required": ["result"] },
    { "required": ["error"] }
  ]
}"#;

/// Failure to validate wire output against a JSON Schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("schema does not compile: {0}")]
    Compile(String),
    #[error("does not match schema: {0}")]
    Mismatch(String),
}

/// A compiled schema that checks JSON values or raw lines.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    pub fn new(schema: &Value) -> Result<Self, SchemaValidationError> {
        let validator =
            validator_for(schema).map_err(|e| SchemaValidationError::Compile(e.to_string()))?;
        Ok(Self { validator })
    }

    /// The validator for [`RESPONSE_SCHEMA`].
    pub fn response() -> Result<Self, SchemaValidationError> {
        Self::new(&serde_json::from_str(RESPONSE_SCHEMA)?)
    }

    pub fn validate(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        if self.validator.is_valid(instance) {
            return Ok(());
        }

        let msg = self
            .validator
            .iter_errors(instance)
            .take(5)
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(SchemaValidationError::Mismatch(msg))
    }

    pub fn validate_line(&self, line: &str) -> Result<(), SchemaValidationError> {
        self.validate(&serde_json::from_str(line.trim_end())?)
    }
}

/// Validate a JSON document against a JSON Schema document (draft 2020-12).
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<(), SchemaValidationError> {
    SchemaValidator::new(&serde_json::from_str(schema_str)?)?.validate_line(instance_str)
}

/// Validate one response line against [`RESPONSE_SCHEMA`].
pub fn validate_response_line(line: &str) -> Result<(), SchemaValidationError> {
    SchemaValidator::response()?.validate_line(line)
}

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::SeedError;

/// The base credential schema: the full universe of recognized credential
/// fields with their default values. Loaded once at startup, never mutated;
/// every record starts from a deep copy of these fields.
#[derive(Debug, Clone)]
pub struct BaseSchema {
    fields: Map<String, Value>,
}

impl BaseSchema {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SeedError::SchemaLoad(format!("{}: {}", path.display(), e)))?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| SeedError::SchemaLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SeedError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(SeedError::SchemaLoad(
                "top-level value is not a JSON object".to_string(),
            )),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Deep copy of the base `metadata` mapping; empty when the schema
    /// carries none.
    pub fn metadata(&self) -> Map<String, Value> {
        match self.fields.get("metadata") {
            Some(Value::Object(m)) => m.clone(),
            _ => Map::new(),
        }
    }
}

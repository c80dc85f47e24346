//! Schema document handling.
//! The schema enumerates every template parameter with its default, validation
//! pattern, position in the collection order and an optional `skip_prompt_if`
//! condition expressed as a JSON Schema fragment over the answers collected so far.

use crate::constants::SCHEMA_FILE;
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Value type of a schema property. Every parameter of this generator is a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "string")]
    String,
}

/// A single template parameter as declared in the schema document.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default: String,
    pub pattern: String,
    #[serde(default)]
    pub pattern_match_failure_message: Option<String>,
    pub order: u32,
    #[serde(default)]
    pub skip_prompt_if: Option<serde_json::Value>,
}

impl Property {
    /// Returns true when this property's skip condition holds for `answers`.
    ///
    /// # Arguments
    /// * `answers` - JSON object holding the values collected before this property
    ///
    /// # Errors
    /// * `Error::SchemaError` if the condition is not a valid JSON Schema
    pub fn is_skipped(&self, answers: &serde_json::Value) -> Result<bool> {
        match &self.skip_prompt_if {
            Some(condition) => {
                let validator = jsonschema::validator_for(condition).map_err(|e| {
                    Error::SchemaError(format!("invalid skip_prompt_if condition: {e}"))
                })?;
                Ok(validator.is_valid(answers))
            }
            None => Ok(false),
        }
    }
}

/// The parsed schema document.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub welcome_message: Option<String>,
    #[serde(default)]
    pub success_message: Option<String>,
    pub properties: IndexMap<String, Property>,
}

impl Schema {
    /// Parses a schema document, orders its properties and checks its consistency.
    ///
    /// # Errors
    /// * `Error::SchemaError` if the document is malformed, two properties share an
    ///   order, a pattern does not compile, or a skip condition references a key that
    ///   is unknown or collected later.
    pub fn parse(content: &str) -> Result<Self> {
        let mut schema: Schema = serde_json::from_str(content)
            .map_err(|e| Error::SchemaError(format!("invalid schema document: {e}")))?;
        schema.properties.sort_by(|_, a, _, b| a.order.cmp(&b.order));
        schema.check()?;
        Ok(schema)
    }

    /// Parameter names in collection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    fn check(&self) -> Result<()> {
        let mut seen_orders = IndexSet::new();
        let mut earlier: IndexSet<&str> = IndexSet::new();

        for (key, property) in &self.properties {
            if !seen_orders.insert(property.order) {
                return Err(Error::SchemaError(format!(
                    "property '{key}' reuses order {}",
                    property.order
                )));
            }

            Regex::new(&property.pattern).map_err(|e| {
                Error::SchemaError(format!("property '{key}' has an invalid pattern: {e}"))
            })?;

            if let Some(condition) = &property.skip_prompt_if {
                jsonschema::validator_for(condition).map_err(|e| {
                    Error::SchemaError(format!("property '{key}' has an invalid skip_prompt_if: {e}"))
                })?;

                let mut referenced = Vec::new();
                referenced_keys(condition, &mut referenced);
                for dependency in referenced {
                    if !earlier.contains(dependency.as_str()) {
                        return Err(Error::SchemaError(format!(
                            "skip_prompt_if of '{key}' references '{dependency}', which is not collected before it"
                        )));
                    }
                }
            }

            earlier.insert(key);
        }
        Ok(())
    }
}

/// Collects the parameter names a JSON Schema condition tests, i.e. the keys of
/// every `properties` object at any depth.
fn referenced_keys(condition: &serde_json::Value, keys: &mut Vec<String>) {
    match condition {
        serde_json::Value::Object(obj) => {
            for (name, value) in obj {
                if name == "properties" {
                    if let Some(properties) = value.as_object() {
                        keys.extend(properties.keys().cloned());
                    }
                }
                referenced_keys(value, keys);
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                referenced_keys(item, keys);
            }
        }
        _ => {}
    }
}

/// Loads the schema document from a template directory.
///
/// # Arguments
/// * `template_root` - Directory containing `databricks_template_schema.json`
///
/// # Errors
/// * `Error::SchemaError` if the document is missing or inconsistent
pub fn load_schema<P: AsRef<Path>>(template_root: P) -> Result<Schema> {
    let schema_path = template_root.as_ref().join(SCHEMA_FILE);
    if !schema_path.is_file() {
        return Err(Error::SchemaError(format!(
            "no schema document found at {}",
            schema_path.display()
        )));
    }
    debug!("Loading schema from {}", schema_path.display());
    let content = std::fs::read_to_string(&schema_path)?;
    Schema::parse(&content)
}

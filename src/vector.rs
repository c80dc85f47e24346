//! The Configuration Vector: the validated, immutable set of parameter values that
//! drives generation.

use crate::error::{Error, Result};
use crate::schema::Schema;
use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigVector {
    values: IndexMap<String, String>,
    skipped: IndexSet<String>,
}

impl ConfigVector {
    /// Collects the vector in schema order.
    ///
    /// For each property the `skip_prompt_if` condition is evaluated against the
    /// values collected so far. Skipped properties take their default and ignore any
    /// preloaded answer; the others take the preloaded answer or fall back to the
    /// default. The result is validated before it is returned.
    ///
    /// # Errors
    /// * `Error::ValidationError` for the first value that fails its pattern
    /// * `Error::SchemaError` if a skip condition cannot be evaluated
    pub fn collect(schema: &Schema, preloaded: &IndexMap<String, String>) -> Result<Self> {
        let mut answers = serde_json::Map::new();
        let mut values = IndexMap::new();
        let mut skipped = IndexSet::new();

        for (key, property) in &schema.properties {
            let current_context = serde_json::Value::Object(answers.clone());

            let value = if property.is_skipped(&current_context)? {
                if preloaded.contains_key(key) {
                    debug!("Ignoring preloaded answer for skipped parameter '{key}'");
                }
                skipped.insert(key.clone());
                property.default.clone()
            } else {
                preloaded.get(key).cloned().unwrap_or_else(|| property.default.clone())
            };

            answers.insert(key.clone(), serde_json::Value::String(value.clone()));
            values.insert(key.clone(), value);
        }

        for key in preloaded.keys() {
            if !schema.properties.contains_key(key) {
                warn!("Ignoring unknown parameter '{key}'");
            }
        }

        let vector = Self { values, skipped };
        vector.validate(schema)?;
        Ok(vector)
    }

    /// Checks every collected value against its declared pattern. Skipped
    /// parameters are not checked since nothing downstream treats their default as
    /// a user choice.
    pub fn validate(&self, schema: &Schema) -> Result<()> {
        for (key, property) in &schema.properties {
            if self.skipped.contains(key) {
                continue;
            }
            let value = self.get(key)?;
            let pattern = Regex::new(&property.pattern)
                .map_err(|e| Error::SchemaError(format!("property '{key}': {e}")))?;
            if !pattern.is_match(value) {
                return Err(Error::ValidationError {
                    key: key.clone(),
                    value: value.to_string(),
                    pattern: property.pattern.clone(),
                    hint: property.pattern_match_failure_message.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the value of `key`.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the key is not part of the vector
    pub fn get(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::TemplateError(format!("undefined parameter '{key}'")))
    }

    /// Returns the value of `key` unless the parameter was skipped.
    pub fn get_active(&self, key: &str) -> Result<Option<&str>> {
        if self.is_skipped(key) {
            Ok(None)
        } else {
            self.get(key).map(Some)
        }
    }

    pub fn is_skipped(&self, key: &str) -> bool {
        self.skipped.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values(&self) -> &IndexMap<String, String> {
        &self.values
    }
}

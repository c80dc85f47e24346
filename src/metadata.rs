//! Traceability record persisted next to the generated project.
use crate::error::{Error, Result};
use crate::vector::ConfigVector;
use indexmap::IndexMap;
use serde::Serialize;

/// Mirrors the Configuration Vector, one field per parameter in schema order,
/// followed by the generator version.
#[derive(Debug, Serialize)]
pub struct BundleInitConfig<'a> {
    #[serde(flatten)]
    pub values: &'a IndexMap<String, String>,
    pub generator_version: &'static str,
}

impl<'a> BundleInitConfig<'a> {
    pub fn new(vector: &'a ConfigVector) -> Self {
        Self { values: vector.values(), generator_version: env!("CARGO_PKG_VERSION") }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::TemplateError(format!("cannot serialize metadata: {e}")))?;
        json.push('\n');
        Ok(json)
    }
}

//! Configuration Resolver.
//! Maps a validated Configuration Vector and a template corpus to a [`FileTree`].
//! Resolution is a pure, single pass over the corpus: nothing is written until the
//! caller decides to write the returned tree.

use crate::constants::{DATABRICKS_CLI_VERSION, METADATA_FILE};
use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::ignore::collect_skip_set;
use crate::metadata::BundleInitConfig;
use crate::options::ProjectOptions;
use crate::processor::Processor;
use crate::renderer::TemplateRenderer;
use crate::tree::FileTree;
use crate::vector::ConfigVector;
use log::{debug, info};
use serde_json::json;

/// Builds the render context: every parameter of the vector plus the values
/// derived from it through the lookup tables.
///
/// # Errors
/// * `Error::SchemaError` if a parameter name collides with a derived value
pub fn build_context(vector: &ConfigVector, options: &ProjectOptions) -> Result<serde_json::Value> {
    let mut context = serde_json::Map::new();
    for (key, value) in vector.iter() {
        context.insert(key.to_string(), json!(value));
    }

    let derived = [
        ("targets", json!(options.targets())),
        ("node_type_id", json!(options.effective_cloud().node_type_id())),
        ("ci_auth_variables", json!(options.ci_auth_variables())),
        ("databricks_cli_version", json!(DATABRICKS_CLI_VERSION)),
    ];
    for (key, value) in derived {
        if context.insert(key.to_string(), value).is_some() {
            return Err(Error::SchemaError(format!(
                "parameter '{key}' collides with a derived template value"
            )));
        }
    }

    Ok(serde_json::Value::Object(context))
}

pub struct Resolver<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Resolver<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Resolves the corpus against the vector.
    ///
    /// # Returns
    /// * `Result<FileTree>` - Every emitted file plus the metadata record at
    ///   `<project_name>/bundle_init_config.json`
    ///
    /// # Errors
    /// Any error aborts the whole resolution; there is no partial tree.
    pub fn resolve(&self, vector: &ConfigVector, corpus: &Corpus) -> Result<FileTree> {
        let options = ProjectOptions::try_from(vector)?;
        let context = build_context(vector, &options)?;
        let skip_set = collect_skip_set(self.renderer, corpus.preamble(), &context)?;
        let processor = Processor::new(self.renderer, &context, &skip_set);

        let mut tree = FileTree::default();
        for entry in corpus.entries() {
            if let Some(file) = processor.process(entry)? {
                tree.insert(file.path, file.content)?;
            }
        }

        let record = BundleInitConfig::new(vector).to_json()?;
        tree.insert(format!("{}/{METADATA_FILE}", options.project_name), record.into_bytes())?;

        info!(
            "Resolved {} files for targets {:?}",
            tree.paths().count(),
            options.targets().iter().map(|t| t.as_str()).collect::<Vec<_>>()
        );
        Ok(tree)
    }

    /// Renders a schema message (welcome or success) against the vector.
    pub fn render_message(&self, message: &str, vector: &ConfigVector) -> Result<String> {
        let options = ProjectOptions::try_from(vector)?;
        let context = build_context(vector, &options)?;
        debug!("Rendering schema message");
        self.renderer.render(message, &context)
    }
}

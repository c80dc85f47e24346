//! Template renderer and rendering functionality for bundlegen.
//! Renders corpus paths and contents with MiniJinja.
use crate::error::{Error, Result};
use cruet::Inflector;
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use std::sync::{Arc, Mutex};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders the corpus preamble and returns every pattern passed to `skip()`.
    fn collect_skips(&self, template: &str, context: &serde_json::Value) -> Result<Vec<String>>;
}

/// MiniJinja-based template rendering engine.
///
/// Undefined variables are errors, so a placeholder or predicate naming a parameter
/// that does not exist fails the render instead of producing an empty string.
/// Block tags swallow their own line so that omitted fragments leave no blank lines.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("kebab_case", |value: String| value.to_kebab_case());
        env.add_filter("title_case", |value: String| value.to_title_case());
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }

    fn collect_skips(&self, template: &str, context: &serde_json::Value) -> Result<Vec<String>> {
        let skips = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&skips);

        let mut env = self.env.clone();
        env.add_function("skip", move |pattern: String| -> std::result::Result<String, minijinja::Error> {
            sink.lock()
                .map_err(|_| minijinja::Error::new(ErrorKind::InvalidOperation, "skip list is poisoned"))?
                .push(pattern);
            Ok(String::new())
        });
        env.render_str(template, context).map_err(Error::MinijinjaError)?;

        let patterns = skips
            .lock()
            .map_err(|_| Error::TemplateError("skip list is poisoned".to_string()))?
            .clone();
        Ok(patterns)
    }
}

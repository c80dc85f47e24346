//! Per-entry template processing.
//! Every corpus entry has its path rendered first; an entry whose rendered path is
//! empty, malformed or skipped is omitted. Entries ending in `.tmpl` have their
//! content rendered and the suffix stripped, all others are copied verbatim. An
//! output path that would still end in `.tmpl` is omitted.
use crate::constants::TEMPLATE_SUFFIX;
use crate::corpus::CorpusEntry;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use globset::GlobSet;
use log::debug;
use std::path::Path;

/// A rendered output file ready to be added to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Relative path for the output file.
    pub path: String,
    /// Rendered or copied content.
    pub content: Vec<u8>,
}

/// Returns true for files whose content must be rendered. A bare `.tmpl` has no
/// output name and is not a template.
pub fn is_template_file(path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name.len() > TEMPLATE_SUFFIX.len() && file_name.ends_with(TEMPLATE_SUFFIX)
}

/// Strips the template suffix from a rendered path.
///
/// # Returns
/// * `(String, bool)` - Output path and whether the content must be rendered
pub fn resolve_target_path(rendered_path: &str) -> (String, bool) {
    if is_template_file(rendered_path) {
        let target = &rendered_path[..rendered_path.len() - TEMPLATE_SUFFIX.len()];
        (target.to_string(), true)
    } else {
        (rendered_path.to_string(), false)
    }
}

/// A rendered path is usable when it is relative and every segment is non-empty;
/// a conditional that evaluates to nothing produces an empty segment.
pub fn is_rendered_path_valid(rendered_path: &str) -> bool {
    !rendered_path.trim().is_empty()
        && !Path::new(rendered_path).is_absolute()
        && rendered_path.split('/').all(|segment| !segment.trim().is_empty() && segment != "..")
}

/// Finds template syntax left in rendered content. `${{` is GitHub Actions
/// expression syntax and is not a placeholder.
///
/// # Returns
/// * `Option<String>` - A short excerpt around the first leftover token
pub fn find_unresolved_placeholder(content: &str) -> Option<String> {
    let bytes = content.as_bytes();
    for (index, window) in bytes.windows(2).enumerate() {
        let leftover = match window {
            b"{%" | b"{#" => true,
            b"{{" => index == 0 || bytes[index - 1] != b'$',
            _ => false,
        };
        if leftover {
            let snippet: String = content[index..].chars().take(24).collect();
            return Some(snippet);
        }
    }
    None
}

pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: &'a serde_json::Value,
    skip_set: &'a GlobSet,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        context: &'a serde_json::Value,
        skip_set: &'a GlobSet,
    ) -> Self {
        Self { renderer, context, skip_set }
    }

    /// Resolves a single corpus entry.
    ///
    /// # Returns
    /// * `Result<Option<RenderedFile>>` - `None` when the entry is omitted
    ///
    /// # Errors
    /// * `Error::ProcessError` if the path or content fails to render or the content
    ///   is not UTF-8
    /// * `Error::UnresolvedPlaceholderError` if rendered content still holds
    ///   template syntax
    pub fn process(&self, entry: &CorpusEntry) -> Result<Option<RenderedFile>> {
        let process_error = |e: String| Error::ProcessError { source_path: entry.path.clone(), e };

        let rendered_path = self
            .renderer
            .render(&entry.path, self.context)
            .map_err(|e| process_error(e.to_string()))?;

        if !is_rendered_path_valid(&rendered_path) {
            debug!("Skipping '{}': rendered path '{rendered_path}' is empty", entry.path);
            return Ok(None);
        }

        let (target, is_template) = resolve_target_path(&rendered_path);

        if target.ends_with(TEMPLATE_SUFFIX) {
            debug!("Skipping '{}': '{target}' has no output name", entry.path);
            return Ok(None);
        }

        if self.skip_set.is_match(&target) {
            debug!("Skipping '{target}'");
            return Ok(None);
        }

        let content = if is_template {
            let source = std::str::from_utf8(&entry.content)
                .map_err(|e| process_error(format!("template is not UTF-8: {e}")))?;
            let rendered = self
                .renderer
                .render(source, self.context)
                .map_err(|e| process_error(e.to_string()))?;
            if let Some(snippet) = find_unresolved_placeholder(&rendered) {
                return Err(Error::UnresolvedPlaceholderError { path: target, snippet });
            }
            debug!("Rendered '{target}'");
            rendered.into_bytes()
        } else {
            debug!("Copied '{target}'");
            entry.content.clone()
        };

        Ok(Some(RenderedFile { path: target, content }))
    }
}

//! Path skipping for the template corpus.
//! Combines a fixed set of ignore patterns with the `skip()` calls made by the corpus
//! preamble, so whole files or subtrees can be omitted depending on the vector.

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Patterns that never belong in a generated project
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = ["**/.DS_Store", "**/__pycache__/**", "**/*.pyc"];

fn add_pattern(builder: &mut GlobSetBuilder, pattern: &str) -> Result<()> {
    let glob = Glob::new(pattern)
        .map_err(|e| Error::TemplateError(format!("invalid skip pattern '{pattern}': {e}")))?;
    builder.add(glob);
    Ok(())
}

/// Builds the glob set used to omit rendered paths.
///
/// # Arguments
/// * `skips` - Rendered patterns collected from the preamble; each one also covers
///   everything below it, so skipping a directory removes its whole subtree
///
/// # Returns
/// * `Result<GlobSet>` - Compiled patterns, defaults included
///
/// # Errors
/// * `Error::TemplateError` if a pattern is not a valid glob
pub fn build_skip_set<S: AsRef<str>>(skips: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        add_pattern(&mut builder, pattern)?;
    }
    for pattern in skips {
        let pattern = pattern.as_ref().trim_end_matches('/');
        debug!("Skipping '{pattern}'");
        add_pattern(&mut builder, pattern)?;
        add_pattern(&mut builder, &format!("{pattern}/**"))?;
    }
    builder
        .build()
        .map_err(|e| Error::TemplateError(format!("skip patterns failed to compile: {e}")))
}

/// Renders the preamble (if the corpus has one) and compiles its skip patterns.
pub fn collect_skip_set(
    renderer: &dyn TemplateRenderer,
    preamble: Option<&str>,
    context: &serde_json::Value,
) -> Result<GlobSet> {
    let skips = match preamble {
        Some(preamble) => renderer.collect_skips(preamble, context)?,
        None => {
            debug!("Corpus has no preamble");
            Vec::new()
        }
    };
    build_skip_set(&skips)
}

//! Error handling for bundlegen.
//! Defines the crate error type and the result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for bundlegen operations.
///
/// Validation errors are the only user-correctable category. Every other variant
/// signals either an environment problem (IO, missing template) or a defect in the
/// template corpus itself.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the MiniJinja engine
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors in the preloaded answers file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents a malformed or inconsistent schema document
    #[error("Schema error: {0}.")]
    SchemaError(String),

    /// A parameter value does not satisfy its declared pattern
    #[error("Validation error: '{key}' has value '{value}' which does not match '{pattern}'{}.", format_hint(.hint))]
    ValidationError { key: String, value: String, pattern: String, hint: Option<String> },

    /// A rendered file still contains template syntax
    #[error("Unresolved placeholder in '{path}' near '{snippet}'.")]
    UnresolvedPlaceholderError { path: String, snippet: String },

    /// A target file already exists and overwriting was not requested
    #[error("Output path '{path}' already exists. Use --force to overwrite it.")]
    OutputExistsError { path: String },

    /// The template directory cannot be found
    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Represents a failure while processing a single corpus entry
    #[error("Failed to process '{source_path}': {e}.")]
    ProcessError { source_path: String, e: String },
}

fn format_hint(hint: &Option<String>) -> String {
    hint.as_ref().map(|h| format!(" ({h})")).unwrap_or_default()
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}

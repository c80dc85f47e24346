//! bundlegen renders a Databricks Asset Bundle project skeleton from a template
//! directory and a set of answers. Resolution is a pure function of the validated
//! answers and the template corpus; the resulting tree is written in one step.

/// Preloaded answers from a JSON or YAML document
pub mod answers;

/// Command-line interface module for the bundlegen application
pub mod cli;

/// Common constants
pub mod constants;

/// Template corpus loading
pub mod corpus;

/// Error types and handling for the bundlegen application
pub mod error;

/// Skip and ignore patterns for corpus paths
pub mod ignore;

/// Logger setup
pub mod logger;

/// Traceability record written next to the generated project
pub mod metadata;

/// Typed view of the configuration and derived lookup tables
pub mod options;

/// Per-entry path and content processing
pub mod processor;

/// Template rendering engine
pub mod renderer;

/// Resolution of a configuration against the corpus
pub mod resolver;

/// Schema document handling
pub mod schema;

/// Generated file tree
pub mod tree;

/// Validated Configuration Vector
pub mod vector;

//! Common constants used throughout bundlegen.

/// Schema document describing the template parameters
pub const SCHEMA_FILE: &str = "databricks_template_schema.json";

/// Directory inside the template root that holds the corpus
pub const TEMPLATE_DIR: &str = "template";

/// Corpus entry rendered first to collect `skip()` patterns; never emitted
pub const PREAMBLE_FILE: &str = "__preamble.tmpl";

/// Suffix marking files whose content is rendered
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Traceability record written next to the generated project
pub const METADATA_FILE: &str = "bundle_init_config.json";

/// Databricks CLI release pinned by every generated CI pipeline
pub const DATABRICKS_CLI_VERSION: &str = "v0.240.0";

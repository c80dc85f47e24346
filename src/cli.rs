//! Command-line interface implementation for bundlegen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for bundlegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "bundlegen: Databricks Asset Bundle project generator", long_about = None)]
pub struct Args {
    /// Path to the template directory (holds databricks_template_schema.json)
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Directory where the generated project will be created
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON or YAML file with answers for the template parameters.
    /// Parameters that are not answered take their default value.
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdin")]
    pub config_file: Option<PathBuf>,

    /// Read answers from stdin instead of a config file
    #[arg(short, long)]
    pub stdin: bool,

    /// Overwrite files that already exist in the output directory
    #[arg(short, long)]
    pub force: bool,

    /// Resolve the template and list the files without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let mut command = Args::command().help_template(
                    r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                );
                if command.print_help().is_err() {
                    e.exit();
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

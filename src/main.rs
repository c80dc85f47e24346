//! bundlegen's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates the generation flow.

use bundlegen::{
    answers::{load_answers, AnswerSource},
    cli::{get_args, Args},
    corpus::{load_template_root, CorpusLoader, LocalLoader},
    error::{default_error_handler, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
    resolver::Resolver,
    schema::load_schema,
    vector::ConfigVector,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads and checks the schema document
/// 2. Loads preloaded answers and collects the Configuration Vector
/// 3. Loads the template corpus
/// 4. Resolves the corpus into a file tree
/// 5. Writes the tree (unless this is a dry run)
fn run(args: Args) -> Result<()> {
    let template_root = load_template_root(&args.template)?;
    let schema = load_schema(&template_root)?;

    let preloaded = load_answers(AnswerSource::from_flags(args.stdin, args.config_file))?;
    let vector = ConfigVector::collect(&schema, &preloaded)?;

    let renderer = MiniJinjaRenderer::new();
    let resolver = Resolver::new(&renderer);

    if let Some(welcome) = &schema.welcome_message {
        println!("{}", resolver.render_message(welcome, &vector)?.trim_end());
    }

    let corpus = LocalLoader::new(&template_root).load()?;
    let tree = resolver.resolve(&vector, &corpus)?;

    if args.dry_run {
        for path in tree.paths() {
            println!("{path}");
        }
        return Ok(());
    }

    for target in tree.write_to(&args.output_dir, args.force)? {
        println!("Created: '{}'", target.display());
    }

    if let Some(success) = &schema.success_message {
        println!("{}", resolver.render_message(success, &vector)?.trim_end());
    }
    Ok(())
}

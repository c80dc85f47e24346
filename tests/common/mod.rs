#![allow(dead_code)]

use bundlegen::answers::parse_answers;
use bundlegen::corpus::{Corpus, CorpusLoader, LocalLoader};
use bundlegen::error::Result;
use bundlegen::renderer::MiniJinjaRenderer;
use bundlegen::resolver::Resolver;
use bundlegen::schema::{load_schema, Schema};
use bundlegen::tree::FileTree;
use bundlegen::vector::ConfigVector;
use std::path::PathBuf;

pub const PROJECT: &str = "sales_data";

pub fn template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("bundle_template")
}

pub fn schema() -> Schema {
    load_schema(template_dir()).unwrap()
}

pub fn corpus() -> Corpus {
    LocalLoader::new(template_dir()).load().unwrap()
}

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/configs").join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

pub fn collect(answers: &str) -> Result<ConfigVector> {
    ConfigVector::collect(&schema(), &parse_answers(answers)?)
}

pub fn generate(answers: &str) -> FileTree {
    let vector = collect(answers).unwrap();
    let renderer = MiniJinjaRenderer::new();
    Resolver::new(&renderer).resolve(&vector, &corpus()).unwrap()
}

pub fn generate_fixture(name: &str) -> FileTree {
    generate(&fixture(name))
}

/// Path of a file inside the generated project.
pub fn project_path(relative: &str) -> String {
    format!("{PROJECT}/{relative}")
}

pub fn project_file<'a>(tree: &'a FileTree, relative: &str) -> &'a str {
    let path = project_path(relative);
    tree.get_str(&path).unwrap_or_else(|| panic!("missing {path}"))
}

pub fn yaml(tree: &FileTree, relative: &str) -> serde_yaml::Value {
    serde_yaml::from_str(project_file(tree, relative))
        .unwrap_or_else(|e| panic!("{relative} is not valid YAML: {e}"))
}

/// Names of the targets declared in databricks.yml, in document order.
pub fn target_names(tree: &FileTree) -> Vec<String> {
    let bundle = yaml(tree, "databricks.yml");
    bundle["targets"]
        .as_mapping()
        .expect("targets mapping")
        .keys()
        .filter_map(|key| key.as_str().map(str::to_string))
        .collect()
}

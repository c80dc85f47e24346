use bundlegen::error::Error;
use bundlegen::tree::FileTree;
use std::fs;
use tempfile::TempDir;

fn sample_tree() -> FileTree {
    let mut tree = FileTree::default();
    tree.insert("p/databricks.yml", b"bundle:\n  name: p\n".to_vec()).unwrap();
    tree.insert("p/resources/schemas.yml", b"resources: {}\n".to_vec()).unwrap();
    tree.insert("p/tests/__init__.py", Vec::new()).unwrap();
    tree
}

#[test]
fn test_paths_are_sorted() {
    let tree = sample_tree();
    let paths: Vec<_> = tree.paths().collect();
    assert_eq!(paths, vec!["p/databricks.yml", "p/resources/schemas.yml", "p/tests/__init__.py"]);
    assert!(tree.contains_dir("p/resources"));
    assert!(!tree.contains_dir("p/.github"));
}

#[test]
fn test_duplicate_path_is_an_error() {
    let mut tree = sample_tree();
    assert!(matches!(
        tree.insert("p/databricks.yml", Vec::new()),
        Err(Error::TemplateError(_))
    ));
}

#[test]
fn test_write_creates_directories() {
    let temp_dir = TempDir::new().unwrap();
    let written = sample_tree().write_to(temp_dir.path(), false).unwrap();

    assert_eq!(written.len(), 3);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("p/databricks.yml")).unwrap(),
        "bundle:\n  name: p\n"
    );
    assert!(temp_dir.path().join("p/tests/__init__.py").is_file());
}

#[test]
fn test_existing_file_aborts_whole_write() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("p/resources")).unwrap();
    fs::write(temp_dir.path().join("p/resources/schemas.yml"), "keep me").unwrap();

    let result = sample_tree().write_to(temp_dir.path(), false);
    assert!(matches!(result, Err(Error::OutputExistsError { .. })));
    assert!(!temp_dir.path().join("p/databricks.yml").exists());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("p/resources/schemas.yml")).unwrap(),
        "keep me"
    );
}

#[test_log::test]
fn test_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("p/resources")).unwrap();
    fs::write(temp_dir.path().join("p/resources/schemas.yml"), "old").unwrap();

    sample_tree().write_to(temp_dir.path(), true).unwrap();
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("p/resources/schemas.yml")).unwrap(),
        "resources: {}\n"
    );
}

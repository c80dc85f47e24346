use bundlegen::answers::{load_answers, parse_answers, AnswerSource};
use bundlegen::error::Error;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_parse_json() {
    let answers = parse_answers(r#"{"project_name": "sales_data", "compute_type": "both"}"#).unwrap();
    assert_eq!(answers["project_name"], "sales_data");
    assert_eq!(answers["compute_type"], "both");
    assert_eq!(answers.keys().collect::<Vec<_>>(), vec!["project_name", "compute_type"]);
}

#[test]
fn test_parse_yaml() {
    let answers = parse_answers("project_name: sales_data\nenvironment_setup: minimal\n").unwrap();
    assert_eq!(answers["project_name"], "sales_data");
    assert_eq!(answers["environment_setup"], "minimal");
}

#[test]
fn test_scalars_are_stringified() {
    let answers =
        parse_answers(r#"{"include_cicd": true, "include_permissions": false, "n": 3, "x": null}"#)
            .unwrap();
    assert_eq!(answers["include_cicd"], "yes");
    assert_eq!(answers["include_permissions"], "no");
    assert_eq!(answers["n"], "3");
    assert!(!answers.contains_key("x"));
}

#[test]
fn test_nested_values_are_rejected() {
    let result = parse_answers(r#"{"project_name": {"nested": "value"}}"#);
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_empty_input() {
    assert!(parse_answers("").unwrap().is_empty());
    assert!(parse_answers("  \n").unwrap().is_empty());
}

#[test]
fn test_answer_source_from_flags() {
    assert!(matches!(AnswerSource::from_flags(true, None), AnswerSource::Stdin));
    assert!(matches!(
        AnswerSource::from_flags(false, Some(PathBuf::from("a.json"))),
        AnswerSource::File(_)
    ));
    assert!(matches!(AnswerSource::from_flags(false, None), AnswerSource::None));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.yaml");
    std::fs::write(&path, "project_name: from_file\n").unwrap();

    let answers = load_answers(AnswerSource::File(path)).unwrap();
    assert_eq!(answers["project_name"], "from_file");

    assert!(load_answers(AnswerSource::None).unwrap().is_empty());
    assert!(load_answers(AnswerSource::File(temp_dir.path().join("missing.json"))).is_err());
}

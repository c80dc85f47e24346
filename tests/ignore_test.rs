use bundlegen::ignore::{build_skip_set, collect_skip_set, DEFAULT_IGNORE_PATTERNS};
use bundlegen::renderer::MiniJinjaRenderer;
use serde_json::json;

#[test]
fn test_default_patterns_always_apply() {
    let set = build_skip_set::<&str>(&[]).unwrap();
    assert_eq!(DEFAULT_IGNORE_PATTERNS.len(), 3);
    assert!(set.is_match("p/.DS_Store"));
    assert!(set.is_match("p/src/__pycache__/bronze.cpython-311.pyc"));
    assert!(set.is_match("p/src/jobs/ingest.pyc"));
    assert!(!set.is_match("p/src/jobs/ingest.py"));
}

#[test]
fn test_skip_covers_subtree() {
    let set = build_skip_set(&["p/.github"]).unwrap();
    assert!(set.is_match("p/.github"));
    assert!(set.is_match("p/.github/workflows/p_bundle_cicd.yml"));
    assert!(!set.is_match("p/.gitlab-ci.yml"));
    assert!(!set.is_match("q/.github/workflows/q_bundle_cicd.yml"));
}

#[test]
fn test_trailing_slash_is_ignored() {
    let set = build_skip_set(&["p/docs/"]).unwrap();
    assert!(set.is_match("p/docs/SETUP_GROUPS.md"));
}

#[test]
fn test_invalid_pattern() {
    assert!(build_skip_set(&["p/[docs"]).is_err());
}

#[test]
fn test_collect_from_preamble() {
    let renderer = MiniJinjaRenderer::new();
    let preamble = r#"{% if include_cicd != "yes" %}{{ skip(project_name ~ "/.github") }}{% endif %}"#;

    let set = collect_skip_set(&renderer, Some(preamble), &json!({"include_cicd": "no", "project_name": "p"})).unwrap();
    assert!(set.is_match("p/.github/workflows/ci.yml"));

    let set = collect_skip_set(&renderer, Some(preamble), &json!({"include_cicd": "yes", "project_name": "p"})).unwrap();
    assert!(!set.is_match("p/.github/workflows/ci.yml"));

    let set = collect_skip_set(&renderer, None, &json!({})).unwrap();
    assert!(!set.is_match("p/.github/workflows/ci.yml"));
}

#[test]
fn test_preamble_with_undefined_variable_fails() {
    let renderer = MiniJinjaRenderer::new();
    let preamble = r#"{% if unknown %}{{ skip("p") }}{% endif %}"#;
    assert!(collect_skip_set(&renderer, Some(preamble), &json!({})).is_err());
}

use bundlegen::cli::Args;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("bundlegen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, PathBuf::from("./template"));
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert!(parsed.config_file.is_none());
    assert!(!parsed.stdin);
    assert!(!parsed.force);
    assert!(!parsed.dry_run);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--force",
        "--verbose",
        "--dry-run",
        "--output-dir",
        "./output",
        "--config-file",
        "answers.yaml",
        "./template",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
    assert!(parsed.dry_run);
    assert_eq!(parsed.output_dir, PathBuf::from("./output"));
    assert_eq!(parsed.config_file, Some(PathBuf::from("answers.yaml")));
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-f", "-v", "-s", "-o", "./output", "./template"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
    assert!(parsed.stdin);
    assert_eq!(parsed.output_dir, PathBuf::from("./output"));
}

#[test]
fn test_stdin_conflicts_with_config_file() {
    let args = make_args(&["--stdin", "--config-file", "answers.json", "./template"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_args() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

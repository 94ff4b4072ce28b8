use assert_cmd::Command;
use clap::Parser;
use modkit::cli::{ExtractArgs, GenerateArgs};
use predicates::prelude::*;
use std::path::PathBuf;

#[test]
fn test_generate_args_parse_positional_path() {
    let parsed = GenerateArgs::try_parse_from(["modkit-gen", "./template"]).unwrap();
    assert_eq!(parsed.template_dir, Some(PathBuf::from("./template")));
    assert!(!parsed.verbose);
}

#[test]
fn test_generate_args_path_is_optional() {
    let parsed = GenerateArgs::try_parse_from(["modkit-gen"]).unwrap();
    assert_eq!(parsed.template_dir, None);
}

#[test]
fn test_extract_args_parse_flags() {
    let parsed =
        ExtractArgs::try_parse_from(["modkit-extract", "-v", "template.zip"]).unwrap();
    assert_eq!(parsed.archive, Some(PathBuf::from("template.zip")));
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args_is_an_error() {
    assert!(GenerateArgs::try_parse_from(["modkit-gen", "a", "b"]).is_err());
}

#[test]
fn test_gen_fails_on_missing_directory() {
    Command::cargo_bin("modkit-gen")
        .unwrap()
        .arg("/no/such/template-dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input not found"));
}

#[test]
fn test_extract_fails_on_missing_archive() {
    Command::cargo_bin("modkit-extract")
        .unwrap()
        .arg("/no/such/template.zip")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input not found"));
}

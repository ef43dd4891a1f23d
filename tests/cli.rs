//! End-to-end checks of the `rename-regions` binary's argument handling and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const LAYOUT: &str = "<Layout><Regions><ShapeList><Items>\
    <Item><Name>A</Name><Children><Items>\
    <Item><Name>3</Name><Children><Items><Item><Name>Sensor1</Name></Item></Items></Children></Item>\
    </Items></Children></Item>\
    </Items></ShapeList></Regions></Layout>";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rename-regions"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = tempdir().unwrap();
    let out = run(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Usage: rename-regions"), "{stdout}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_one_argument_renames_in_place() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("layout.xml"), LAYOUT).unwrap();

    let out = run(dir.path(), &["layout.xml"]);

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let written = fs::read_to_string(dir.path().join("layout.xml")).unwrap();
    assert!(written.contains("<Name>A03_Sensor1</Name>"), "{written}");
}

#[test]
fn test_two_arguments_write_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.xml"), LAYOUT).unwrap();

    let out = run(dir.path(), &["in.xml", "out.xml"]);

    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("in.xml")).unwrap(),
        LAYOUT
    );
    let written = fs::read_to_string(dir.path().join("out.xml")).unwrap();
    assert!(written.contains("<Name>A03_Sensor1</Name>"), "{written}");
}

#[test]
fn test_extra_arguments_warn_and_continue() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.xml"), LAYOUT).unwrap();

    let out = run(dir.path(), &["in.xml", "out.xml", "extra.xml"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Too many arguments, only the first two will be used"),
        "{stdout}"
    );
    assert!(dir.path().join("out.xml").exists());
    assert!(!dir.path().join("extra.xml").exists());
}

#[test]
fn test_malformed_input_fails_without_writing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.xml"), "<Layout><Regions>").unwrap();

    let out = run(dir.path(), &["in.xml", "out.xml"]);

    assert!(!out.status.success());
    assert_ne!(out.status.code(), Some(1));
    assert!(!dir.path().join("out.xml").exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error:"));
}

#[test]
fn test_config_file_in_working_directory_is_ignored() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("rename-regions.toml"),
        "pad_width = 4\nseparator = \"-\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("in.xml"), LAYOUT).unwrap();

    let out = run(dir.path(), &["in.xml", "out.xml"]);

    assert!(out.status.success());
    let written = fs::read_to_string(dir.path().join("out.xml")).unwrap();
    assert!(written.contains("<Name>A03_Sensor1</Name>"), "{written}");
}

#[test]
fn test_usage_is_printed_regardless_of_stray_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("rename-regions.toml"), "log_level = \"=[\"\n").unwrap();

    let out = run(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("Usage: rename-regions"));
}

#[test]
fn test_hyphenated_file_names_are_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("-in.xml"), LAYOUT).unwrap();

    let out = run(dir.path(), &["-in.xml", "-h"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let written = fs::read_to_string(dir.path().join("-h")).unwrap();
    assert!(written.contains("<Name>A03_Sensor1</Name>"), "{written}");
    assert_eq!(
        fs::read_to_string(dir.path().join("-in.xml")).unwrap(),
        LAYOUT
    );
}

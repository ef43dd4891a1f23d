use super::{usage, Invocation};
use crate::error::RenameError;
use std::path::{Path, PathBuf};

fn paths(args: &[&str]) -> Vec<PathBuf> {
    args.iter().map(PathBuf::from).collect()
}

#[test]
fn test_no_paths_is_usage_error() {
    match Invocation::from_paths("rename-regions", Vec::new()) {
        Err(RenameError::Usage(message)) => {
            assert_eq!(message, "Usage: rename-regions <input_file> [<output_file>]");
        }
        other => panic!("expected usage error, got {other:?}"),
    }
}

#[test]
fn test_single_path_renames_in_place() {
    let inv = Invocation::from_paths("prog", paths(&["layout.xml"])).unwrap();

    assert_eq!(inv.input, PathBuf::from("layout.xml"));
    assert_eq!(inv.output(), None);
    assert_eq!(inv.ignored, 0);
}

#[test]
fn test_two_paths() {
    let inv = Invocation::from_paths("prog", paths(&["in.xml", "out.xml"])).unwrap();

    assert_eq!(inv.input, PathBuf::from("in.xml"));
    assert_eq!(inv.output(), Some(Path::new("out.xml")));
    assert_eq!(inv.ignored, 0);
}

#[test]
fn test_extra_paths_are_ignored() {
    let inv =
        Invocation::from_paths("prog", paths(&["in.xml", "out.xml", "x.xml", "y.xml"])).unwrap();

    assert_eq!(inv.input, PathBuf::from("in.xml"));
    assert_eq!(inv.output(), Some(Path::new("out.xml")));
    assert_eq!(inv.ignored, 2);
}

#[test]
fn test_usage_names_program() {
    assert!(usage("tool").starts_with("Usage: tool "));
}

//! Tests for suffix grouping of benchmark files.

use std::fs;
use std::path::{Path, PathBuf};

use benchjoin_ingest::{IngestError, Suffix, group_files};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "parameters.dbSize,setupTime.mean\n10,1.0\n").expect("write file");
    path
}

fn basename(dir: &Path, stem: &str) -> String {
    dir.join(stem).to_string_lossy().into_owned()
}

#[test]
fn single_file_case_wins_over_suffixed_files() {
    let dir = TempDir::new().expect("temp dir");
    let a = touch(dir.path(), "a.csv");
    let b = touch(dir.path(), "b.csv");
    touch(dir.path(), "a_x.csv");
    touch(dir.path(), "b_x.csv");

    let groups = group_files(&[basename(dir.path(), "a"), basename(dir.path(), "b")])
        .expect("group files");

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.suffix, Suffix::Single);
    let paths: Vec<&PathBuf> = group.files.iter().map(|(_, path)| path).collect();
    assert_eq!(paths, vec![&a, &b]);
}

#[test]
fn groups_by_suffix_of_first_basename() {
    let dir = TempDir::new().expect("temp dir");
    for name in ["a_x.csv", "b_x.csv", "a_y.csv", "b_y.csv", "a_lan+tls.csv", "b_lan+tls.csv"] {
        touch(dir.path(), name);
    }
    // Ignored: wrong stem, unsupported suffix characters, other extension.
    touch(dir.path(), "ab_z.csv");
    touch(dir.path(), "a_bad.name.csv");
    fs::write(dir.path().join("a_w.txt"), "x").expect("write file");

    let a = basename(dir.path(), "a");
    let b = basename(dir.path(), "b");
    let groups = group_files(&[a.clone(), b.clone()]).expect("group files");

    let suffixes: Vec<&Suffix> = groups.iter().map(|g| &g.suffix).collect();
    assert_eq!(
        suffixes,
        vec![
            &Suffix::Tagged("lan+tls".to_string()),
            &Suffix::Tagged("x".to_string()),
            &Suffix::Tagged("y".to_string()),
        ]
    );

    let x = &groups[1];
    assert_eq!(x.files.len(), 2);
    assert_eq!(x.files[0].0, a);
    assert_eq!(x.files[1], (b, dir.path().join("b_x.csv")));
}

#[test]
fn missing_suffix_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    touch(dir.path(), "a_x.csv");
    touch(dir.path(), "a_y.csv");
    touch(dir.path(), "b_x.csv");

    let result = group_files(&[basename(dir.path(), "a"), basename(dir.path(), "b")]);

    match result {
        Err(IngestError::MissingSuffixFile { path, suffix, .. }) => {
            assert_eq!(suffix, "y");
            assert_eq!(path, dir.path().join("b_y.csv"));
        }
        other => panic!("expected missing suffix file, got {other:?}"),
    }
}

#[test]
fn no_matching_files_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    touch(dir.path(), "other.csv");

    let result = group_files(&[basename(dir.path(), "a")]);

    assert!(matches!(result, Err(IngestError::FileGrouping { .. })));
}

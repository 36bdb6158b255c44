use super::find_documents;
use crate::config::Config;
use crate::error::ToggleError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.ts"), "b").unwrap();
    fs::write(dir.path().join("a.ts"), "a").unwrap();
    fs::write(dir.path().join("notes.md"), "# notes").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("c.ts"), "c").unwrap();
    dir
}

#[test]
fn test_directory_is_flat_by_default() {
    let dir = fixture();
    let cfg = Config::default();

    let found = find_documents(&[dir.path().to_path_buf()], &cfg).unwrap();

    assert_eq!(
        found,
        vec![dir.path().join("a.ts"), dir.path().join("b.ts")]
    );
}

#[test]
fn test_recursive_directory() {
    let dir = fixture();
    let cfg = Config {
        recursive: true,
        ..Config::default()
    };

    let found = find_documents(&[dir.path().to_path_buf()], &cfg).unwrap();

    assert_eq!(found.len(), 3);
    assert!(found.contains(&dir.path().join("nested").join("c.ts")));
}

#[test]
fn test_explicit_file_and_duplicates() {
    let dir = fixture();
    let cfg = Config::default();
    let a = dir.path().join("a.ts");

    let found = find_documents(&[a.clone(), dir.path().to_path_buf()], &cfg).unwrap();

    assert_eq!(found, vec![a, dir.path().join("b.ts")]);
}

#[test]
fn test_explicit_file_with_wrong_extension() {
    let dir = fixture();
    let cfg = Config::default();

    let err = find_documents(&[dir.path().join("notes.md")], &cfg).unwrap_err();

    assert!(matches!(err, ToggleError::UnsupportedExtension { .. }));
}

#[test]
fn test_missing_path() {
    let cfg = Config::default();
    let missing = PathBuf::from("definitely/not/here.ts");

    let err = find_documents(&[missing.clone()], &cfg).unwrap_err();

    assert!(matches!(err, ToggleError::NotFound(path) if path == missing));
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_yields_each_file_once() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "a").unwrap();
    std::os::unix::fs::symlink(".", dir.path().join("loop")).unwrap();
    let cfg = Config {
        recursive: true,
        ..Config::default()
    };

    let found = find_documents(&[dir.path().to_path_buf()], &cfg).unwrap();

    assert_eq!(found, vec![dir.path().join("a.ts")]);
}

#[cfg(unix)]
#[test]
fn test_file_reached_by_two_names_is_kept_once() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("real.ts");
    fs::write(&real, "r").unwrap();
    std::os::unix::fs::symlink(&real, dir.path().join("alias.ts")).unwrap();
    let cfg = Config::default();

    let found = find_documents(&[dir.path().to_path_buf(), real], &cfg).unwrap();

    assert_eq!(found.len(), 1);
}

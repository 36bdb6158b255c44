use super::Config;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_empty_toml_gives_defaults() {
    let cfg = Config::from_toml("").unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let cfg = Config::from_toml("file_extensions = [\"js\", \"tsx\"]\nrecursive = true\n").unwrap();

    assert_eq!(cfg.file_extensions, vec!["js".to_string(), "tsx".to_string()]);
    assert!(cfg.recursive);
    assert_eq!(cfg.start_marker, "// DEBUG START");
    assert_eq!(cfg.close_token, "*/");
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "start_marker = \"# BEGIN DEBUG\"\nlog_level = \"debug\"").unwrap();

    let cfg = Config::load_from(file.path()).unwrap();

    assert_eq!(cfg.start_marker, "# BEGIN DEBUG");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.end_marker, "// DEBUG END");
}

#[test]
fn test_load_from_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(Config::load_from(&missing).is_err());
}

#[test]
fn test_tag_extraction() {
    let cfg = Config::default();

    assert_eq!(cfg.tag_of("// DEBUG START [perf]"), Some("perf".to_string()));
    assert_eq!(cfg.tag_of("  // DEBUG START[ net io ]  "), Some("net io".to_string()));
    assert_eq!(cfg.tag_of("// DEBUG START"), None);
    assert_eq!(cfg.tag_of("// DEBUG START []"), None);
    assert_eq!(cfg.tag_of("// DEBUG START [unclosed"), None);
    assert_eq!(cfg.tag_of("x(); // DEBUG START [inline] trailing"), Some("inline".to_string()));
    assert_eq!(cfg.tag_of("// DEBUG END [perf]"), None);
}

#[test]
fn test_token_matching_trims_whitespace_only() {
    let cfg = Config::default();

    assert!(cfg.is_open_token("   /*\t"));
    assert!(cfg.is_close_token("*/"));
    assert!(!cfg.is_open_token("/**"));
    assert!(!cfg.is_close_token("*/ done"));
}

#[test]
fn test_extension_matching() {
    let cfg = Config {
        file_extensions: vec!["ts".to_string(), ".js".to_string()],
        ..Config::default()
    };

    assert!(cfg.matches_extension(Path::new("src/app.ts")));
    assert!(cfg.matches_extension(Path::new("lib.js")));
    assert!(!cfg.matches_extension(Path::new("types.d.tsx")));
    assert!(!cfg.matches_extension(Path::new("Makefile")));
}

//! Tests for configuration loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_path_ends_with_app_dir() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/autocomp/config.toml"));
    }
}

#[test]
fn test_load_from_file() {
    let file = write_config("[autocomplete]\norder = \"alphabetical\"\nignore_case = true\n");
    let config = load_config_from_path(file.path()).unwrap();
    assert!(config.autocomplete.ignore_case);
    assert_eq!(
        config.autocomplete.order,
        crate::autocomplete::ListOrder::Alphabetical
    );
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from_path(&dir.path().join("absent.toml")).unwrap();
    assert!(config.autocomplete.auto_hide);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[autocomplete\n");
    let err = load_config_from_path(file.path()).unwrap_err();
    assert!(matches!(err, AutocompError::ConfigParse(_)));
}

#[test]
fn test_invalid_separator_is_rejected() {
    let err = parse_config("[autocomplete]\ntypesep = \"\\u0000\"\n").unwrap_err();
    assert!(matches!(err, AutocompError::InvalidTypesep('\0')));
}

#[test]
fn test_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, AutocompError::Io(_)));
}

#[test]
fn test_load_or_default_falls_back() {
    let file = write_config("not = [valid");
    let config = load_config_or_default(Some(file.path()));
    assert_eq!(config.autocomplete.separator, ' ');
}

#[test]
fn test_load_or_default_reads_valid_file() {
    let file = write_config("[list]\nmax_width = 42\n");
    let config = load_config_or_default(Some(file.path()));
    assert_eq!(config.list.max_width, 42);
}

//! Tests for command line handling

use super::*;
use crate::config::Config;

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["autocomp"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

fn config_for(args: &[&str]) -> SessionConfig {
    parse(args)
        .session_config(&Config::default().autocomplete)
        .unwrap()
}

#[test]
fn test_defaults_come_from_config() {
    let config = config_for(&[]);
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_overrides_apply() {
    let config = config_for(&[
        "--separator",
        ",",
        "--typesep",
        ":",
        "--order",
        "custom",
        "--ignore-case",
        "--first-match",
        "--no-auto-hide",
    ]);
    assert_eq!(config.separator(), b',');
    assert_eq!(config.typesep(), b':');
    assert_eq!(config.order, ListOrder::Custom);
    assert!(config.ignore_case);
    assert_eq!(config.case_behaviour, CaseBehaviour::IgnoreCase);
    assert!(!config.auto_hide);
}

#[test]
fn test_conflicting_separators_rejected() {
    let args = parse(&["--separator", "?"]);
    let err = args
        .session_config(&Config::default().autocomplete)
        .unwrap_err();
    assert!(matches!(err, AutocompError::SeparatorConflict('?')));
}

#[test]
fn test_print_sorted_conflicts_with_select() {
    let result = Args::try_parse_from(["autocomp", "--print-sorted", "--select", "a"]);
    assert!(result.is_err());
}

#[test]
fn test_default_candidates_use_separator() {
    let args = parse(&[]);
    let config = config_for(&["--separator", ","]);
    let list = args.candidates(&config);
    assert!(list.starts_with("Self,as,async"));
}

#[test]
fn test_explicit_list_wins() {
    let args = parse(&["--list", "x y"]);
    assert_eq!(args.candidates(&SessionConfig::default()), "x y");
}

#[test]
fn test_sorted_items_alphabetical() {
    let config = config_for(&["--order", "alphabetical"]);
    assert_eq!(sorted_items("pear apple fig", config), vec!["apple", "fig", "pear"]);
}

#[test]
fn test_sorted_items_presorted_unchanged() {
    let config = config_for(&[]);
    assert_eq!(sorted_items("pear apple", config), vec!["pear", "apple"]);
}

#[test]
fn test_select_item_found() {
    let config = config_for(&["--order", "alphabetical"]);
    assert_eq!(
        select_item("pear apple fig", config, "fi").as_deref(),
        Some("fig")
    );
}

#[test]
fn test_select_item_missing() {
    let config = config_for(&["--order", "alphabetical"]);
    assert_eq!(select_item("pear apple", config, "zz"), None);
}

#[test]
fn test_select_item_respects_case_policy() {
    let config = config_for(&["--order", "alphabetical", "--ignore-case"]);
    assert_eq!(
        select_item("Foo foo FOO", config, "FOO").as_deref(),
        Some("FOO")
    );
}

#[test]
fn test_respect_case_overrides_config() {
    let base = AutocompleteConfig {
        order: ListOrder::Alphabetical,
        ignore_case: true,
        case_behaviour: CaseBehaviour::IgnoreCase,
        ..AutocompleteConfig::default()
    };

    let first_match = parse(&[]).session_config(&base).unwrap();
    assert_eq!(
        select_item("Foo foo FOO", first_match, "FOO").as_deref(),
        Some("Foo")
    );

    let respect_case = parse(&["--respect-case"]).session_config(&base).unwrap();
    assert_eq!(respect_case.case_behaviour, CaseBehaviour::RespectCase);
    assert_eq!(
        select_item("Foo foo FOO", respect_case, "FOO").as_deref(),
        Some("FOO")
    );
}

#[test]
fn test_respect_case_conflicts_with_first_match() {
    let result = Args::try_parse_from(["autocomp", "--respect-case", "--first-match"]);
    assert!(result.is_err());
}

#[test]
fn test_default_candidates_are_presorted() {
    let mut sorted: Vec<&str> = DEFAULT_CANDIDATES.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, DEFAULT_CANDIDATES);

    let list = DEFAULT_CANDIDATES.join(" ");
    assert_eq!(
        select_item(&list, SessionConfig::default(), "whi").as_deref(),
        Some("while")
    );
}

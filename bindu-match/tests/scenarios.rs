//! Shipped configuration and scenario files.

use bindu_match::config::DEFAULT_CONFIG_PATH;
use bindu_match::{BinduConfig, Error, MatchScenario, SearchStrategy};

#[test]
fn test_default_config_file_parses() {
    let config = BinduConfig::load(DEFAULT_CONFIG_PATH).unwrap();
    assert_eq!(config.matcher.eps, 0.1);
    assert_eq!(config.matcher.search, SearchStrategy::Auto);
    assert_eq!(config.render.grid_ticks, 8);
}

#[test]
fn test_load_default_finds_shipped_config() {
    // Integration tests run from the crate root, where configs/ lives
    let config = BinduConfig::load_default().unwrap();
    assert_eq!(config, BinduConfig::load(DEFAULT_CONFIG_PATH).unwrap());
    assert_eq!(config.matcher.eps, 0.1);
}

#[test]
fn test_fuzzy_square_scenario() {
    let matcher = MatchScenario::load("scenarios/fuzzy_square.yaml")
        .unwrap()
        .into_matcher()
        .unwrap();

    // (0.3, 1.4) has no neighbor within 0.1
    assert!(!matcher.fuzzy_match());
    assert_eq!(matcher.matched_pairs().len(), 3);
}

#[test]
fn test_exact_line_scenario() {
    let matcher = MatchScenario::load("scenarios/exact_line.yaml")
        .unwrap()
        .into_matcher()
        .unwrap();
    assert!(matcher.exact_match());
    assert!(matcher.fuzzy_match());
}

#[test]
fn test_missing_scenario_is_io_error() {
    let err = MatchScenario::load("scenarios/does_not_exist.yaml").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

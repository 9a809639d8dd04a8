//! Tests for the configuration module.

use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.search.budget, 1000);
    assert_eq!(config.arena.rounds, 100);
    assert_eq!(config.arena.player_one, "modified");
    assert_eq!(config.arena.player_two, "vanilla");
}

#[test]
fn test_search_defaults() {
    let config = CentralConfig::default();
    assert!((config.search.exploration - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.search.selection, "plain");
    assert_eq!(config.search.final_action, "most_wins");
    assert_eq!(config.search.perspective, "own_visits");
    assert_eq!(config.search.max_rollout_steps, 10_000);
}

#[test]
fn test_env_overrides() {
    std::env::set_var("MCTS_SEARCH_BUDGET", "64");
    std::env::set_var("MCTS_SEARCH_SELECTION", "heuristic_weighted");
    std::env::set_var("MCTS_ARENA_SEED", "7");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.search.budget, 64);
    assert_eq!(config.search.selection, "heuristic_weighted");
    assert_eq!(config.arena.seed, 7);

    std::env::remove_var("MCTS_SEARCH_BUDGET");
    std::env::remove_var("MCTS_SEARCH_SELECTION");
    std::env::remove_var("MCTS_ARENA_SEED");
}

#[test]
fn test_unparseable_env_override_is_ignored() {
    std::env::set_var("MCTS_ARENA_LOG_INTERVAL", "often");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.arena.log_interval, defaults::log_interval());

    std::env::remove_var("MCTS_ARENA_LOG_INTERVAL");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"

[search]
budget = 250
exploration = 1.41
final_action = "best_win_rate"

[arena]
rounds = 20
player_one = "random"
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.search.budget, 250);
    assert!((config.search.exploration - 1.41).abs() < f64::EPSILON);
    assert_eq!(config.search.final_action, "best_win_rate");
    assert_eq!(config.arena.rounds, 20);
    assert_eq!(config.arena.player_one, "random");
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[arena]
rounds = 3
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.arena.rounds, 3);
    assert_eq!(config.arena.player_two, "vanilla"); // Default
    assert_eq!(config.search.selection, "plain"); // Default
    assert_eq!(config.common.log_level, "info"); // Default
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]\nperspective = \"parent_visits\"\nmax_rollout_steps = 99").unwrap();

    let config = load_from_path(file.path());
    assert_eq!(config.search.perspective, "parent_visits");
    assert_eq!(config.search.max_rollout_steps, 99);
}

#[test]
fn test_load_from_malformed_path_falls_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search\nbudget = ").unwrap();

    let config = load_from_path(file.path());
    assert_eq!(config.search.final_action, defaults::final_action());
    assert_eq!(config.arena.player_one, defaults::player_one());
}

#[test]
fn test_load_from_missing_path_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_from_path(&dir.path().join("absent.toml"));
    assert_eq!(config.search.perspective, defaults::perspective());
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.arena.player_one, cloned.arena.player_one);
    assert_eq!(config.search.budget, cloned.search.budget);
}

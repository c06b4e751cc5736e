use std::path::PathBuf;
use pathwise_lib::config::scoring::{get_scoring_config, load_scoring_config_from, ScoringConfig};

#[test]
fn test_defaults_match_scoring_weights() {
    let config = ScoringConfig::default();
    assert_eq!(config.duration_tolerance, 1.2);
    assert_eq!(config.duration_bonus, 10.0);
    assert_eq!(config.content_type_bonus, 15.0);
    assert_eq!(config.level_match_bonus, 20.0);
    assert_eq!(config.beginner_ceiling, 40.0);
    assert_eq!(config.advanced_floor, 70.0);
    assert_eq!(config.engagement_window_days, 30);
    assert_eq!(config.utc_offset_minutes, None);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config: ScoringConfig = toml::from_str("content_type_bonus = 5.0\nutc_offset_minutes = -300\n").unwrap();
    assert_eq!(config.content_type_bonus, 5.0);
    assert_eq!(config.utc_offset_minutes, Some(-300));
    assert_eq!(config.level_match_bonus, 20.0);
}

struct ScratchDir(PathBuf);

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
fn test_load_from_file() {
    let scratch = ScratchDir(std::env::temp_dir().join(format!("pathwise-config-{}", std::process::id())));
    let dir = &scratch.0;
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("scoring.toml");

    std::fs::write(&path, "duration_bonus = 12.5\n").unwrap();
    assert_eq!(load_scoring_config_from(&path).unwrap().duration_bonus, 12.5);

    std::fs::write(&path, "duration_bonus = [1, 2]\n").unwrap();
    let err = load_scoring_config_from(&path).unwrap_err();
    assert_eq!(err.stage, "config_parse");

    let err = load_scoring_config_from(&dir.join("absent.toml")).unwrap_err();
    assert_eq!(err.stage, "io");
}

#[test]
fn test_cached_config_is_stable() {
    assert!(std::ptr::eq(get_scoring_config(), get_scoring_config()));
}

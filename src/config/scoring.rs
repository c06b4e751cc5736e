use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use crate::error::PathError;

/// Weights and thresholds used by relevance scoring and engagement prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier on `priority * (target - current)` for each matched gap
    pub skill_gap_weight: f64,
    /// Course duration may exceed the best session length by this factor
    pub duration_tolerance: f64,
    pub duration_bonus: f64,
    pub content_type_bonus: f64,
    pub level_match_bonus: f64,
    /// Average skill scores below this map to beginner courses
    pub beginner_ceiling: f64,
    /// Average skill scores at or above this map to advanced courses
    pub advanced_floor: f64,
    pub engagement_window_days: usize,
    pub dropoff_activity_threshold: f64,
    pub dropoff_consistency_threshold: f64,
    /// Fixed offset for time-of-day bucketing. `None` uses each record's own offset.
    pub utc_offset_minutes: Option<i32>,
    pub cache_capacity: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            skill_gap_weight: 1.0,
            duration_tolerance: 1.2,
            duration_bonus: 10.0,
            content_type_bonus: 15.0,
            level_match_bonus: 20.0,
            beginner_ceiling: 40.0,
            advanced_floor: 70.0,
            engagement_window_days: 30,
            dropoff_activity_threshold: 0.5,
            dropoff_consistency_threshold: 0.3,
            utc_offset_minutes: None,
            cache_capacity: 64,
        }
    }
}

fn get_config_path() -> PathBuf {
    super::app_data_dir().join("scoring.toml")
}

/// Load a scoring config from an explicit TOML file.
pub fn load_scoring_config_from(path: &Path) -> Result<ScoringConfig, PathError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PathError::new(
            format!("Failed to read scoring config: {}", e),
            "io"
        ).with_context(format!("path: {:?}", path)))?;

    toml::from_str::<ScoringConfig>(&content)
        .map_err(|e| PathError::from(e).with_context(format!("path: {:?}", path)))
}

fn load_scoring_config_internal() -> ScoringConfig {
    let config_path = get_config_path();

    if !config_path.exists() {
        tracing::debug!(path = ?config_path, "No scoring.toml found, using defaults");
        return ScoringConfig::default();
    }

    match load_scoring_config_from(&config_path) {
        Ok(config) => {
            tracing::info!(path = ?config_path, "Loaded scoring config");
            config
        }
        Err(e) => {
            tracing::warn!(
                path = ?config_path,
                error = %e,
                "Failed to load scoring.toml, using defaults"
            );
            ScoringConfig::default()
        }
    }
}

lazy_static! {
    static ref SCORING_CONFIG: ScoringConfig = load_scoring_config_internal();
}

/// Get the cached scoring configuration (loaded once per process)
pub fn get_scoring_config() -> &'static ScoringConfig {
    &SCORING_CONFIG
}

use std::path::{Path, PathBuf};
use crate::student::StudentProfile;
use crate::error::PathError;
use crate::skills::model::TargetSkill;

pub fn profile_path() -> PathBuf {
    crate::config::app_data_dir().join("profile.json")
}

/// Load a student profile asynchronously.
/// A missing file is an empty profile; a malformed one is an error so that
/// skill scores are never dropped without the caller knowing.
pub async fn load_profile(path: &Path) -> Result<StudentProfile, PathError> {
    match tokio::fs::read_to_string(path).await {
        Ok(data) => {
            serde_json::from_str::<StudentProfile>(&data)
                .map_err(|e| PathError::new(
                    format!("Failed to parse student profile: {}", e),
                    "json_parse"
                ).with_context(format!("path: {:?}", path)))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "No student profile found, using empty profile");
            Ok(StudentProfile::default())
        }
        Err(e) => {
            Err(PathError::new(
                format!("Failed to read student profile: {}", e),
                "io"
            ).with_context(format!("path: {:?}", path)))
        }
    }
}

/// Save a student profile asynchronously
pub async fn save_profile(path: &Path, profile: &StudentProfile) -> Result<(), PathError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| PathError::new(
                format!("Failed to create directory: {}", e),
                "io"
            ).with_context(format!("path: {:?}", parent)))?;
    }

    let json = serde_json::to_string_pretty(profile)
        .map_err(|e| PathError::new(
            format!("Failed to serialize profile: {}", e),
            "json_serialize"
        ))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| PathError::new(
            format!("Failed to write student profile: {}", e),
            "io"
        ).with_context(format!("path: {:?}", path)))?;

    Ok(())
}

pub fn targets_path() -> PathBuf {
    crate::config::app_data_dir().join("targets.json")
}

/// Load the learner's target skills. A missing file means no targets.
pub async fn load_targets(path: &Path) -> Result<Vec<TargetSkill>, PathError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            serde_json::from_str(&content)
                .map_err(|e| PathError::new(
                    format!("Failed to parse target skills: {}", e),
                    "json_parse"
                ).with_context(format!("path: {:?}", path)))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "No target skills file found");
            Ok(Vec::new())
        }
        Err(e) => {
            Err(PathError::new(
                format!("Failed to read target skills: {}", e),
                "io"
            ).with_context(format!("path: {:?}", path)))
        }
    }
}

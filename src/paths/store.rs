use std::path::{Path, PathBuf};
use crate::paths::assembler::LearningPath;
use crate::error::PathError;

pub fn paths_file() -> PathBuf {
    crate::config::app_data_dir().join("learning_paths.json")
}

/// Save generated paths asynchronously
pub async fn save_paths(path: &Path, paths: &[LearningPath]) -> Result<(), PathError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| PathError::new(
                format!("Failed to create directory: {}", e),
                "io"
            ).with_context(format!("path: {:?}", parent)))?;
    }

    let json = serde_json::to_string_pretty(paths)
        .map_err(|e| PathError::new(
            format!("Failed to serialize learning paths: {}", e),
            "json_serialize"
        ))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| PathError::new(
            format!("Failed to write learning paths: {}", e),
            "io"
        ).with_context(format!("path: {:?}", path)))?;

    Ok(())
}

/// Load saved paths asynchronously. `Ok(None)` when nothing was saved yet.
pub async fn load_paths(path: &Path) -> Result<Option<Vec<LearningPath>>, PathError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            serde_json::from_str(&content)
                .map_err(|e| PathError::new(
                    format!("Failed to parse learning paths: {}", e),
                    "json_parse"
                ).with_context(format!("path: {:?}", path)))
                .map(Some)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(e) => {
            Err(PathError::new(
                format!("Failed to read learning paths: {}", e),
                "io"
            ).with_context(format!("path: {:?}", path)))
        }
    }
}

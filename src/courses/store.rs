use std::path::{Path, PathBuf};
use crate::courses::course::Course;
use crate::error::PathError;

pub fn catalog_path() -> PathBuf {
    crate::config::app_data_dir().join("catalog.json")
}

/// Load a course catalog asynchronously. A missing file is an empty catalog.
///
/// The file must hold a JSON array. Entries that are not valid courses (for
/// example without an `id` or `level`) are skipped with a warning.
pub async fn load_catalog(path: &Path) -> Result<Vec<Course>, PathError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let entries: Vec<serde_json::Value> = serde_json::from_str(&content)
                .map_err(|e| PathError::new(
                    format!("Failed to parse course catalog: {}", e),
                    "json_parse"
                ).with_context(format!("path: {:?}", path)))?;

            let total = entries.len();
            let courses: Vec<Course> = entries
                .into_iter()
                .enumerate()
                .filter_map(|(index, entry)| match serde_json::from_value::<Course>(entry) {
                    Ok(course) => Some(course),
                    Err(e) => {
                        tracing::warn!(
                            path = ?path,
                            index,
                            error = %e,
                            "Skipping malformed catalog entry"
                        );
                        None
                    }
                })
                .collect();

            tracing::debug!(
                path = ?path,
                courses = courses.len(),
                skipped = total - courses.len(),
                "Loaded course catalog"
            );
            Ok(courses)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "No course catalog found, using empty catalog");
            Ok(Vec::new())
        }
        Err(e) => {
            Err(PathError::new(
                format!("Failed to read course catalog: {}", e),
                "io"
            ).with_context(format!("path: {:?}", path)))
        }
    }
}

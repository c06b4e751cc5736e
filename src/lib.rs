pub mod activity;
pub mod analytics;
pub mod cache;
pub mod commands;
pub mod config;
pub mod courses;
pub mod engagement;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod paths;
pub mod skills;
pub mod state;
pub mod student;


use std::path::PathBuf;
use crate::error::PathError;
use crate::paths::{PathPlanner, PathRequest};

/// Read a request file, plan paths, save and print them.
///
/// The request path comes from the first CLI argument, defaulting to
/// `request.json` in the app data directory.
pub fn run() -> Result<(), PathError> {
    // Initialize structured logging first
    logging::init_logging();
    tracing::info!("pathwise starting");

    let scoring = config::scoring::get_scoring_config().clone();
    let app_state = state::app::AppState::with_capacity(scoring.cache_capacity);
    let planner = PathPlanner::new(scoring);

    let request_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config::app_data_dir().join("request.json"));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| PathError::new(
            format!("Failed to create async runtime: {}", e),
            "startup"
        ))?;

    rt.block_on(async {
        let request = load_request(&request_path).await?;
        let plan = commands::recommend_paths(&app_state, &planner, &request)?;

        if let Err(e) = paths::store::save_paths(&paths::store::paths_file(), &plan.paths).await {
            tracing::warn!(error = %e, "Failed to save learning paths");
        }

        let json = serde_json::to_string_pretty(&plan)?;
        println!("{}", json);
        Ok::<(), PathError>(())
    })
}

/// Load a full request file. Falls back to assembling one from the separate
/// profile and catalog files in the data directory when it is missing.
async fn load_request(path: &std::path::Path) -> Result<PathRequest, PathError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => serde_json::from_str(&content)
            .map_err(|e| PathError::from(e).with_context(format!("path: {:?}", path))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = ?path, "No request file, using stored profile and catalog");
            Ok(PathRequest {
                student: student::store::load_profile(&student::store::profile_path()).await?,
                catalog: courses::store::load_catalog(&courses::store::catalog_path()).await?,
                targets: student::store::load_targets(&student::store::targets_path()).await?,
            })
        }
        Err(e) => Err(PathError::from(e).with_context(format!("path: {:?}", path))),
    }
}

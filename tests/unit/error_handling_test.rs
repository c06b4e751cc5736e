#[cfg(test)]
mod tests {
    use crate::error::PathError;

    #[test]
    fn test_error_creation() {
        let error = PathError::new("Test error", "test_stage");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.stage, "test_stage");
        assert!(error.context.is_none());
    }

    #[test]
    fn test_error_with_context() {
        let error = PathError::new("Test error", "test_stage")
            .with_context("Additional context");
        assert_eq!(error.context.as_deref(), Some("Additional context"));
    }

    #[test]
    fn test_error_display() {
        let error = PathError::new("Test error", "test_stage")
            .with_context("context")
            .with_source("source");
        let display = format!("{}", error);
        assert_eq!(display, "[test_stage] Test error (context: context) (source: source)");
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: PathError = err.into();
        assert_eq!(error.stage, "json_parse");
        assert_eq!(error.source.as_deref(), Some("serde_json"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let err = toml::from_str::<crate::config::scoring::ScoringConfig>("duration_bonus = \"ten\"")
            .unwrap_err();
        let error: PathError = err.into();
        assert_eq!(error.stage, "config_parse");
    }

    #[test]
    fn test_io_error_conversion() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: PathError = err.into();
        assert_eq!(error.stage, "io");
        assert!(error.message.contains("gone"));
    }
}

//! Widget configuration loader.
//!
//! Reads an optional TOML file and deserializes it into [`WidgetConfig`].
//! The lenient loader falls back to defaults when the file is missing,
//! unreadable, malformed or invalid; the strict parser reports why.

use std::path::Path;

use pagebot_types::config::WidgetConfig;
use pagebot_types::error::ConfigError;

/// Parse and validate a config document.
pub fn parse_widget_config(content: &str) -> Result<WidgetConfig, ConfigError> {
    let config: WidgetConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Read and validate the config file at `path`.
pub async fn read_widget_config(path: &Path) -> Result<WidgetConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
    parse_widget_config(&content)
}

/// Load the config at `path`, falling back to [`WidgetConfig::default()`].
///
/// - Missing file: defaults, logged at debug.
/// - Unreadable, malformed or invalid file: defaults, logged as a warning.
pub async fn load_widget_config(path: &Path) -> WidgetConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No widget config at {}, using defaults", path.display());
            return WidgetConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return WidgetConfig::default();
        }
    };

    match parse_widget_config(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Invalid widget config {}: {err}, using defaults", path.display());
            WidgetConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebot_types::config::{DelayRange, TimingMode};
    use pagebot_types::intent::Intent;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_widget_config(&tmp.path().join("pagebot.toml")).await;
        assert_eq!(config.typing_delay, DelayRange::new(1000, 3000));
        assert!(config.responses.is_empty());
    }

    #[tokio::test]
    async fn load_valid_file_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagebot.toml");
        tokio::fs::write(
            &path,
            r#"
greeting = "Welcome!"
timing_mode = "sequential"

[delivery_delay]
min_ms = 100
max_ms = 200

[responses]
contact = "Use the form below."
"#,
        )
        .await
        .unwrap();

        let config = load_widget_config(&path).await;
        assert_eq!(config.greeting, "Welcome!");
        assert_eq!(config.timing_mode, TimingMode::Sequential);
        assert_eq!(config.delivery_delay, DelayRange::new(100, 200));
        assert_eq!(
            config.response_overrides().unwrap(),
            vec![(Intent::Contact, "Use the form below.")]
        );
    }

    #[tokio::test]
    async fn load_malformed_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagebot.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_widget_config(&path).await;
        assert_eq!(config.delivery_delay, DelayRange::new(1500, 2500));
    }

    #[tokio::test]
    async fn load_invalid_range_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagebot.toml");
        tokio::fs::write(&path, "[typing_delay]\nmin_ms = 500\nmax_ms = 100\n")
            .await
            .unwrap();

        let config = load_widget_config(&path).await;
        assert_eq!(config.typing_delay, DelayRange::new(1000, 3000));
    }

    #[tokio::test]
    async fn read_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_widget_config(&tmp.path().join("nope.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn parse_reports_errors() {
        assert!(matches!(
            parse_widget_config("greeting = 5"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            parse_widget_config("[responses]\nweather = \"sunny\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            parse_widget_config("[responses]\nabout = \"\""),
            Err(ConfigError::EmptyTemplate(Intent::About))
        ));
    }

    #[test]
    fn parse_empty_is_default() {
        let config = parse_widget_config("").unwrap();
        assert_eq!(config.event_capacity, 64);
    }
}

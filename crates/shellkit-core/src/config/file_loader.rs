//! File-based configuration loading

use super::model::ShellConfig;
use crate::error::{ShellError, ShellResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> ShellResult<ShellConfig> {
    if !path.exists() {
        tracing::debug!("config file {} not found, using defaults", path.display());
        return Ok(ShellConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ShellError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shell.json");
        fs::write(&path, r#"{"prompt": "orc>", "version": "1.2.3"}"#).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.prompt, "orc>");
        assert_eq!(config.version, "1.2.3");
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shell.toml");
        fs::write(&path, "prompt = \"ops>\"\nhelp_margin = 8\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.prompt, "ops>");
        assert_eq!(config.help_margin, 8);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shell.yaml");
        fs::write(&path, "name: orc\nlog_level: debug\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.name, "orc");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "SHELL_CONFIG");
    }
}

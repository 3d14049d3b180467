//! Configuration file support for mvn-sbom.
//!
//! Provides YAML-based configuration through `mvn-sbom.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! CLI flags over config values over defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use mvn_sbom::adapters::outbound::process::DEFAULT_MAVEN_COMMAND;
use mvn_sbom::application::dto::OutputFormat;
use mvn_sbom::shared::error::SbomError;
use mvn_sbom::shared::Result;

pub const CONFIG_FILENAME: &str = "mvn-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<String>,
    pub maven_command: Option<String>,
    pub offline: Option<bool>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Unknown top-level keys, sorted for stable warnings
    pub fn unknown_field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub maven_command: String,
    pub offline: bool,
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output: None,
            maven_command: DEFAULT_MAVEN_COMMAND.to_string(),
            offline: false,
            timeout: None,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        return Err(SbomError::Validation {
            message: "Invalid config: timeout_secs must be greater than 0.\n\n\
                      💡 Hint: Remove timeout_secs to wait for Maven indefinitely."
                .to_string(),
        }
        .into());
    }

    if let Some(ref command) = config.maven_command {
        if command.trim().is_empty() {
            return Err(SbomError::Validation {
                message: "Invalid config: maven_command must not be empty.\n\n\
                          💡 Hint: Use \"mvn\" or a wrapper such as \"./mvnw\"."
                    .to_string(),
            }
            .into());
        }
    }

    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|message| SbomError::Validation {
                message: format!("Invalid config: {}", message),
            })?;
    }

    Ok(())
}

/// Resolves settings: CLI flags override config values, config values override defaults.
pub fn merge(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let defaults = Settings::default();

    let config_format = config
        .and_then(|c| c.format.as_deref())
        .map(str::parse::<OutputFormat>)
        .transpose()
        .map_err(|message| SbomError::Validation { message })?;

    Ok(Settings {
        format: args.format.or(config_format).unwrap_or(defaults.format),
        output: args
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output.clone()))
            .map(PathBuf::from),
        maven_command: args
            .maven_command
            .clone()
            .or_else(|| config.and_then(|c| c.maven_command.clone()))
            .unwrap_or(defaults.maven_command),
        offline: args.offline || config.and_then(|c| c.offline).unwrap_or(defaults.offline),
        timeout: args
            .timeout
            .or_else(|| config.and_then(|c| c.timeout_secs))
            .map(Duration::from_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["mvn-sbom"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
output: target/sbom.md
maven_command: ./mvnw -q
offline: true
timeout_secs: 300
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.output.as_deref(), Some("target/sbom.md"));
        assert_eq!(config.maven_command.as_deref(), Some("./mvnw -q"));
        assert_eq!(config.offline, Some(true));
        assert_eq!(config.timeout_secs, Some(300));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "timeout_secs: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("timeout_secs must be greater than 0"));
    }

    #[test]
    fn test_empty_maven_command_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "maven_command: \"   \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("maven_command must not be empty"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: cyclonedx\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
check_cve: true
exclude_packages: [junit]
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.unknown_field_names(),
            vec!["check_cve", "exclude_packages"]
        );
    }

    #[test]
    fn test_merge_defaults() {
        let settings = merge(&args(&[]), None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.maven_command, "mvn");
    }

    #[test]
    fn test_merge_config_over_defaults() {
        let config = ConfigFile {
            format: Some("md".to_string()),
            output: Some("sbom.md".to_string()),
            maven_command: Some("./mvnw".to_string()),
            offline: Some(true),
            timeout_secs: Some(60),
            ..Default::default()
        };

        let settings = merge(&args(&[]), Some(&config)).unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.output, Some(PathBuf::from("sbom.md")));
        assert_eq!(settings.maven_command, "./mvnw");
        assert!(settings.offline);
        assert_eq!(settings.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_merge_cli_over_config() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            maven_command: Some("./mvnw".to_string()),
            timeout_secs: Some(60),
            ..Default::default()
        };

        let settings = merge(
            &args(&["-f", "json", "--mvn", "mvn -q", "--timeout", "5"]),
            Some(&config),
        )
        .unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.maven_command, "mvn -q");
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }
}

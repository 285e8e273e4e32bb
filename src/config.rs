//! Configuration file support for sentinel.
//!
//! Settings come from three layers: command-line flags override
//! `sentinel.config.yml`, which overrides the built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::intake::domain::Role;
use crate::presentation::status_rotation::DEFAULT_STATUS_INTERVAL;
use crate::shared::error::SentinelError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sentinel.config.yml";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub role: Option<String>,
    pub format: Option<String>,
    pub color: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub status_interval_ms: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file parses as YAML null.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(api_url) = &config.api_url {
        validate_api_url(api_url)?;
    }
    if let Some(role) = &config.role {
        validate_role(role)?;
    }
    if let Some(format) = &config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|message| SentinelError::Validation { message })?;
    }
    if config.timeout_secs == Some(0) {
        return Err(invalid("timeout_secs must be greater than 0"));
    }
    if config.status_interval_ms == Some(0) {
        return Err(invalid("status_interval_ms must be greater than 0"));
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    SentinelError::Validation {
        message: message.into(),
    }
    .into()
}

fn validate_api_url(api_url: &str) -> Result<()> {
    if api_url.starts_with("http://") || api_url.starts_with("https://") {
        Ok(())
    } else {
        Err(invalid(format!(
            "api_url must start with http:// or https:// (got '{}')",
            api_url
        )))
    }
}

fn validate_role(role: &str) -> Result<Role> {
    Role::from_id(role).ok_or_else(|| {
        invalid(format!(
            "Unknown role '{}'. Expected one of: executive, security, compliance, technical, global",
            role
        ))
    })
}

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
    /// Role applied to results locations that carry none.
    pub default_role: Option<Role>,
    pub format: OutputFormat,
    pub color: bool,
    pub output: Option<PathBuf>,
    pub timeout: Duration,
    pub status_interval: Duration,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let api_url = args
            .api_url
            .clone()
            .or(config.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let default_role = args
            .role
            .as_deref()
            .or(config.role.as_deref())
            .map(validate_role)
            .transpose()?;

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => format
                .parse::<OutputFormat>()
                .map_err(|message| SentinelError::Validation { message })?,
            (None, None) => OutputFormat::default(),
        };

        let color = !args.no_color && config.color.unwrap_or(true);

        let timeout = match args.timeout.or(config.timeout_secs) {
            Some(0) => return Err(invalid("timeout must be greater than 0")),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        let status_interval = config
            .status_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_STATUS_INTERVAL);

        Ok(Self {
            api_url,
            default_role,
            format,
            color,
            output: args.output.clone(),
            timeout,
            status_interval,
        })
    }
}

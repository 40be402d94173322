//! Application configuration and problem-file loading.
//!
//! `AppConfig` is read from TOML; every section is optional and falls
//! back to defaults. Problem instances (`CoverageRequest`) are read from
//! `.toml` or `.json` files, chosen by extension.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::generator::CoverageGeneratorConfig;
use crate::models::CoverageRequest;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Roster output settings (`[output]`).
    pub output: OutputConfig,
    /// Log verbosity and format (`[logging]`).
    pub logging: LoggingConfig,
    /// Defaults for the `generate` command (`[generator]`).
    pub generator: CoverageGeneratorConfig,
}

/// Output section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default stdout format, overridden by `--format`.
    pub format: OutputFormat,
    /// Append KPI summary to the roster (default `true`).
    pub show_kpi: bool,
}

/// Logging section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable crate debug logs, same as `--verbose`.
    pub verbose: bool,
    /// Emit JSON log lines instead of the compact format.
    pub json: bool,
}

/// How a schedule is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable roster.
    #[default]
    Text,
    /// Schedule and KPIs as one JSON document.
    Json,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_kpi: true,
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text; missing sections take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Toml,
    Json,
}

fn file_kind(path: &Path) -> Result<FileKind> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("toml") => Ok(FileKind::Toml),
        Some("json") => Ok(FileKind::Json),
        _ => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Loads a coverage problem from a `.toml` or `.json` file.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<CoverageRequest> {
    let path = path.as_ref();
    let kind = file_kind(path)?;
    let content = fs::read_to_string(path)?;
    let request: CoverageRequest = match kind {
        FileKind::Toml => toml::from_str(&content)?,
        FileKind::Json => serde_json::from_str(&content)?,
    };
    debug!(
        path = %path.display(),
        subjects = request.subjects.len(),
        teachers = request.teachers.len(),
        "loaded request"
    );
    Ok(request)
}

/// Writes a coverage problem to a `.toml` or `.json` file.
pub fn save_request<P: AsRef<Path>>(path: P, request: &CoverageRequest) -> Result<()> {
    let path = path.as_ref();
    let content = match file_kind(path)? {
        FileKind::Toml => toml::to_string_pretty(request)?,
        FileKind::Json => serde_json::to_string_pretty(request)?,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

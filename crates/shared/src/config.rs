//! Configuration for Pinnwand
//!
//! Read from a camelCase JSON file. Every key is optional:
//!
//! ```json
//! {
//!   "imprint": "Pinnwand GmbH, Nobelstraße 10, Stuttgart",
//!   "dateFormat": "%d.%m.%Y",
//!   "trailer": "--- Ende ---",
//!   "defaultFormat": "html",
//!   "logLevel": "debug"
//! }
//! ```

use pinnwand_adapter::writer::plain_text::DEFAULT_TRAILER;
use pinnwand_adapter::writer::DEFAULT_DATE_FORMAT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::PinnwandError;

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown output format '{}' (expected plain or html)", other)),
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_trailer() -> String {
    DEFAULT_TRAILER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Imprint printed at the end of every report
    #[serde(default)]
    pub imprint: Option<String>,

    /// strftime pattern of the "Erstellt am" line
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Trailer of the plain-text writer
    #[serde(default = "default_trailer")]
    pub trailer: String,

    /// Format used when the command line does not choose one
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            imprint: None,
            date_format: default_date_format(),
            trailer: default_trailer(),
            default_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> crate::Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(PinnwandError::Config("dateFormat must not be empty".to_string()));
        }
        if self.log_level.trim().is_empty() {
            return Err(PinnwandError::Config("logLevel must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinnwand_domain::ReportWriter;
    use std::io::Write;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "imprint": "Pinnwand GmbH",
            "dateFormat": "%d.%m.%Y",
            "defaultFormat": "html"
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.imprint.as_deref(), Some("Pinnwand GmbH"));
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert_eq!(config.default_format, OutputFormat::Html);
        // Unset keys keep their defaults
        assert_eq!(config.trailer, AppConfig::default().trailer);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_defaults_match_writer_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.trailer, DEFAULT_TRAILER);
        assert_eq!(
            config.trailer,
            pinnwand_adapter::PlainTextReportWriter::new().trailer()
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "trailer": "--", "logLevel": "debug" }}"#).unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.trailer, "--");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dateFormat": "  " }}"#).unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PinnwandError::Config(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            AppConfig::from_file(file.path()).unwrap_err(),
            PinnwandError::Json(_)
        ));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
        assert_eq!("HTML".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}

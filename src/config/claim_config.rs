// ==========================================
// Teaching Claim - Claim configuration
// ==========================================
// Lookup order: explicit path → <config_dir>/teaching-claim/config.json → defaults
// Command-line flags override whatever is loaded here.
// ==========================================

use crate::engine::{RowFilter, TermRange, DEFAULT_DOMAIN_SUFFIX, DEFAULT_EXCLUDED_SECTIONS};
use crate::engine::EngineResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const CONFIG_DIR_NAME: &str = "teaching-claim";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("malformed config {path}: {message}")]
    ParseError { path: String, message: String },
}

// ==========================================
// ClaimConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimConfig {
    /// Adjunct e-mail domain, matched case-insensitively.
    #[serde(default = "default_domain_suffix")]
    pub domain_suffix: String,

    /// Sections kept even though they have more than two letters.
    #[serde(default = "default_excluded_sections")]
    pub excluded_sections: BTreeSet<String>,

    /// Term start, e.g. "21 April 2025".
    #[serde(default = "default_term_start")]
    pub term_start: String,

    /// Term end, inclusive.
    #[serde(default = "default_term_end")]
    pub term_end: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_domain_suffix() -> String {
    DEFAULT_DOMAIN_SUFFIX.to_string()
}

fn default_excluded_sections() -> BTreeSet<String> {
    DEFAULT_EXCLUDED_SECTIONS.iter().map(|s| s.to_string()).collect()
}

fn default_term_start() -> String {
    "21 April 2025".to_string()
}

fn default_term_end() -> String {
    "23 August 2025".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("processed_data")
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            domain_suffix: default_domain_suffix(),
            excluded_sections: default_excluded_sections(),
            term_start: default_term_start(),
            term_end: default_term_end(),
            output_dir: default_output_dir(),
        }
    }
}

impl ClaimConfig {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: ClaimConfig = serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Explicit path if given, else the per-user config file if it exists,
    /// else defaults. An explicit path that cannot be read is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parsed and validated term range.
    pub fn term(&self) -> EngineResult<TermRange> {
        TermRange::parse(&self.term_start, &self.term_end)
    }

    pub fn row_filter(&self) -> RowFilter {
        RowFilter::new(&self.domain_suffix, self.excluded_sections.clone())
    }
}

/// `<config_dir>/teaching-claim/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ClaimConfig::default();
        assert_eq!(config.domain_suffix, "@adj.np.edu.sg");
        assert!(config.excluded_sections.contains("TSP1"));
        assert!(config.excluded_sections.contains("WSP1"));
        let term = config.term().unwrap();
        assert_eq!(term.start().to_string(), "2025-04-21");
        assert_eq!(term.end().to_string(), "2025-08-23");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "term_start": "1 April 2024", "excluded_sections": ["TSP1"] }}"#
        )
        .unwrap();

        let config = ClaimConfig::load(file.path()).unwrap();
        assert_eq!(config.term_start, "1 April 2024");
        assert_eq!(config.excluded_sections.len(), 1);
        assert_eq!(config.domain_suffix, "@adj.np.edu.sg");
        assert_eq!(config.term_end, "23 August 2025");
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = ClaimConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_load_or_default_explicit_missing_path() {
        let result = ClaimConfig::load_or_default(Some(Path::new("/nonexistent/claim.json")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_term_errors_surface() {
        let config = ClaimConfig {
            term_start: "soon".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.term(), Err(EngineError::InvalidTermDate { .. })));

        let inverted = ClaimConfig {
            term_start: "23 August 2025".to_string(),
            term_end: "21 April 2025".to_string(),
            ..Default::default()
        };
        assert!(matches!(inverted.term(), Err(EngineError::InvertedTerm { .. })));
    }
}

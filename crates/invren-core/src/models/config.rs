//! Configuration structures for extraction, naming and the batch renamer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::InvrenError;

/// Main configuration for invren.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvrenConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output filename configuration.
    pub naming: NamingConfig,

    /// Batch renamer configuration.
    pub rename: RenameConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Prefixes that disqualify a company name candidate.
    pub non_name_prefixes: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            non_name_prefixes: vec![
                "Nr.".to_string(),
                "CIF".to_string(),
                "Cod".to_string(),
                "Reg. Com".to_string(),
                "produs".to_string(),
                "serviciu".to_string(),
            ],
        }
    }
}

/// Output filename configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Maximum number of characters kept from the company name.
    pub company_max_len: usize,

    /// Separator between name parts; also replaces invalid characters.
    pub separator: char,

    /// Literal placed in front of the payment total.
    pub total_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            company_max_len: 30,
            separator: '_',
            total_prefix: "TOTAL".to_string(),
        }
    }
}

/// Batch renamer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Replace an existing destination file.
    pub overwrite: bool,

    /// Only process files named like unprocessed originals (`123456.pdf`).
    pub select_originals_only: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            overwrite: true,
            select_originals_only: true,
        }
    }
}

impl InvrenConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, InvrenError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| InvrenError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), InvrenError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| InvrenError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("invren")
            .join("config.json")
    }

    /// Load from an explicit path, else the default location if it exists,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, InvrenError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = Self::default_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }
}

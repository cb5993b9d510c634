use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for Docport
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocportConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where project documents live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding one document per project
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// File extension of project documents
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Link generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Route prefix for rendered pages
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to print tree diagnostics (unknown parents) to the user
    #[serde(default = "default_true")]
    pub report_diagnostics: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_base_path() -> String {
    "/docs".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            extension: default_extension(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            report_diagnostics: true,
        }
    }
}

impl DocportConfig {
    /// Load config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Emit an element progress event every this many raw elements
    pub progress_interval: usize,

    /// Maximum per-element failure notes kept (and logged) per file
    pub max_failure_notes: usize,

    /// Elements shown per file by `show`
    pub preview_elements: usize,

    /// Characters of element text shown by `show` before truncating
    pub preview_text_chars: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.progress_interval == 0 {
            return Err("progress_interval must be greater than 0".to_string());
        }
        if self.preview_text_chars == 0 {
            return Err("preview_text_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            progress_interval: 50,
            max_failure_notes: 10,
            preview_elements: 5,
            preview_text_chars: 200,
        }
    }
}

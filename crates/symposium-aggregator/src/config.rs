//! Configuration for the MaterialAggregator

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the MaterialAggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Maximum time one source branch may take for one subject (seconds)
    pub branch_deadline_secs: u64,
}

impl AggregatorConfig {
    /// Get the branch deadline as a Duration
    pub fn branch_deadline(&self) -> Duration {
        Duration::from_secs(self.branch_deadline_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.branch_deadline_secs == 0 {
            return Err("branch_deadline_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            branch_deadline_secs: 10,
        }
    }
}

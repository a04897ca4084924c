//! Configuration for the FactExtractor

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Tuning constants for the date and description heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Leading characters searched by the explicit-span rules
    pub intro_window_chars: usize,

    /// Birth years before this mean deceased; after it, plausibly living
    pub living_cutoff_year: i32,

    /// Largest plausible BCE birth year
    pub max_bce_year: i32,

    /// Characters allowed between "died" and its year
    pub died_window_chars: usize,

    /// Descriptions shorter than this are widened to two sentences
    pub description_min_chars: usize,

    /// Hard cut for the widened description (characters)
    pub description_window_chars: usize,

    /// Final descriptions longer than this are truncated (characters)
    pub description_max_chars: usize,

    /// Fixed year for the lifespan sanity check; the clock when unset
    pub current_year: Option<i32>,
}

impl ExtractorConfig {
    /// Year used to reject death dates in the future
    pub fn current_year(&self) -> i32 {
        self.current_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.intro_window_chars == 0 {
            return Err("intro_window_chars must be greater than 0".to_string());
        }
        if self.living_cutoff_year <= 0 {
            return Err("living_cutoff_year must be a positive year".to_string());
        }
        if self.max_bce_year <= 0 {
            return Err("max_bce_year must be greater than 0".to_string());
        }
        if self.description_max_chars < 4 {
            return Err("description_max_chars must leave room for an ellipsis".to_string());
        }
        if self.description_min_chars > self.description_max_chars {
            return Err("description_min_chars cannot exceed description_max_chars".to_string());
        }
        if let Some(year) = self.current_year {
            if year < self.living_cutoff_year {
                return Err(format!(
                    "current_year {} is earlier than living_cutoff_year {}",
                    year, self.living_cutoff_year
                ));
            }
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            intro_window_chars: 300,
            living_cutoff_year: 1900,
            max_bce_year: 3000,
            died_window_chars: 60,
            description_min_chars: 20,
            description_window_chars: 150,
            description_max_chars: 100,
            current_year: None,
        }
    }
}

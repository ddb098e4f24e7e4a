//! Configuration for the extraction pipeline
//!
//! All tunable parameters are carried in a single [`ExtractionConfig`] that is
//! supplied per call and never mutated. Configuration can be loaded from JSON
//! files or constructed programmatically:
//!
//! ```no_run
//! use garment_colors::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::extraction;
use crate::error::{ExtractionError, Result};

/// Clusters are addressed with 8-bit indices during k-means.
const MAX_CLUSTER_COUNT: usize = u8::MAX as usize;

/// Per-call extraction parameters.
///
/// Every field has a default, so partial JSON documents deserialize with the
/// remaining fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of color clusters to extract
    pub cluster_count: usize,

    /// Hue distance (degrees) under which two clusters merge
    pub hue_merge_threshold: f32,

    /// Minimum probability mass for a merged group to be reported
    pub min_probability: f64,

    /// Apply GrabCut foreground isolation before sampling
    pub remove_background: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            cluster_count: extraction::CLUSTER_COUNT,
            hue_merge_threshold: extraction::HUE_MERGE_THRESHOLD_DEGREES,
            min_probability: extraction::MIN_PROBABILITY,
            remove_background: true,
        }
    }
}

impl ExtractionConfig {
    /// Check the configuration for programmer-error misconfiguration
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidParameter` if:
    /// - `cluster_count` is zero or exceeds the 8-bit cluster index space
    /// - `hue_merge_threshold` is not a finite value in [0, 360]
    /// - `min_probability` is not a finite value in [0, 1]
    pub fn validate(&self) -> Result<()> {
        if self.cluster_count == 0 || self.cluster_count > MAX_CLUSTER_COUNT {
            return Err(ExtractionError::invalid_parameter(
                "cluster_count",
                self.cluster_count,
            ));
        }

        if !self.hue_merge_threshold.is_finite()
            || !(0.0..=360.0).contains(&self.hue_merge_threshold)
        {
            return Err(ExtractionError::invalid_parameter(
                "hue_merge_threshold",
                self.hue_merge_threshold,
            ));
        }

        if !self.min_probability.is_finite() || !(0.0..=1.0).contains(&self.min_probability) {
            return Err(ExtractionError::invalid_parameter(
                "min_probability",
                self.min_probability,
            ));
        }

        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ExtractionConfig::default();
        assert_eq!(config.cluster_count, 13);
        assert_eq!(config.hue_merge_threshold, 15.0);
        assert_eq!(config.min_probability, 0.05);
        assert!(config.remove_background);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_cluster_count() {
        let config = ExtractionConfig {
            cluster_count: 0,
            ..ExtractionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExtractionError::InvalidParameter { .. })
        ));

        let config = ExtractionConfig {
            cluster_count: 256,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_thresholds() {
        let config = ExtractionConfig {
            hue_merge_threshold: -1.0,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ExtractionConfig {
            hue_merge_threshold: f32::NAN,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ExtractionConfig {
            min_probability: 1.5,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = ExtractionConfig {
            cluster_count: 8,
            hue_merge_threshold: 20.0,
            min_probability: 0.1,
            remove_background: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ExtractionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: ExtractionConfig =
            serde_json::from_str(r#"{"cluster_count": 5}"#).unwrap();
        assert_eq!(parsed.cluster_count, 5);
        assert_eq!(parsed.hue_merge_threshold, 15.0);
        assert!(parsed.remove_background);
    }
}

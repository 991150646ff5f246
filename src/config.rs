//! Configuration for the harmony analysis pipeline.
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use color_harmony::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{clustering, sampling};
use crate::error::{AnalysisError, Result};

/// Complete pipeline configuration for harmony analysis.
///
/// Can be serialized to/from JSON for reproducible experiments. The scoring
/// weights and hue bands are part of the model, not the configuration; see
/// [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of dominant colors (centroids) extracted per image
    pub palette_size: usize,

    /// Random seed for clustering. Fixed by default so that repeated
    /// analysis of the same image is reproducible.
    pub seed: u64,

    /// Downsampling grid width in pixels
    pub sample_width: u32,

    /// Downsampling grid height in pixels
    pub sample_height: u32,

    /// Maximum k-means iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// k-means convergence threshold
    #[serde(default = "default_convergence")]
    pub convergence: f32,
}

fn default_max_iterations() -> usize {
    clustering::DEFAULT_MAX_ITERATIONS
}

fn default_convergence() -> f32 {
    clustering::DEFAULT_CONVERGENCE
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            palette_size: clustering::DEFAULT_PALETTE_SIZE,
            seed: clustering::DEFAULT_SEED,
            sample_width: sampling::GRID_WIDTH,
            sample_height: sampling::GRID_HEIGHT,
            max_iterations: clustering::DEFAULT_MAX_ITERATIONS,
            convergence: clustering::DEFAULT_CONVERGENCE,
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` for a zero-sized sample
    /// grid or a zero iteration cap.
    pub fn validate(&self) -> Result<()> {
        if self.sample_width == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sample_width",
                self.sample_width,
            ));
        }
        if self.sample_height == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sample_height",
                self.sample_height,
            ));
        }
        if self.max_iterations == 0 {
            return Err(AnalysisError::invalid_parameter(
                "max_iterations",
                self.max_iterations,
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

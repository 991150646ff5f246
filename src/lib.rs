//! # Color Harmony
//!
//! A Rust crate for scoring how well the dominant colors of an image combine.
//!
//! The analysis pipeline:
//! - Decodes the uploaded image and downsamples it to a fixed pixel grid
//! - Clusters the samples into K dominant colors with seeded k-means
//! - Converts each dominant color to hue/saturation/value
//! - Scores every unordered pair with weighted hue/value/saturation rules
//! - Averages the pair scores into one harmony score in [0, 100]
//!
//! ## Example
//!
//! ```rust,no_run
//! use color_harmony::analyze;
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! let result = analyze(&bytes)?;
//! println!("harmony: {} palette: {:?}", result.score, result.colors);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod cluster;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod pixels;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use pipeline::HarmonyAnalyzer;

/// Final analysis result: harmony score plus the extracted palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Harmony score in [0, 100], rounded to two decimal places
    pub score: f32,
    /// Extracted palette, one `[r, g, b]` triple per dominant color,
    /// channels rounded to integers in [0, 255]
    pub colors: Vec<[u8; 3]>,
}

/// Analyze an uploaded image with the default configuration
///
/// This is the main entry point for harmony analysis. It extracts the
/// dominant colors of the image and scores how well they combine.
///
/// # Arguments
///
/// * `image_bytes` - Encoded image bytes (JPEG, PNG, and the other formats
///   the `image` crate decodes)
///
/// # Returns
///
/// A `ScoreResult` containing the harmony score and extracted palette
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - No image data is provided (`MissingInput`)
/// - The pipeline fails for any reason, including undecodable bytes
///   (`ProcessingError`, with the underlying detail logged)
pub fn analyze(image_bytes: &[u8]) -> Result<ScoreResult> {
    HarmonyAnalyzer::new().analyze(image_bytes)
}

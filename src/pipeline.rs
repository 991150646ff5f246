//! End-to-end analysis orchestration
//!
//! Wires the pipeline stages in sequence: image bytes are decoded and
//! downsampled to a pixel grid, the samples are clustered into dominant
//! colors, each centroid is converted to HSV, and all unordered centroid
//! pairs are scored and averaged into one harmony score.
//!
//! Every intermediate value is request-local; an analyzer holds only
//! configuration and can be shared freely across threads.

use tracing::{debug, error};

use crate::cluster::{ColorClusterer, KmeansClusterer};
use crate::color::{ColorConverter, HarmonyScorer, HsvColor};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::pixels::PixelSource;
use crate::ScoreResult;

/// Orchestrates the full harmony analysis pipeline
pub struct HarmonyAnalyzer {
    config: AnalysisConfig,
    pixel_source: PixelSource,
    converter: ColorConverter,
    scorer: HarmonyScorer,
    clusterer: Box<dyn ColorClusterer>,
}

impl Default for HarmonyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonyAnalyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(config: AnalysisConfig) -> Self {
        let clusterer = Box::new(KmeansClusterer::with_params(
            config.max_iterations,
            config.convergence,
        ));
        Self::with_clusterer(config, clusterer)
    }

    /// Create an analyzer with an injected clustering implementation
    ///
    /// Used to substitute a deterministic fake for real k-means in tests.
    pub fn with_clusterer(config: AnalysisConfig, clusterer: Box<dyn ColorClusterer>) -> Self {
        Self {
            pixel_source: PixelSource::with_grid(config.sample_width, config.sample_height),
            converter: ColorConverter::new(),
            scorer: HarmonyScorer::new(),
            clusterer,
            config,
        }
    }

    /// Access the active configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze an uploaded image and produce its harmony score and palette
    ///
    /// # Arguments
    ///
    /// * `image_bytes` - Encoded image bytes as received from the caller
    ///
    /// # Returns
    ///
    /// A [`ScoreResult`] with the score rounded to two decimal places and
    /// the extracted palette rounded to integer channels.
    ///
    /// # Errors
    ///
    /// - `AnalysisError::MissingInput` if `image_bytes` is empty, checked
    ///   before any processing begins
    /// - `AnalysisError::InvalidParameter` if the configuration is invalid
    /// - `AnalysisError::ProcessingError` for any failure inside the
    ///   pipeline; the underlying detail is logged, not surfaced
    pub fn analyze(&self, image_bytes: &[u8]) -> Result<ScoreResult> {
        if image_bytes.is_empty() {
            return Err(AnalysisError::MissingInput);
        }
        self.config.validate()?;

        self.run_pipeline(image_bytes).map_err(|err| {
            error!(error = %err, "color analysis failed");
            AnalysisError::processing("color analysis failed")
        })
    }

    fn run_pipeline(&self, image_bytes: &[u8]) -> Result<ScoreResult> {
        let samples = self.pixel_source.samples_from_bytes(image_bytes)?;

        let centroids = self.clusterer.cluster(
            &samples,
            self.config.palette_size,
            self.config.seed,
        )?;
        debug!(
            samples = samples.len(),
            centroids = centroids.len(),
            "clustered pixel samples"
        );

        let hsv: Vec<HsvColor> = centroids
            .iter()
            .map(|&c| self.converter.srgb_to_hsv(c))
            .collect();

        let score = self.scorer.palette_score(&hsv);
        let colors: Vec<[u8; 3]> = centroids
            .iter()
            .map(|&c| self.converter.srgb_to_display(c))
            .collect();

        debug!(score, palette = colors.len(), "computed harmony score");

        Ok(ScoreResult {
            score: round_score(score),
            colors,
        })
    }
}

/// Round a score to two decimal places for presentation
fn round_score(score: f32) -> f32 {
    (score * 100.0).round() / 100.0
}

//! Pixel sampling from encoded image bytes
//!
//! Decodes an uploaded image and reduces it to a fixed-size grid of RGB
//! samples so that clustering cost is bounded regardless of the original
//! resolution. Decoding is delegated to the `image` crate; all formats it
//! supports with default features (JPEG, PNG, GIF, WebP, BMP, TIFF, ...)
//! are accepted.

use image::imageops::FilterType;
use image::GenericImageView;
use palette::Srgb;
use tracing::debug;

use crate::constants::sampling;
use crate::error::{AnalysisError, Result};

/// Decodes image bytes into a bounded grid of RGB pixel samples
#[derive(Debug, Clone)]
pub struct PixelSource {
    sample_width: u32,
    sample_height: u32,
}

impl Default for PixelSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSource {
    /// Create a pixel source with the default sampling grid
    pub fn new() -> Self {
        Self {
            sample_width: sampling::GRID_WIDTH,
            sample_height: sampling::GRID_HEIGHT,
        }
    }

    /// Create a pixel source with a custom sampling grid
    pub fn with_grid(sample_width: u32, sample_height: u32) -> Self {
        Self {
            sample_width,
            sample_height,
        }
    }

    /// Decode image bytes and return a flat list of RGB samples
    ///
    /// The decoded image is resized to exactly `sample_width x sample_height`
    /// with nearest-neighbor resampling, so the result always contains
    /// `sample_width * sample_height` samples. Sample order carries no
    /// meaning downstream; clustering treats the list as an unordered set.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Encoded image bytes (any format supported by the `image` crate)
    ///
    /// # Returns
    ///
    /// RGB samples with components normalized to [0, 1]
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::DecodeError` if the bytes are not a valid or
    /// supported image.
    pub fn samples_from_bytes(&self, bytes: &[u8]) -> Result<Vec<Srgb>> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AnalysisError::decode("could not decode image bytes", e))?;

        let (orig_width, orig_height) = img.dimensions();
        let rgb = img
            .resize_exact(self.sample_width, self.sample_height, FilterType::Nearest)
            .to_rgb8();

        let samples: Vec<Srgb> = rgb
            .pixels()
            .map(|p| {
                Srgb::new(
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                )
            })
            .collect();

        debug!(
            orig_width,
            orig_height,
            samples = samples.len(),
            "downsampled image to pixel grid"
        );

        Ok(samples)
    }
}

//! RGB to hue/saturation/value conversion
//!
//! Provides the perceptual representation used for harmony scoring:
//! - Hue in degrees, [0, 360)
//! - Saturation and value as percentages, [0, 100]
//!
//! Achromatic colors (max == min) have no meaningful hue; by convention
//! their hue is 0. This keeps scores deterministic for gray centroids.

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// Hue/saturation/value representation of a palette color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    /// Hue angle in degrees, [0, 360)
    pub hue: f32,
    /// Saturation percentage, [0, 100]
    pub saturation: f32,
    /// Value (brightness) percentage, [0, 100]
    pub value: f32,
}

/// Converter between RGB and the HSV scoring representation
#[derive(Debug, Clone, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB (0-255) to HSV
    ///
    /// # Arguments
    ///
    /// * `r`, `g`, `b` - RGB values in range [0, 255]
    pub fn rgb_to_hsv(&self, r: u8, g: u8, b: u8) -> HsvColor {
        self.srgb_to_hsv(Srgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        ))
    }

    /// Convert a normalized RGB color to HSV
    ///
    /// Pure function with no failure modes: value is the max channel,
    /// saturation is chroma over max (0 when max is 0, so black never
    /// produces NaN), and hue uses the standard six-case piecewise
    /// formula with achromatic hue defined as 0.
    ///
    /// # Arguments
    ///
    /// * `srgb` - RGB color with components in [0, 1]
    pub fn srgb_to_hsv(&self, srgb: Srgb) -> HsvColor {
        let (r, g, b) = (srgb.red, srgb.green, srgb.blue);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        let value = max * 100.0;
        let saturation = if max == 0.0 {
            0.0
        } else {
            chroma / max * 100.0
        };

        let hue = if chroma == 0.0 {
            0.0
        } else if max == r {
            (((g - b) / chroma).rem_euclid(6.0)) * 60.0
        } else if max == g {
            ((b - r) / chroma + 2.0) * 60.0
        } else {
            ((r - g) / chroma + 4.0) * 60.0
        };

        HsvColor {
            hue,
            saturation,
            value,
        }
    }

    /// Round a normalized RGB color to integer display channels
    ///
    /// # Returns
    ///
    /// `[r, g, b]` with each channel rounded to the nearest integer in [0, 255]
    pub fn srgb_to_display(&self, srgb: Srgb) -> [u8; 3] {
        [
            (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

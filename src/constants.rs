//! Fixed parameters of the harmony scoring model
//!
//! The scoring weights and hue band thresholds define the harmony model
//! itself and are deliberately not user-adjustable. They live here as
//! named constants so they can be tuned in one place.

/// Pair score weighting
///
/// Each centroid pair gets three sub-scores which are combined as
/// `HUE * hue + VALUE * value + SATURATION * saturation`.
pub mod weights {
    /// Weight of the hue sub-score
    pub const HUE: f32 = 0.5;

    /// Weight of the value (brightness) sub-score
    pub const VALUE: f32 = 0.3;

    /// Weight of the saturation sub-score
    pub const SATURATION: f32 = 0.2;
}

/// Hue distance bands for the hue sub-score
///
/// Circular hue distances fall into three bands: analogous (close hues),
/// complementary (opposite hues), and everything in between. The bands are
/// intentionally not smoothly joined.
pub mod hue_bands {
    /// Maximum circular distance (degrees) treated as analogous
    pub const ANALOGOUS_MAX_DEG: f32 = 30.0;

    /// Minimum circular distance (degrees) treated as complementary
    pub const COMPLEMENTARY_MIN_DEG: f32 = 150.0;

    /// Score awarded to analogous pairs
    pub const ANALOGOUS_SCORE: f32 = 100.0;

    /// Score awarded to complementary pairs
    pub const COMPLEMENTARY_SCORE: f32 = 90.0;

    /// Falloff base for distances outside both bands: score = max(0, base - distance)
    pub const DISSONANT_FALLOFF_DEG: f32 = 60.0;
}

/// Maximum (and vacuous) harmony score
pub const MAX_SCORE: f32 = 100.0;

/// Pixel sampling parameters
pub mod sampling {
    /// Downsampling grid width, bounds clustering cost regardless of input resolution
    pub const GRID_WIDTH: u32 = 100;

    /// Downsampling grid height
    pub const GRID_HEIGHT: u32 = 100;
}

/// Clustering defaults
pub mod clustering {
    /// Number of dominant colors extracted per image
    pub const DEFAULT_PALETTE_SIZE: usize = 3;

    /// Fixed seed so repeated analysis of the same image yields the same score
    pub const DEFAULT_SEED: u64 = 42;

    /// Iteration cap for k-means
    pub const DEFAULT_MAX_ITERATIONS: usize = 20;

    /// Convergence threshold for k-means on normalized RGB
    pub const DEFAULT_CONVERGENCE: f32 = 0.0025;
}

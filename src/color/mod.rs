//! Color space conversion and harmony scoring
//!
//! This module converts RGB centroids to the hue/saturation/value
//! representation and scores how well palette colors combine.

pub mod conversion;
pub mod harmony;

pub use conversion::{ColorConverter, HsvColor};
pub use harmony::{HarmonyScorer, PairScore};

//! Pairwise color harmony scoring
//!
//! Scores how well palette colors combine:
//! - Hue sub-score from circular hue distance, with analogous and
//!   complementary bands treated as harmonious
//! - Value sub-score rewarding brightness contrast
//! - Saturation sub-score penalizing saturation contrast
//!
//! The three hue branches are intentionally discontinuous; the model
//! favors two specific harmonious bands and scores the awkward range
//! in between with a hard falloff.

use crate::color::conversion::HsvColor;
use crate::constants::{hue_bands, weights, MAX_SCORE};

/// Sub-scores and weighted total for one unordered pair of palette colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// Hue sub-score
    pub hue: f32,
    /// Value (brightness contrast) sub-score
    pub value: f32,
    /// Saturation sub-score
    pub saturation: f32,
    /// Weighted combination of the three sub-scores
    pub total: f32,
}

/// Harmony scorer with configurable sub-score weights
#[derive(Debug, Clone)]
pub struct HarmonyScorer {
    hue_weight: f32,
    value_weight: f32,
    saturation_weight: f32,
}

impl Default for HarmonyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonyScorer {
    /// Create a harmony scorer with the default model weights
    pub fn new() -> Self {
        Self {
            hue_weight: weights::HUE,
            value_weight: weights::VALUE,
            saturation_weight: weights::SATURATION,
        }
    }

    /// Create a harmony scorer with custom weights
    pub fn with_weights(hue_weight: f32, value_weight: f32, saturation_weight: f32) -> Self {
        Self {
            hue_weight,
            value_weight,
            saturation_weight,
        }
    }

    /// Circular distance between two hue angles, always in [0, 180]
    fn circular_distance(h1: f32, h2: f32) -> f32 {
        let diff = (h1 - h2).abs().rem_euclid(360.0);
        diff.min(360.0 - diff)
    }

    /// Score the hue relationship between two colors
    ///
    /// Distances up to 30 degrees are analogous (score 100), distances of
    /// 150 degrees or more are complementary (score 90, covering raw
    /// differences in [150, 210]), and everything in between scores
    /// `max(0, 60 - distance)`. Symmetric in its arguments.
    pub fn hue_score(&self, h1: f32, h2: f32) -> f32 {
        let distance = Self::circular_distance(h1, h2);

        if distance <= hue_bands::ANALOGOUS_MAX_DEG {
            hue_bands::ANALOGOUS_SCORE
        } else if distance >= hue_bands::COMPLEMENTARY_MIN_DEG {
            hue_bands::COMPLEMENTARY_SCORE
        } else {
            (hue_bands::DISSONANT_FALLOFF_DEG - distance).max(0.0)
        }
    }

    /// Score the brightness relationship: larger contrast scores higher
    pub fn value_score(&self, v1: f32, v2: f32) -> f32 {
        (v1 - v2).abs()
    }

    /// Score the saturation relationship: larger contrast scores lower
    pub fn saturation_score(&self, s1: f32, s2: f32) -> f32 {
        MAX_SCORE - (s1 - s2).abs()
    }

    /// Compute the weighted pair score for two colors
    pub fn pair_score(&self, a: HsvColor, b: HsvColor) -> PairScore {
        let hue = self.hue_score(a.hue, b.hue);
        let value = self.value_score(a.value, b.value);
        let saturation = self.saturation_score(a.saturation, b.saturation);

        PairScore {
            hue,
            value,
            saturation,
            total: self.hue_weight * hue
                + self.value_weight * value
                + self.saturation_weight * saturation,
        }
    }

    /// All unordered index pairs (i, j) with i < j over `len` colors
    pub fn index_pairs(len: usize) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..len {
            for j in (i + 1)..len {
                pairs.push((i, j));
            }
        }
        pairs
    }

    /// Aggregate harmony score for a palette
    ///
    /// The arithmetic mean of all pairwise scores. A palette with fewer
    /// than two colors has no pairs and is vacuously harmonious, scoring
    /// exactly the maximum.
    pub fn palette_score(&self, colors: &[HsvColor]) -> f32 {
        let pairs = Self::index_pairs(colors.len());
        if pairs.is_empty() {
            return MAX_SCORE;
        }

        let sum: f32 = pairs
            .iter()
            .map(|&(i, j)| self.pair_score(colors[i], colors[j]).total)
            .sum();

        sum / pairs.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(hue: f32, saturation: f32, value: f32) -> HsvColor {
        HsvColor {
            hue,
            saturation,
            value,
        }
    }

    #[test]
    fn test_hue_score_analogous_band() {
        let scorer = HarmonyScorer::new();

        assert_eq!(scorer.hue_score(0.0, 0.0), 100.0);
        assert_eq!(scorer.hue_score(0.0, 30.0), 100.0);
        assert_eq!(scorer.hue_score(10.0, 25.0), 100.0);
        // Wraps around 360
        assert_eq!(scorer.hue_score(350.0, 10.0), 100.0);
    }

    #[test]
    fn test_hue_score_complementary_band() {
        let scorer = HarmonyScorer::new();

        assert_eq!(scorer.hue_score(0.0, 150.0), 90.0);
        assert_eq!(scorer.hue_score(0.0, 180.0), 90.0);
        // Raw difference 210 is circular distance 150
        assert_eq!(scorer.hue_score(0.0, 210.0), 90.0);
    }

    #[test]
    fn test_hue_score_awkward_range() {
        let scorer = HarmonyScorer::new();

        // One degree past the analogous band
        assert_eq!(scorer.hue_score(0.0, 31.0), 29.0);
        // Past the falloff, clamped at zero
        assert_eq!(scorer.hue_score(0.0, 60.0), 0.0);
        assert_eq!(scorer.hue_score(0.0, 100.0), 0.0);
        // Raw difference 211 is circular distance 149, still the awkward branch
        assert_eq!(scorer.hue_score(0.0, 211.0), 0.0);
        // Just short of complementary
        assert_eq!(scorer.hue_score(0.0, 149.0), 0.0);
    }

    #[test]
    fn test_hue_score_is_symmetric() {
        let scorer = HarmonyScorer::new();

        for &(h1, h2) in &[
            (0.0, 31.0),
            (15.0, 200.0),
            (350.0, 10.0),
            (90.0, 270.0),
            (123.4, 321.0),
        ] {
            assert_eq!(scorer.hue_score(h1, h2), scorer.hue_score(h2, h1));
        }
    }

    #[test]
    fn test_value_score_is_contrast() {
        let scorer = HarmonyScorer::new();

        assert_eq!(scorer.value_score(50.0, 50.0), 0.0);
        assert_eq!(scorer.value_score(0.0, 100.0), 100.0);
        assert_eq!(scorer.value_score(30.0, 70.0), 40.0);
        // Monotone in the absolute difference
        assert!(scorer.value_score(0.0, 80.0) > scorer.value_score(0.0, 40.0));
    }

    #[test]
    fn test_saturation_score_penalizes_contrast() {
        let scorer = HarmonyScorer::new();

        assert_eq!(scorer.saturation_score(50.0, 50.0), 100.0);
        assert_eq!(scorer.saturation_score(0.0, 100.0), 0.0);
        // Antitone in the absolute difference
        assert!(scorer.saturation_score(0.0, 20.0) > scorer.saturation_score(0.0, 60.0));
    }

    #[test]
    fn test_sub_scores_stay_in_range() {
        let scorer = HarmonyScorer::new();

        for i in 0..=10 {
            for j in 0..=10 {
                let (a, b) = (i as f32 * 10.0, j as f32 * 10.0);
                let v = scorer.value_score(a, b);
                let s = scorer.saturation_score(a, b);
                assert!((0.0..=100.0).contains(&v));
                assert!((0.0..=100.0).contains(&s));
            }
        }
    }

    #[test]
    fn test_pair_score_weighting() {
        let scorer = HarmonyScorer::new();
        let a = hsv(0.0, 100.0, 100.0);
        let b = hsv(0.0, 100.0, 100.0);

        let pair = scorer.pair_score(a, b);
        assert_eq!(pair.hue, 100.0);
        assert_eq!(pair.value, 0.0);
        assert_eq!(pair.saturation, 100.0);
        // 0.5 * 100 + 0.3 * 0 + 0.2 * 100
        assert!((pair.total - 70.0).abs() < 1e-5);
    }

    #[test]
    fn test_index_pairs() {
        assert!(HarmonyScorer::index_pairs(0).is_empty());
        assert!(HarmonyScorer::index_pairs(1).is_empty());
        assert_eq!(HarmonyScorer::index_pairs(2), vec![(0, 1)]);
        assert_eq!(
            HarmonyScorer::index_pairs(4).len(),
            6 // C(4, 2)
        );

        // No self-pairs, no repeats
        let pairs = HarmonyScorer::index_pairs(5);
        for &(i, j) in &pairs {
            assert!(i < j);
        }
    }

    #[test]
    fn test_palette_score_vacuous_cases() {
        let scorer = HarmonyScorer::new();

        assert_eq!(scorer.palette_score(&[]), 100.0);
        assert_eq!(scorer.palette_score(&[hsv(123.0, 50.0, 50.0)]), 100.0);
    }

    #[test]
    fn test_palette_score_identical_colors() {
        let scorer = HarmonyScorer::new();
        let colors = vec![hsv(200.0, 60.0, 40.0); 3];

        // Every pair scores 0.5 * 100 + 0.3 * 0 + 0.2 * 100 = 70
        let score = scorer.palette_score(&colors);
        assert!((score - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_palette_score_mixed_bands() {
        let scorer = HarmonyScorer::new();
        // Hues 0, 180, 0 with equal saturation and value:
        // pairs score 65, 65, 70 for a mean of 66.666...
        let colors = vec![
            hsv(0.0, 100.0, 100.0),
            hsv(180.0, 100.0, 100.0),
            hsv(0.0, 100.0, 100.0),
        ];

        let score = scorer.palette_score(&colors);
        assert!((score - 200.0 / 3.0).abs() < 1e-4);
    }
}

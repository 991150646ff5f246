//! Dominant-color clustering
//!
//! Groups pixel samples into K representative colors. The production
//! implementation delegates to the `kmeans_colors` crate; the
//! [`ColorClusterer`] trait keeps the pipeline testable with a
//! deterministic fake in place of real clustering.

use kmeans_colors::get_kmeans;
use palette::Srgb;

use crate::constants::clustering;
use crate::error::Result;

/// Capability interface for grouping pixel samples into centroids
///
/// Implementations must be deterministic: identical samples, `k`, and
/// `seed` must produce identical centroids, otherwise repeated analysis
/// of the same image would yield different scores.
pub trait ColorClusterer: Send + Sync {
    /// Group `samples` into exactly `k` centroid colors
    ///
    /// Centroid channels may be fractional. When the samples contain fewer
    /// distinct colors than `k`, duplicate or degenerate centroids are
    /// returned rather than an error.
    fn cluster(&self, samples: &[Srgb], k: usize, seed: u64) -> Result<Vec<Srgb>>;
}

/// k-means clusterer over normalized RGB samples
#[derive(Debug, Clone)]
pub struct KmeansClusterer {
    max_iterations: usize,
    convergence: f32,
}

impl Default for KmeansClusterer {
    fn default() -> Self {
        Self::new()
    }
}

impl KmeansClusterer {
    /// Create a k-means clusterer with default parameters
    pub fn new() -> Self {
        Self {
            max_iterations: clustering::DEFAULT_MAX_ITERATIONS,
            convergence: clustering::DEFAULT_CONVERGENCE,
        }
    }

    /// Create a k-means clusterer with custom iteration and convergence limits
    pub fn with_params(max_iterations: usize, convergence: f32) -> Self {
        Self {
            max_iterations,
            convergence,
        }
    }
}

impl ColorClusterer for KmeansClusterer {
    fn cluster(&self, samples: &[Srgb], k: usize, seed: u64) -> Result<Vec<Srgb>> {
        if k == 0 || samples.is_empty() {
            return Ok(Vec::new());
        }

        let result = get_kmeans(
            k,
            self.max_iterations,
            self.convergence,
            false,
            samples,
            seed,
        );

        Ok(result.centroids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block(color: Srgb, count: usize) -> Vec<Srgb> {
        vec![color; count]
    }

    #[test]
    fn test_zero_k_yields_no_centroids() {
        let clusterer = KmeansClusterer::new();
        let samples = sample_block(Srgb::new(0.5, 0.5, 0.5), 50);

        let centroids = clusterer.cluster(&samples, 0, 42).unwrap();
        assert!(centroids.is_empty());
    }

    #[test]
    fn test_centroid_count_matches_k() {
        let clusterer = KmeansClusterer::new();
        let mut samples = sample_block(Srgb::new(1.0, 0.0, 0.0), 100);
        samples.extend(sample_block(Srgb::new(0.0, 0.0, 1.0), 100));

        let centroids = clusterer.cluster(&samples, 3, 42).unwrap();
        assert_eq!(centroids.len(), 3);
    }

    #[test]
    fn test_degenerate_input_still_yields_k_centroids() {
        // Fewer distinct colors than k
        let clusterer = KmeansClusterer::new();
        let samples = sample_block(Srgb::new(0.3, 0.6, 0.9), 200);

        let centroids = clusterer.cluster(&samples, 3, 42).unwrap();
        assert_eq!(centroids.len(), 3);
        for c in centroids {
            assert!((c.red - 0.3).abs() < 1e-4);
            assert!((c.green - 0.6).abs() < 1e-4);
            assert!((c.blue - 0.9).abs() < 1e-4);
            assert!(!c.red.is_nan() && !c.green.is_nan() && !c.blue.is_nan());
        }
    }

    #[test]
    fn test_clustering_is_deterministic_for_fixed_seed() {
        let clusterer = KmeansClusterer::new();
        let mut samples = Vec::new();
        for i in 0..300 {
            let t = i as f32 / 300.0;
            samples.push(Srgb::new(t, 1.0 - t, 0.5));
        }

        let a = clusterer.cluster(&samples, 3, 7).unwrap();
        let b = clusterer.cluster(&samples, 3, 7).unwrap();

        assert_eq!(a.len(), b.len());
        for (ca, cb) in a.iter().zip(b.iter()) {
            assert_eq!(ca.red.to_bits(), cb.red.to_bits());
            assert_eq!(ca.green.to_bits(), cb.green.to_bits());
            assert_eq!(ca.blue.to_bits(), cb.blue.to_bits());
        }
    }

    #[test]
    fn test_two_clusters_are_separated() {
        let clusterer = KmeansClusterer::new();
        let mut samples = sample_block(Srgb::new(0.95, 0.05, 0.05), 150);
        samples.extend(sample_block(Srgb::new(0.05, 0.05, 0.95), 150));

        let centroids = clusterer.cluster(&samples, 2, 42).unwrap();
        assert_eq!(centroids.len(), 2);

        // One centroid near red, the other near blue
        let mut reds: Vec<f32> = centroids.iter().map(|c| c.red).collect();
        reds.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!(reds[0] < 0.3);
        assert!(reds[1] > 0.7);
    }
}

//! K-means partitioning of the color samples
//!
//! Runs seeded k-means over the RGB samples with multiple restarts and keeps
//! the lowest-inertia run. The seed is local to the call, so repeated
//! extractions reproduce identical clusters across processes. Restart seeds
//! are derived from the base seed, which keeps the run selection
//! deterministic as well.

use kmeans_colors::{get_kmeans_hamerly, Kmeans};
use palette::Srgb;

use crate::constants::clustering::{
    KMEANS_CONVERGE, KMEANS_MAX_ITER, KMEANS_RESTARTS, KMEANS_SEED,
};

/// A color cluster produced by k-means
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCluster {
    /// Cluster centroid in RGB, each channel in [0, 255]
    pub centroid: [f32; 3],
    /// Fraction of samples assigned to this cluster
    pub probability: f64,
}

/// Partition samples into up to `cluster_count` clusters
///
/// The effective cluster count is `min(cluster_count, samples.len())`.
/// Returned clusters keep the centroid order of the winning run, and their
/// probability masses sum to 1.0 over the sample set. Clusters that end a
/// run with no assigned samples are omitted.
pub fn cluster_colors(samples: &[Srgb<f32>], cluster_count: usize) -> Vec<ColorCluster> {
    if samples.is_empty() || cluster_count == 0 {
        return Vec::new();
    }

    let k = cluster_count.min(samples.len());

    let mut best: Kmeans<Srgb<f32>> = get_kmeans_hamerly(
        k,
        KMEANS_MAX_ITER,
        KMEANS_CONVERGE,
        false,
        samples,
        KMEANS_SEED,
    );
    for run in 1..KMEANS_RESTARTS {
        let candidate = get_kmeans_hamerly(
            k,
            KMEANS_MAX_ITER,
            KMEANS_CONVERGE,
            false,
            samples,
            KMEANS_SEED + run,
        );
        if candidate.score < best.score {
            best = candidate;
        }
    }

    let mut counts = vec![0usize; best.centroids.len()];
    for &index in &best.indices {
        counts[index as usize] += 1;
    }
    let total = best.indices.len() as f64;

    best.centroids
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(centroid, count)| ColorCluster {
            centroid: [
                centroid.red * 255.0,
                centroid.green * 255.0,
                centroid.blue * 255.0,
            ],
            probability: count as f64 / total,
        })
        .collect()
}

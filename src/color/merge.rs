//! Hue-based cluster merging with probability filtering
//!
//! K-means routinely splits one garment color across several clusters
//! (lighting gradients, fabric texture). Clusters whose hues sit within a
//! small angular window are folded into a single reported group, groups
//! below the probability floor are dropped, and survivors are ranked by
//! mass.

use crate::color::clustering::ColorCluster;
use crate::color::conversion::{hue_degrees, hue_distance};

/// A reported color group after hue merging
#[derive(Debug, Clone, PartialEq)]
pub struct MergedColorGroup {
    /// Mass-weighted average of member centroids, RGB in [0, 255]
    pub centroid: [f32; 3],
    /// Summed probability mass of the member clusters
    pub probability: f64,
}

/// Merge hue-adjacent clusters and rank the survivors by mass
///
/// Grouping is a single greedy pass in cluster index order: each unclaimed
/// cluster opens a group and claims every later unclaimed cluster within
/// the hue window. A cluster claimed by an earlier group never joins a
/// later one, even if closer in hue; downstream color counts depend on this
/// ordering, so it must not be replaced with a transitive clustering.
///
/// Returns the empty list when every group falls below `min_probability`
/// or when `clusters` is empty.
pub fn merge_by_hue(
    clusters: &[ColorCluster],
    threshold_degrees: f32,
    min_probability: f64,
) -> Vec<MergedColorGroup> {
    if clusters.is_empty() {
        return Vec::new();
    }

    let hues: Vec<f32> = clusters
        .iter()
        .map(|cluster| hue_degrees(cluster.centroid))
        .collect();

    let mut claimed = vec![false; clusters.len()];
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for i in 0..clusters.len() {
        if claimed[i] {
            continue;
        }
        claimed[i] = true;
        let mut members = vec![i];

        for j in (i + 1)..clusters.len() {
            if claimed[j] {
                continue;
            }
            if hue_distance(hues[i], hues[j]) < threshold_degrees {
                claimed[j] = true;
                members.push(j);
            }
        }

        groups.push(members);
    }

    let mut merged: Vec<MergedColorGroup> = Vec::new();
    for members in groups {
        let total: f64 = members.iter().map(|&idx| clusters[idx].probability).sum();
        if total < min_probability {
            continue;
        }

        let mut centroid = [0.0f64; 3];
        for &idx in &members {
            let weight = clusters[idx].probability / total;
            for channel in 0..3 {
                centroid[channel] += f64::from(clusters[idx].centroid[channel]) * weight;
            }
        }

        merged.push(MergedColorGroup {
            centroid: [centroid[0] as f32, centroid[1] as f32, centroid[2] as f32],
            probability: total,
        });
    }

    merged.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    merged
}

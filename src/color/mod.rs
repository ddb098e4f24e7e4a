//! Colorimetric stages
//!
//! This module turns the selected garment pixels into ranked dominant
//! colors: sampling, k-means clustering, hue-based merging, and the hex
//! output rendering.

pub mod clustering;
pub mod conversion;
pub mod merge;
pub mod sampling;

pub use clustering::{cluster_colors, ColorCluster};
pub use merge::{merge_by_hue, MergedColorGroup};
pub use sampling::sample_pixels;

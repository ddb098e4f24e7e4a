//! Pipeline parameters for dominant-color extraction
//!
//! This module contains compile-time constants for each extraction stage.
//! The clustering and merge defaults follow the probabilistic clothing-color
//! modeling literature (13 clusters, 15 degree hue window, 5% mass floor).

/// Default extraction parameters
pub mod extraction {
    /// Number of color clusters to extract
    pub const CLUSTER_COUNT: usize = 13;

    /// Hue window (degrees) under which two clusters merge
    pub const HUE_MERGE_THRESHOLD_DEGREES: f32 = 15.0;

    /// Minimum probability mass for a merged group to be reported
    pub const MIN_PROBABILITY: f64 = 0.05;
}

/// Garment-category crop policy, as fractions of original image height
pub mod region {
    /// Upper-body garments: keep the top portion
    pub const UPPER_BODY_END: f64 = 0.65;

    /// Lower-body garments: keep rows from here down
    pub const LOWER_BODY_START: f64 = 0.35;

    /// Footwear: keep rows from here down
    pub const FOOTWEAR_START: f64 = 0.75;

    /// Unrecognized category: central band start
    pub const FALLBACK_START: f64 = 0.15;

    /// Unrecognized category: central band end
    pub const FALLBACK_END: f64 = 0.85;
}

/// Background segmentation parameters
pub mod segmentation {
    /// Seed rectangle margin on each side, as a fraction of the dimension
    pub const SEED_RECT_MARGIN: f64 = 0.05;

    /// Seed rectangle span, as a fraction of the dimension
    pub const SEED_RECT_SPAN: f64 = 0.90;

    /// GrabCut refinement iterations
    pub const GRABCUT_ITERATIONS: i32 = 5;

    /// Length of the GrabCut background/foreground GMM model buffers
    pub const MODEL_BUFFER_LEN: i32 = 65;
}

/// Pixel sampling thresholds
pub mod sampling {
    /// Exclusive lower grayscale bound for unmasked sampling
    pub const LUMA_MIN: u8 = 20;

    /// Exclusive upper grayscale bound for unmasked sampling
    pub const LUMA_MAX: u8 = 235;

    /// Minimum channel sum; excludes near-black shadow residue
    pub const MIN_CHANNEL_SUM: u32 = 30;

    /// Absolute floor on usable samples before clustering
    pub const MIN_SAMPLE_FLOOR: usize = 10;
}

/// K-means clustering parameters
pub mod clustering {
    /// Base seed for the per-call random source
    pub const KMEANS_SEED: u64 = 42;

    /// Number of restarts; the lowest-inertia run is kept
    pub const KMEANS_RESTARTS: u64 = 10;

    /// Iteration cap per run
    pub const KMEANS_MAX_ITER: usize = 300;

    /// Convergence threshold for RGB-space centroids
    pub const KMEANS_CONVERGE: f32 = 0.0025;
}

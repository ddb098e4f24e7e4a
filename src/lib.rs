//! # Garment Colors
//!
//! A Rust crate for extracting ranked dominant colors from e-commerce
//! garment photographs.
//!
//! This library turns one decoded product photograph plus a garment-category
//! hint into an ordered list of representative colors by:
//! - Cropping to the image region likely containing the garment
//! - Isolating the garment from the studio background with GrabCut
//! - Clustering the remaining pixels with seeded k-means
//! - Merging hue-adjacent clusters and filtering by probability mass
//!
//! Image fetching and decoding, color naming, and persistence are left to
//! external collaborators; the entry point takes an already-decoded RGB
//! raster and returns 8-digit hex strings with their probability masses.
//! An empty result is a normal outcome for images that yield too few usable
//! pixels, not an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use garment_colors::{extract_dominant_colors, ExtractionConfig};
//!
//! let raster = image::open("product.jpg")?.to_rgb8();
//! let colors = extract_dominant_colors(&raster, Some("T-Shirt"), &ExtractionConfig::default())?;
//! for color in &colors {
//!     println!("{} ({:.1}%)", color.hex, color.probability * 100.0);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;

pub use config::ExtractionConfig;
pub use error::{ExtractionError, Result};

/// One reported dominant color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedColor {
    /// Lowercase `#rrggbbaa` with the alpha channel fixed to `ff`
    pub hex: String,
    /// Fraction of sampled pixels attributed to this color
    pub probability: f64,
}

/// Extract ranked dominant colors from a product photograph
///
/// Runs the full pipeline: category-driven cropping, optional GrabCut
/// foreground isolation, pixel sampling, seeded k-means clustering, and
/// hue-based merging. The result is sorted descending by probability mass
/// and holds at most `config.cluster_count` entries.
///
/// The call is a pure function of its inputs for a fixed clustering seed
/// and borrows the raster immutably, so concurrent extractions need no
/// synchronization.
///
/// # Arguments
///
/// * `raster` - Decoded RGB image, owned by this call
/// * `garment_hint` - Optional category label (e.g. "T-Shirt", "Trousers")
/// * `config` - Per-call extraction parameters
///
/// # Errors
///
/// Returns `ExtractionError::InvalidParameter` for misconfiguration.
/// Image-content-driven conditions never error: segmentation failures
/// degrade to whole-frame sampling, and an image with too few usable
/// pixels (or no group above the probability floor) yields `Ok` with an
/// empty list.
pub fn extract_dominant_colors(
    raster: &RgbImage,
    garment_hint: Option<&str>,
    config: &ExtractionConfig,
) -> Result<Vec<ExtractedColor>> {
    config.validate()?;

    let cropped = detection::select_region(raster, garment_hint);

    let samples = if config.remove_background {
        let mask = detection::segment_foreground(&cropped);
        color::sample_pixels(&cropped, Some(&mask))
    } else {
        color::sample_pixels(&cropped, None)
    };

    let required = constants::sampling::MIN_SAMPLE_FLOOR.max(config.cluster_count);
    if samples.len() < required {
        debug!(
            samples = samples.len(),
            required, "not enough valid pixels after filtering"
        );
        return Ok(Vec::new());
    }

    let clusters = color::cluster_colors(&samples, config.cluster_count);
    let groups = color::merge_by_hue(
        &clusters,
        config.hue_merge_threshold,
        config.min_probability,
    );

    Ok(groups
        .into_iter()
        .map(|group| ExtractedColor {
            hex: color::conversion::rgb_to_hex(group.centroid),
            probability: group.probability,
        })
        .collect())
}

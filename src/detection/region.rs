//! Garment-category-aware region selection
//!
//! Product photographs frame the model head to toe, so the garment named by
//! the category hint usually occupies a predictable vertical band. Cropping
//! to that band before segmentation keeps skin, hair, and unrelated garments
//! out of the color statistics:
//! - Upper-body garments: top 65% of the image
//! - Lower-body garments: bottom 65%
//! - Full-body garments: entire image
//! - Footwear: bottom 25%
//! - Unrecognized or missing hints: central band, rows 15%-85%
//!
//! Selection never fails; an empty computed crop falls back to the full
//! raster.

use image::{imageops, RgbImage};
use tracing::debug;

use crate::constants::region::{
    FALLBACK_END, FALLBACK_START, FOOTWEAR_START, LOWER_BODY_START, UPPER_BODY_END,
};

const UPPER_BODY_KEYWORDS: &[&str] = &[
    "shirt", "top", "blouse", "jacket", "coat", "hoodie", "sweater",
];

const LOWER_BODY_KEYWORDS: &[&str] = &[
    "trouser", "pant", "jean", "short", "skirt", "legging",
];

const FULL_BODY_KEYWORDS: &[&str] = &["dress", "gown", "saree", "jumpsuit", "overall"];

const FOOTWEAR_KEYWORDS: &[&str] = &["shoe", "footwear", "sandal", "boot", "sneaker"];

/// Vertical crop policy derived from a garment-category hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CropPolicy {
    UpperBody,
    LowerBody,
    FullBody,
    Footwear,
    CentralBand,
}

impl CropPolicy {
    /// Match a hint against the keyword tables, case-insensitively
    fn from_hint(hint: Option<&str>) -> Self {
        let Some(hint) = hint else {
            return CropPolicy::CentralBand;
        };
        let hint = hint.to_lowercase();

        let matches = |keywords: &[&str]| keywords.iter().any(|keyword| hint.contains(keyword));

        if matches(UPPER_BODY_KEYWORDS) {
            CropPolicy::UpperBody
        } else if matches(LOWER_BODY_KEYWORDS) {
            CropPolicy::LowerBody
        } else if matches(FULL_BODY_KEYWORDS) {
            CropPolicy::FullBody
        } else if matches(FOOTWEAR_KEYWORDS) {
            CropPolicy::Footwear
        } else {
            CropPolicy::CentralBand
        }
    }

    /// Row range for this policy on an image of the given height,
    /// truncating fractional rows toward zero
    fn row_range(self, height: u32) -> (u32, u32) {
        let at = |fraction: f64| (f64::from(height) * fraction) as u32;
        match self {
            CropPolicy::UpperBody => (0, at(UPPER_BODY_END)),
            CropPolicy::LowerBody => (at(LOWER_BODY_START), height),
            CropPolicy::FullBody => (0, height),
            CropPolicy::Footwear => (at(FOOTWEAR_START), height),
            CropPolicy::CentralBand => (at(FALLBACK_START), at(FALLBACK_END)),
        }
    }
}

/// Crop the raster to the region likely containing the hinted garment
///
/// The width is never changed. Returns the full raster when the computed
/// crop would be empty.
pub fn select_region(raster: &RgbImage, hint: Option<&str>) -> RgbImage {
    let (width, height) = raster.dimensions();
    let policy = CropPolicy::from_hint(hint);
    let (start, end) = policy.row_range(height);

    if end <= start || width == 0 {
        debug!(?policy, ?hint, "computed crop is empty, using full raster");
        return raster.clone();
    }

    debug!(?policy, ?hint, rows = ?(start..end), "cropping to garment region");
    imageops::crop_imm(raster, 0, start, width, end - start).to_image()
}

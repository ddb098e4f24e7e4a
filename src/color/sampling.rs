//! Pixel sampling with shadow and background filtering
//!
//! Collects the RGB samples that feed clustering. With a foreground mask the
//! mask decides membership; without one, a grayscale window keeps mid-tone
//! pixels and rejects studio-white backdrops and deep shadows. Either way,
//! near-black residue (channel sum of 30 or less) is excluded. Positions are
//! discarded; only the color multiset is kept.

use image::RgbImage;
use palette::Srgb;
use rayon::prelude::*;

use crate::constants::sampling::{LUMA_MAX, LUMA_MIN, MIN_CHANNEL_SUM};
use crate::detection::background::ForegroundMask;

/// Extract the filtered RGB samples used for clustering
///
/// With `mask` present, a pixel qualifies if it is foreground; otherwise its
/// rounded BT.601 luminance must fall strictly between the grayscale bounds.
/// Both paths also require the channel sum to exceed the near-black floor.
pub fn sample_pixels(raster: &RgbImage, mask: Option<&ForegroundMask>) -> Vec<Srgb<f32>> {
    let kept: Vec<[u8; 3]> = match mask {
        Some(mask) => raster
            .enumerate_pixels()
            .filter(|(x, y, _)| mask.is_foreground(*x, *y))
            .map(|(_, _, pixel)| pixel.0)
            .filter(above_black_floor)
            .collect(),
        None => raster
            .pixels()
            .map(|pixel| pixel.0)
            .filter(in_grayscale_window)
            .filter(above_black_floor)
            .collect(),
    };

    kept.par_iter()
        .map(|rgb| {
            Srgb::new(
                f32::from(rgb[0]) / 255.0,
                f32::from(rgb[1]) / 255.0,
                f32::from(rgb[2]) / 255.0,
            )
        })
        .collect()
}

/// Rounded BT.601 grayscale luminance
fn luminance(rgb: &[u8; 3]) -> u8 {
    let y = 0.299 * f32::from(rgb[0]) + 0.587 * f32::from(rgb[1]) + 0.114 * f32::from(rgb[2]);
    y.round() as u8
}

fn in_grayscale_window(rgb: &[u8; 3]) -> bool {
    let luma = luminance(rgb);
    luma > LUMA_MIN && luma < LUMA_MAX
}

fn above_black_floor(rgb: &[u8; 3]) -> bool {
    let sum = u32::from(rgb[0]) + u32::from(rgb[1]) + u32::from(rgb[2]);
    sum > MIN_CHANNEL_SUM
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_unmasked_rejects_black_and_white() {
        let mut raster = RgbImage::from_pixel(3, 1, Rgb([128, 64, 32]));
        raster.put_pixel(1, 0, Rgb([0, 0, 0]));
        raster.put_pixel(2, 0, Rgb([255, 255, 255]));

        let samples = sample_pixels(&raster, None);
        assert_eq!(samples.len(), 1);
        assert!((samples[0].red - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_unmasked_rejects_dark_shadow_pixels() {
        // Luminance 11 sits below the grayscale window even though the
        // channel sum clears the black floor.
        let raster = RgbImage::from_pixel(2, 2, Rgb([10, 10, 15]));
        assert!(sample_pixels(&raster, None).is_empty());
    }

    #[test]
    fn test_mask_overrides_grayscale_window() {
        // Pure white fails the unmasked window but qualifies under a mask.
        let raster = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        assert!(sample_pixels(&raster, None).is_empty());

        let mask = ForegroundMask::full(2, 2);
        assert_eq!(sample_pixels(&raster, Some(&mask)).len(), 4);
    }

    #[test]
    fn test_mask_still_applies_black_floor() {
        let raster = RgbImage::from_pixel(2, 2, Rgb([5, 5, 5]));
        let mask = ForegroundMask::full(2, 2);
        assert!(sample_pixels(&raster, Some(&mask)).is_empty());
    }

    #[test]
    fn test_channel_sum_boundary() {
        // Sum exactly 30 is excluded; 31 passes under a mask.
        let mask = ForegroundMask::full(1, 1);
        let at_floor = RgbImage::from_pixel(1, 1, Rgb([10, 10, 10]));
        assert!(sample_pixels(&at_floor, Some(&mask)).is_empty());

        let above_floor = RgbImage::from_pixel(1, 1, Rgb([10, 10, 11]));
        assert_eq!(sample_pixels(&above_floor, Some(&mask)).len(), 1);
    }

    #[test]
    fn test_samples_are_normalized() {
        let raster = RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]));
        let samples = sample_pixels(&raster, None);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0], Srgb::new(1.0, 0.0, 0.0));
    }
}

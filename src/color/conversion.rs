//! Color space helpers for cluster merging and output formatting
//!
//! Provides the hue geometry used to decide which clusters are visually
//! indistinguishable, and the hex rendering of final centroids.

use palette::{FromColor, Hsv, Srgb};

/// HSV hue of an RGB color, in degrees within [0, 360)
///
/// Channels are expected in [0, 255].
pub fn hue_degrees(rgb: [f32; 3]) -> f32 {
    let srgb = Srgb::new(rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0);
    let hsv = Hsv::from_color(srgb);
    let degrees = hsv.hue.into_positive_degrees();
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Circular distance between two hues, in degrees
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// Render an RGB centroid as a lowercase 8-digit hex string with the alpha
/// channel fixed to `ff`
///
/// Channels are clamped to [0, 255] and truncated.
pub fn rgb_to_hex(rgb: [f32; 3]) -> String {
    let r = rgb[0].clamp(0.0, 255.0) as u8;
    let g = rgb[1].clamp(0.0, 255.0) as u8;
    let b = rgb[2].clamp(0.0, 255.0) as u8;
    format!("#{r:02x}{g:02x}{b:02x}ff")
}

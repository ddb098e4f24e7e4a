//! Foreground isolation via iterative GrabCut segmentation
//!
//! Product photographs place the garment roughly centered on a studio
//! background. The segmenter seeds GrabCut's foreground/background Gaussian
//! mixture models from an interior rectangle (5% margins on each side) and
//! refines pixel labels for a fixed number of iterations. Pixels labeled
//! definite or probable foreground form the mask.
//!
//! Segmentation never fails the pipeline: any OpenCV error or degenerate
//! geometry degrades to a mask covering the entire region.

use image::RgbImage;
use opencv::{
    core::{Mat, Rect, Vec3b, CV_64FC1, CV_8UC1, CV_8UC3},
    imgproc,
    prelude::*,
};
use tracing::{debug, warn};

use crate::constants::segmentation::{
    GRABCUT_ITERATIONS, MODEL_BUFFER_LEN, SEED_RECT_MARGIN, SEED_RECT_SPAN,
};
use crate::error::{ExtractionError, Result};

/// Binary foreground indicator matching the cropped raster's dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForegroundMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl ForegroundMask {
    /// Mask marking the entire region as foreground
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![true; (width as usize) * (height as usize)],
        }
    }

    /// Mask width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is foreground; out-of-bounds
    /// coordinates are background
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Number of foreground pixels
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&fg| fg).count()
    }

    /// Fraction of the region labeled foreground
    pub fn coverage(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.foreground_count() as f64 / self.data.len() as f64
    }
}

/// Compute a foreground mask over the (cropped) raster
///
/// Failures degrade to a full-frame foreground mask rather than
/// propagating; an unusable mask and an absent mask sample the same
/// pixels downstream.
pub fn segment_foreground(raster: &RgbImage) -> ForegroundMask {
    let (width, height) = raster.dimensions();
    match run_grab_cut(raster) {
        Ok(mask) => {
            debug!(coverage = mask.coverage(), "foreground mask computed");
            mask
        }
        Err(err) => {
            warn!(error = %err, "segmentation degraded to full-frame foreground");
            ForegroundMask::full(width, height)
        }
    }
}

fn run_grab_cut(raster: &RgbImage) -> Result<ForegroundMask> {
    let (width, height) = raster.dimensions();
    let rect = seed_rectangle(width, height)?;
    let image = raster_to_mat(raster)?;

    let mut mask = new_mat(height as i32, width as i32, CV_8UC1, "mask")?;
    let mut bgd_model = new_mat(1, MODEL_BUFFER_LEN, CV_64FC1, "background model")?;
    let mut fgd_model = new_mat(1, MODEL_BUFFER_LEN, CV_64FC1, "foreground model")?;

    imgproc::grab_cut(
        &image,
        &mut mask,
        rect,
        &mut bgd_model,
        &mut fgd_model,
        GRABCUT_ITERATIONS,
        imgproc::GC_INIT_WITH_RECT,
    )
    .map_err(|e| ExtractionError::segmentation("grab_cut", e))?;

    let mut data = vec![false; (width as usize) * (height as usize)];
    for row in 0..height as i32 {
        for col in 0..width as i32 {
            let label = *mask
                .at_2d::<u8>(row, col)
                .map_err(|e| ExtractionError::segmentation("mask readback", e))?;
            let foreground = i32::from(label) == imgproc::GC_FGD
                || i32::from(label) == imgproc::GC_PR_FGD;
            data[(row as usize) * (width as usize) + (col as usize)] = foreground;
        }
    }

    Ok(ForegroundMask {
        width,
        height,
        data,
    })
}

/// Interior rectangle seeding the foreground model: 5% margins, central
/// 90%x90% area, truncated like the rest of the geometry
fn seed_rectangle(width: u32, height: u32) -> Result<Rect> {
    let x = (f64::from(width) * SEED_RECT_MARGIN) as i32;
    let y = (f64::from(height) * SEED_RECT_MARGIN) as i32;
    let rect_width = (f64::from(width) * SEED_RECT_SPAN) as i32;
    let rect_height = (f64::from(height) * SEED_RECT_SPAN) as i32;

    if rect_width < 1 || rect_height < 1 {
        return Err(ExtractionError::segmentation_degenerate("seed rectangle"));
    }

    Ok(Rect::new(x, y, rect_width, rect_height))
}

/// Copy the raster into a 3-channel OpenCV matrix
///
/// GrabCut only requires a consistent 3-channel layout, so the RGB channel
/// order is kept as-is.
fn raster_to_mat(raster: &RgbImage) -> Result<Mat> {
    let (width, height) = raster.dimensions();
    let mut mat = new_mat(height as i32, width as i32, CV_8UC3, "image matrix")?;

    for (x, y, pixel) in raster.enumerate_pixels() {
        let out = mat
            .at_2d_mut::<Vec3b>(y as i32, x as i32)
            .map_err(|e| ExtractionError::segmentation("pixel copy", e))?;
        out[0] = pixel.0[0];
        out[1] = pixel.0[1];
        out[2] = pixel.0[2];
    }

    Ok(mat)
}

fn new_mat(rows: i32, cols: i32, typ: i32, operation: &str) -> Result<Mat> {
    Mat::zeros(rows, cols, typ)
        .and_then(|expr| expr.to_mat())
        .map_err(|e| ExtractionError::segmentation(operation, e))
}

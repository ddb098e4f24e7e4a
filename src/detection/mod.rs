//! Spatial analysis stages
//!
//! This module narrows a product photograph down to the pixels that belong
//! to the garment: a category-driven vertical crop followed by GrabCut
//! foreground isolation.

pub mod background;
pub mod region;

pub use background::{segment_foreground, ForegroundMask};
pub use region::select_region;

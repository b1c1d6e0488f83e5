//! Mapping between raster cells and chromaticity coordinates.
//!
//! Both axes share one [`ValueRange`]. Raster row 0 is the top of the image
//! and therefore holds the largest `y` value.

use glam::Vec2;

use crate::geometry::{ChromaticityPoint, ValueRange};

/// Position of `index` along an axis of `len` cells, in `[0, 1]`.
///
/// A single-cell axis maps to `0.0`, i.e. to the start of the range.
pub fn axis_fraction(index: u32, len: u32) -> f32 {
    if len <= 1 {
        0.0
    } else {
        index as f32 / (len - 1) as f32
    }
}

/// Chromaticity coordinate sampled by raster cell `(col, row)`.
pub fn raster_to_chromaticity(
    col: u32,
    row: u32,
    width: u32,
    height: u32,
    range: &ValueRange,
) -> ChromaticityPoint {
    let flipped_row = height.saturating_sub(1).saturating_sub(row);
    ChromaticityPoint::new(
        range.lerp(axis_fraction(col, width)),
        range.lerp(axis_fraction(flipped_row, height)),
    )
}

/// Continuous pixel position of a chromaticity coordinate, used by overlays.
///
/// ```text
/// px = ((x - start) / (end - start)) * width
/// py = (1 - (y - start) / (end - start)) * height
/// ```
pub fn to_pixel(point: ChromaticityPoint, range: &ValueRange, width: u32, height: u32) -> Vec2 {
    let nx = range.normalize(point.x);
    let ny = range.normalize(point.y);
    Vec2::new(nx * width as f32, (1.0 - ny) * height as f32)
}

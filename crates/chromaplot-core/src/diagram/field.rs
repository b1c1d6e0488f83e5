//! Chromaticity field rendering: the colored body of the xy diagram.
//!
//! Every raster cell is mapped to an xy coordinate and classified:
//!
//! 1. Cells on the forbidden side of any [`HalfPlaneConstraint`] are
//!    [`FieldSample::Restricted`].
//! 2. Remaining cells are taken as XYZ `(x, y, 1 - x - y)` and converted to
//!    linear sRGB. A negative component means the chromaticity is outside
//!    the sRGB gamut and the cell becomes [`FieldSample::OutOfGamut`].
//! 3. In-gamut colors are scaled so their largest component is 1.0.
//!
//! Restricted and out-of-gamut cells are filled with the background color,
//! then every cell is display-encoded with a 1/2.4 power law.

use glam::Vec2;
use rayon::prelude::*;

use crate::color_management::color_space::xyz_to_linear_srgb;
use crate::color_management::transfer::{PowerLawTransfer, TransferFunction};
use crate::error::{DiagramError, Result};
use crate::geometry::{HalfPlaneConstraint, LineSegment, ValueRange, build_constraints};
use crate::raster::Raster;

use super::mapping::raster_to_chromaticity;

/// Default fill for restricted and out-of-gamut cells (linear).
pub const DEFAULT_BACKGROUND: [f32; 3] = [0.05, 0.05, 0.05];

/// Classification of a single diagram cell before display encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSample {
    /// Peak-normalized linear sRGB color.
    Valid([f32; 3]),
    /// Cut away by a half-plane constraint.
    Restricted,
    /// Converts to a color with a negative sRGB component.
    OutOfGamut,
}

/// Renders the colored chromaticity field.
#[derive(Debug, Clone, Copy)]
pub struct ChromaticityFieldRenderer {
    background: [f32; 3],
    transfer: PowerLawTransfer,
}

impl Default for ChromaticityFieldRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}

impl ChromaticityFieldRenderer {
    pub fn new(background: [f32; 3]) -> Self {
        Self {
            background,
            transfer: PowerLawTransfer::default(),
        }
    }

    /// Linear background color used for non-displayable cells.
    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    /// Background color after display encoding, as it appears in the output.
    pub fn encoded_background(&self) -> [f32; 3] {
        self.transfer.encode_rgb(self.background)
    }

    /// Classify one chromaticity coordinate.
    pub fn sample(&self, point: Vec2, constraints: &[HalfPlaneConstraint]) -> FieldSample {
        if constraints.iter().any(|c| c.excludes(point)) {
            return FieldSample::Restricted;
        }

        let rgb = xyz_to_linear_srgb([point.x, point.y, 1.0 - point.x - point.y]);
        if rgb.iter().any(|&c| c < 0.0) {
            return FieldSample::OutOfGamut;
        }

        let peak = rgb[0].max(rgb[1]).max(rgb[2]);
        if peak <= 0.0 {
            return FieldSample::OutOfGamut;
        }
        FieldSample::Valid(rgb.map(|c| c / peak))
    }

    /// Final display-encoded color of a classified cell.
    pub fn shade(&self, sample: FieldSample) -> [f32; 3] {
        let linear = match sample {
            FieldSample::Valid(rgb) => rgb,
            FieldSample::Restricted | FieldSample::OutOfGamut => self.background,
        };
        self.transfer.encode_rgb(linear)
    }

    /// Classify every cell of a `width` × `height` raster, row-major.
    pub fn classify(
        &self,
        width: u32,
        height: u32,
        range: &ValueRange,
        segments: &[LineSegment],
    ) -> Result<Vec<FieldSample>> {
        if width == 0 || height == 0 {
            return Err(DiagramError::InvalidDimension { width, height });
        }
        range.validate()?;

        let constraints = build_constraints(segments);
        let mut samples = vec![FieldSample::Restricted; width as usize * height as usize];
        samples
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(row, cells)| {
                for (col, cell) in cells.iter_mut().enumerate() {
                    let point =
                        raster_to_chromaticity(col as u32, row as u32, width, height, range);
                    *cell = self.sample(point.to_vec2(), &constraints);
                }
            });
        Ok(samples)
    }

    /// Render the field into a new raster.
    ///
    /// Pure function of its inputs: identical arguments give bit-identical output.
    pub fn render(
        &self,
        width: u32,
        height: u32,
        range: &ValueRange,
        segments: &[LineSegment],
    ) -> Result<Raster> {
        let samples = self.classify(width, height, range, segments)?;

        let restricted = samples
            .iter()
            .filter(|s| matches!(s, FieldSample::Restricted))
            .count();
        let out_of_gamut = samples
            .iter()
            .filter(|s| matches!(s, FieldSample::OutOfGamut))
            .count();
        tracing::debug!(
            "chromaticity field {width}x{height}: {restricted} restricted, {out_of_gamut} out of gamut"
        );

        let pixels = samples.par_iter().map(|&s| self.shade(s)).collect();
        Ok(Raster {
            width,
            height,
            pixels,
        })
    }
}

/// Render the chromaticity field with the default background.
pub fn render_field(
    width: u32,
    height: u32,
    range: &ValueRange,
    segments: &[LineSegment],
) -> Result<Raster> {
    ChromaticityFieldRenderer::default().render(width, height, range, segments)
}

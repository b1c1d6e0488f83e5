//! CIE 1931 xy diagram rendering: the colored field plus its overlays.

pub mod draw;
pub mod field;
pub mod glyphs;
pub mod mapping;
pub mod overlay;

pub use field::{ChromaticityFieldRenderer, FieldSample, render_field};
pub use mapping::to_pixel;
pub use overlay::{GridConfig, LocusConfig, draw_grid, draw_planckian_locus};

use crate::config::DiagramConfig;
use crate::error::Result;
use crate::raster::Raster;

/// Render a complete diagram: field, then Planckian locus, then grid.
pub fn render_diagram(config: &DiagramConfig) -> Result<Raster> {
    config.validate()?;
    tracing::info!(
        "rendering {}x{} chromaticity diagram over {}..{} with {} cut-off line(s)",
        config.width,
        config.height,
        config.range.start,
        config.range.end,
        config.forbidden_segments.len()
    );

    let renderer = ChromaticityFieldRenderer::new(config.background);
    let mut raster = renderer.render(
        config.width,
        config.height,
        &config.range,
        &config.forbidden_segments,
    )?;

    if let Some(locus) = &config.locus {
        draw_planckian_locus(&mut raster, &config.range, locus)?;
    }
    if let Some(grid) = &config.grid {
        draw_grid(&mut raster, &config.range, grid)?;
    }
    Ok(raster)
}

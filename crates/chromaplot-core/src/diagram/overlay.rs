//! Grid and Planckian-locus overlays drawn on top of the chromaticity field.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::color_management::planckian::{TemperatureSpan, locus_point, sample_locus};
use crate::error::{DiagramError, Result};
use crate::geometry::ValueRange;
use crate::raster::Raster;

use super::draw::{draw_line, draw_text, fill_disc, text_width};
use super::glyphs::GLYPH_HEIGHT;
use super::mapping::to_pixel;

/// Radius of the dot drawn at each marked temperature.
const MARKER_RADIUS: i32 = 2;
/// Offset of a marker label from its dot, in pixels.
const MARKER_LABEL_OFFSET: IVec2 = IVec2::new(2, 2);

/// Reference grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Spacing between grid lines in chromaticity units.
    pub step: f32,
    /// Grid line color.
    pub color: [f32; 3],
    /// Axis label color.
    pub label_color: [f32; 3],
    /// Integer magnification of the label glyphs.
    pub label_scale: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            step: 0.05,
            color: [0.45, 0.45, 0.45],
            label_color: [1.0, 1.0, 1.0],
            label_scale: 2,
        }
    }
}

/// Planckian locus overlay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocusConfig {
    /// Temperatures sampled for the curve.
    pub span: TemperatureSpan,
    /// Curve and marker dot color.
    pub color: [f32; 3],
    /// Temperatures marked with a dot and a `D<T/100>` label.
    pub markers: Vec<u32>,
    /// Marker label color.
    pub label_color: [f32; 3],
    /// Integer magnification of the label glyphs.
    pub label_scale: u32,
}

impl Default for LocusConfig {
    fn default() -> Self {
        Self {
            span: TemperatureSpan::default(),
            color: [0.0, 0.0, 0.0],
            markers: vec![2000, 4000, 5500, 6500, 9300],
            label_color: [0.1, 0.1, 0.1],
            label_scale: 1,
        }
    }
}

impl GridConfig {
    /// Pixel spacing of grid lines along an axis of `len` pixels.
    pub(crate) fn pixel_step(&self, range: &ValueRange, len: u32) -> Result<i32> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(DiagramError::InvalidGridStep(self.step));
        }
        let steps = range.span() / self.step;
        let px = (len as f32 / steps) as i32;
        if px < 1 {
            return Err(DiagramError::InvalidGridStep(self.step));
        }
        Ok(px)
    }
}

/// Draw grid lines every `grid.step` units with value labels.
///
/// Horizontal lines start at the bottom edge and move up, each labelled at
/// the left edge. Vertical lines start at the left edge and move right,
/// labelled along the bottom edge; the origin label is only drawn once.
pub fn draw_grid(raster: &mut Raster, range: &ValueRange, grid: &GridConfig) -> Result<()> {
    range.validate()?;
    let step_w = grid.pixel_step(range, raster.width)?;
    let step_h = grid.pixel_step(range, raster.height)?;
    let (width, height) = (raster.width as i32, raster.height as i32);

    let mut lines = 0;
    let mut value = range.start;
    let mut y = height;
    while y > 0 {
        draw_line(
            raster,
            Vec2::new(0.0, y as f32),
            Vec2::new(width as f32, y as f32),
            grid.color,
        );
        let label = format!("{value:.2}");
        draw_text(raster, &label, IVec2::new(0, y - 1), grid.label_scale, grid.label_color);
        value += grid.step;
        y -= step_h;
        lines += 1;
    }

    let mut value = range.start;
    let mut x = 0;
    while x < width {
        draw_line(
            raster,
            Vec2::new(x as f32, 0.0),
            Vec2::new(x as f32, height as f32),
            grid.color,
        );
        if x != 0 {
            let label = format!("{value:.2}");
            draw_text(raster, &label, IVec2::new(x, height - 1), grid.label_scale, grid.label_color);
        }
        value += grid.step;
        x += step_w;
        lines += 1;
    }

    tracing::debug!("grid: {lines} lines, step {}px x {}px", step_w, step_h);
    Ok(())
}

/// Draw the Planckian locus curve and its marked temperatures.
///
/// The sampled span is clamped to the fitted domain of the approximation;
/// markers outside the domain are skipped. Both cases are logged.
pub fn draw_planckian_locus(
    raster: &mut Raster,
    range: &ValueRange,
    locus: &LocusConfig,
) -> Result<()> {
    range.validate()?;
    locus.span.validate()?;
    let (width, height) = (raster.width, raster.height);

    match locus.span.clamp_to_locus() {
        Some(span) => {
            if span != locus.span {
                tracing::warn!(
                    "locus span {}K..={}K clamped to {}K..={}K",
                    locus.span.start,
                    locus.span.end,
                    span.start,
                    span.end
                );
            }
            let points: Vec<Vec2> = sample_locus(&span)?
                .into_iter()
                .map(|(_, p)| to_pixel(p, range, width, height))
                .collect();
            for pair in points.windows(2) {
                draw_line(raster, pair[0], pair[1], locus.color);
            }
            tracing::debug!("locus: {} segments", points.len().saturating_sub(1));
        }
        None => tracing::warn!(
            "locus span {}K..={}K lies outside the supported range, curve skipped",
            locus.span.start,
            locus.span.end
        ),
    }

    for &kelvin in &locus.markers {
        let center = match locus_pixel(kelvin, range, width, height) {
            Ok(center) => center,
            Err(e) => {
                tracing::warn!("skipping locus marker: {e}");
                continue;
            }
        };
        let label = format!("D{}", kelvin / 100);
        if !marker_visible(raster, center, &label, locus.label_scale) {
            tracing::debug!("locus marker {kelvin}K falls outside the raster");
            continue;
        }
        let center = center.round().as_ivec2();
        fill_disc(raster, center, MARKER_RADIUS, locus.color);
        draw_text(
            raster,
            &label,
            center + MARKER_LABEL_OFFSET,
            locus.label_scale,
            locus.label_color,
        );
    }
    Ok(())
}

/// Whether any pixel of a marker dot or its label at `center` lands on the raster.
fn marker_visible(raster: &Raster, center: Vec2, label: &str, label_scale: u32) -> bool {
    if !center.is_finite() {
        return false;
    }
    let radius = MARKER_RADIUS as f32;
    let offset = MARKER_LABEL_OFFSET.as_vec2();
    let label_height = (GLYPH_HEIGHT * label_scale.max(1) as i32) as f32;
    let min = center - Vec2::new(radius, radius.max(label_height - offset.y));
    let label_width = text_width(label, label_scale) as f32;
    let max = center + Vec2::splat(radius).max(offset + Vec2::new(label_width, 0.0));
    max.x >= 0.0
        && max.y >= 0.0
        && min.x <= (raster.width - 1) as f32
        && min.y <= (raster.height - 1) as f32
}

/// Unrounded pixel position of the locus at `kelvin`.
pub fn locus_pixel(kelvin: u32, range: &ValueRange, width: u32, height: u32) -> Result<Vec2> {
    Ok(to_pixel(locus_point(kelvin)?, range, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: [f32; 3] = [0.5, 0.5, 0.5];

    fn canvas(size: u32) -> Raster {
        Raster::new(size, size, BG).unwrap()
    }

    fn count(raster: &Raster, color: [f32; 3]) -> usize {
        raster.pixels.iter().filter(|p| **p == color).count()
    }

    #[test]
    fn test_grid_rejects_bad_steps() {
        let range = ValueRange::default();
        let mut raster = canvas(64);
        for step in [0.0, -0.1, f32::NAN, 0.0001] {
            let grid = GridConfig { step, ..GridConfig::default() };
            assert!(
                matches!(draw_grid(&mut raster, &range, &grid), Err(DiagramError::InvalidGridStep(_))),
                "step {step} should be rejected"
            );
        }
    }

    #[test]
    fn test_grid_draws_left_column_and_bottom_row() {
        let range = ValueRange::new(0.0, 1.0).unwrap();
        let grid = GridConfig {
            step: 0.25,
            color: [0.0, 0.0, 1.0],
            label_color: [1.0, 0.0, 0.0],
            label_scale: 1,
        };
        let mut raster = canvas(100);
        draw_grid(&mut raster, &range, &grid).unwrap();
        // Vertical line at x = 0 spans the full height apart from label pixels.
        assert_eq!(raster.get(0, 50), Some(grid.color));
        // Horizontal lines at y = 75, 50, 25.
        assert_eq!(raster.get(60, 75), Some(grid.color));
        assert_eq!(raster.get(60, 50), Some(grid.color));
        assert_eq!(raster.get(60, 25), Some(grid.color));
        assert!(count(&raster, grid.label_color) > 0);
    }

    #[test]
    fn test_locus_overlay_draws_curve_and_markers() {
        let range = ValueRange::default();
        let locus = LocusConfig {
            color: [1.0, 0.0, 0.0],
            label_color: [0.0, 1.0, 0.0],
            ..LocusConfig::default()
        };
        let mut raster = canvas(256);
        draw_planckian_locus(&mut raster, &range, &locus).unwrap();
        assert!(count(&raster, locus.color) > 50);
        assert!(count(&raster, locus.label_color) > 0);

        let d65 = locus_pixel(6500, &range, 256, 256).unwrap().round().as_ivec2();
        assert_eq!(raster.get(d65.x as u32, d65.y as u32), Some(locus.color));
    }

    #[test]
    fn test_locus_overlay_clamps_span_and_skips_bad_markers() {
        let range = ValueRange::default();
        let locus = LocusConfig {
            span: TemperatureSpan { start: 1500, end: 30000, step: 500 },
            markers: vec![1000, 6500, 40000],
            ..LocusConfig::default()
        };
        let mut raster = canvas(128);
        assert!(draw_planckian_locus(&mut raster, &range, &locus).is_ok());
    }

    #[test]
    fn test_locus_overlay_outside_domain_leaves_raster_untouched() {
        let range = ValueRange::default();
        let locus = LocusConfig {
            span: TemperatureSpan { start: 500, end: 1200, step: 100 },
            markers: vec![1000],
            ..LocusConfig::default()
        };
        let mut raster = canvas(64);
        draw_planckian_locus(&mut raster, &range, &locus).unwrap();
        assert_eq!(count(&raster, BG), 64 * 64);
    }

    #[test]
    fn test_locus_overlay_on_narrow_range_is_clipped() {
        // The whole locus projects hundreds of millions of pixels away.
        let range = ValueRange::new(0.0, 1e-9).unwrap();
        let mut raster = canvas(16);
        draw_planckian_locus(&mut raster, &range, &LocusConfig::default()).unwrap();
        assert_eq!(count(&raster, BG), 16 * 16);

        let range = ValueRange::new(0.4, 0.400_000_04).unwrap();
        let mut raster = Raster::new(1024, 8, BG).unwrap();
        draw_planckian_locus(&mut raster, &range, &LocusConfig::default()).unwrap();
        assert!(raster.pixels.iter().all(|p| p.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn test_locus_overlay_off_diagram_range_leaves_raster_untouched() {
        // Every locus point has y < 0.45, below this window.
        let range = ValueRange::new(0.6, 0.9).unwrap();
        let mut raster = canvas(64);
        draw_planckian_locus(&mut raster, &range, &LocusConfig::default()).unwrap();
        assert_eq!(count(&raster, BG), 64 * 64);
    }

    #[test]
    fn test_marker_visibility_covers_dot_and_label() {
        let range = ValueRange::default();
        let locus = LocusConfig {
            span: TemperatureSpan { start: 20000, end: 25000, step: 5000 },
            markers: vec![6500],
            label_color: [0.0, 1.0, 0.0],
            ..LocusConfig::default()
        };
        let center = locus_pixel(6500, &range, 256, 256).unwrap();
        let raster = canvas(256);
        assert!(marker_visible(&raster, center, "D65", 1));
        assert!(!marker_visible(&raster, Vec2::new(-30.0, 100.0), "D65", 1));
        assert!(!marker_visible(&raster, Vec2::new(100.0, 1.0e9), "D65", 1));
        assert!(!marker_visible(&raster, Vec2::new(f32::INFINITY, 0.0), "D65", 1));
        // Centered just past the right edge, the dot still reaches the last column.
        assert!(marker_visible(&raster, Vec2::new(257.0, 100.0), "D65", 1));

        let mut raster = canvas(256);
        draw_planckian_locus(&mut raster, &range, &locus).unwrap();
        assert!(count(&raster, locus.label_color) > 0);
    }

    #[test]
    fn test_full_diagram_on_narrow_range_renders() {
        let config = crate::DiagramConfig {
            width: 16,
            height: 16,
            range: ValueRange::new(0.0, 1e-9).unwrap(),
            grid: None,
            ..crate::DiagramConfig::default()
        };
        assert!(crate::render_diagram(&config).is_ok());
    }

    #[test]
    fn test_locus_overlay_rejects_zero_step() {
        let locus = LocusConfig {
            span: TemperatureSpan { start: 2000, end: 3000, step: 0 },
            ..LocusConfig::default()
        };
        let mut raster = canvas(16);
        assert!(matches!(
            draw_planckian_locus(&mut raster, &ValueRange::default(), &locus),
            Err(DiagramError::InvalidTemperatureSpan { .. })
        ));
    }
}

//! Planckian (black-body) locus in CIE 1931 xy.
//!
//! Uses the cubic spline approximation of Kim et al.: `x` is a cubic
//! in `1/T` over two temperature regimes, and `y` is a cubic in `x` over
//! three regimes. The fit is only valid between 1667K and 25000K; anything
//! outside that domain is rejected instead of extrapolated.
//!
//! # Reference
//! - <https://en.wikipedia.org/wiki/Planckian_locus#Approximation>

use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, Result};
use crate::geometry::ChromaticityPoint;

/// Lowest temperature covered by the approximation.
pub const LOCUS_MIN_KELVIN: u32 = 1667;
/// Highest temperature covered by the approximation.
pub const LOCUS_MAX_KELVIN: u32 = 25000;

// Coefficients are ordered `[c3, c2, c1, c0]`.
const X_1667K_4000K: [f64; 4] = [-0.2661239e9, -0.2343580e6, 0.8776956e3, 0.179910];
const X_4000K_25000K: [f64; 4] = [-3.0258469e9, 2.1070379e6, 0.2226347e3, 0.240390];

const Y_1667K_2222K: [f64; 4] = [-1.1063814, -1.34811020, 2.18555832, -0.20219683];
const Y_2222K_4000K: [f64; 4] = [-0.9549476, -1.37418593, 2.09137015, -0.16748867];
const Y_4000K_25000K: [f64; 4] = [3.0817580, -5.87338670, 3.75112997, -0.37001483];

/// Evaluate `c3·v³ + c2·v² + c1·v + c0`.
fn cubic(c: &[f64; 4], v: f64) -> f64 {
    ((c[0] * v + c[1]) * v + c[2]) * v + c[3]
}

/// Whether `kelvin` lies in the fitted domain.
pub fn is_supported(kelvin: u32) -> bool {
    (LOCUS_MIN_KELVIN..=LOCUS_MAX_KELVIN).contains(&kelvin)
}

/// Chromaticity of a black-body radiator at `kelvin`.
///
/// Returns [`DiagramError::UnsupportedTemperature`] outside 1667K..=25000K.
pub fn locus_point(kelvin: u32) -> Result<ChromaticityPoint> {
    if !is_supported(kelvin) {
        return Err(DiagramError::UnsupportedTemperature(kelvin));
    }

    let inv_t = 1.0 / f64::from(kelvin);
    let x_coefs = if kelvin <= 4000 {
        &X_1667K_4000K
    } else {
        &X_4000K_25000K
    };
    let x = cubic(x_coefs, inv_t);

    let y_coefs = if kelvin <= 2222 {
        &Y_1667K_2222K
    } else if kelvin <= 4000 {
        &Y_2222K_4000K
    } else {
        &Y_4000K_25000K
    };
    let y = cubic(y_coefs, x);

    Ok(ChromaticityPoint::new(x as f32, y as f32))
}

/// An inclusive, stepped range of temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureSpan {
    pub start: u32,
    pub end: u32,
    pub step: u32,
}

impl TemperatureSpan {
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 || self.end < self.start {
            return Err(DiagramError::InvalidTemperatureSpan {
                start: self.start,
                end: self.end,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Restrict the span to the fitted domain of the approximation.
    ///
    /// Returns `None` when the span does not overlap the domain at all.
    pub fn clamp_to_locus(&self) -> Option<Self> {
        let start = self.start.max(LOCUS_MIN_KELVIN);
        let end = self.end.min(LOCUS_MAX_KELVIN);
        (start <= end).then_some(Self {
            start,
            end,
            step: self.step,
        })
    }

    /// Temperatures `start, start + step, ...` up to and including `end`.
    pub fn temperatures(self) -> impl Iterator<Item = u32> {
        let step = self.step.max(1) as usize;
        (self.start..=self.end).step_by(step)
    }
}

impl Default for TemperatureSpan {
    fn default() -> Self {
        Self {
            start: LOCUS_MIN_KELVIN,
            end: 10000,
            step: 100,
        }
    }
}

/// Sample the locus over a span.
///
/// Fails with [`DiagramError::UnsupportedTemperature`] on the first
/// temperature outside the fitted domain; use
/// [`TemperatureSpan::clamp_to_locus`] first to sample only the valid part.
pub fn sample_locus(span: &TemperatureSpan) -> Result<Vec<(u32, ChromaticityPoint)>> {
    span.validate()?;
    span.temperatures()
        .map(|kelvin| locus_point(kelvin).map(|p| (kelvin, p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    fn assert_point_near(actual: ChromaticityPoint, x: f32, y: f32) {
        assert!(
            (actual.x - x).abs() < TOLERANCE && (actual.y - y).abs() < TOLERANCE,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_locus_d65_temperature_matches_reference() {
        assert_point_near(locus_point(6500).unwrap(), 0.3135, 0.3237);
    }

    #[test]
    fn test_locus_illuminant_a_matches_reference() {
        assert_point_near(locus_point(2856).unwrap(), 0.4476, 0.4075);
    }

    #[test]
    fn test_locus_is_continuous_across_regimes() {
        for boundary in [2222, 4000] {
            let below = locus_point(boundary).unwrap();
            let above = locus_point(boundary + 1).unwrap();
            assert_point_near(above, below.x, below.y);
        }
    }

    #[test]
    fn test_locus_points_lie_in_unit_triangle() {
        for kelvin in [2000, 5500, 9300] {
            let p = locus_point(kelvin).unwrap();
            assert!(p.is_in_unit_triangle(), "{kelvin}K -> {p:?}");
        }
    }

    #[test]
    fn test_locus_domain_bounds_are_inclusive() {
        assert!(locus_point(LOCUS_MIN_KELVIN).is_ok());
        assert!(locus_point(LOCUS_MAX_KELVIN).is_ok());
    }

    #[test]
    fn test_locus_rejects_unsupported_temperatures() {
        for kelvin in [0, 1000, 1666, 25001, 30000] {
            assert!(
                matches!(locus_point(kelvin), Err(DiagramError::UnsupportedTemperature(k)) if k == kelvin),
                "{kelvin}K should be rejected"
            );
        }
    }

    #[test]
    fn test_locus_x_decreases_with_temperature() {
        let warm = locus_point(2000).unwrap();
        let cool = locus_point(9300).unwrap();
        assert!(warm.x > cool.x);
    }

    #[test]
    fn test_span_clamp_to_locus() {
        let span = TemperatureSpan { start: 1500, end: 30000, step: 100 };
        let clamped = span.clamp_to_locus().unwrap();
        assert_eq!(clamped.start, LOCUS_MIN_KELVIN);
        assert_eq!(clamped.end, LOCUS_MAX_KELVIN);

        let outside = TemperatureSpan { start: 500, end: 1000, step: 100 };
        assert!(outside.clamp_to_locus().is_none());
    }

    #[test]
    fn test_span_temperatures_include_end_when_aligned() {
        let span = TemperatureSpan { start: 2000, end: 2300, step: 100 };
        let temps: Vec<u32> = span.temperatures().collect();
        assert_eq!(temps, vec![2000, 2100, 2200, 2300]);
    }

    #[test]
    fn test_sample_locus_rejects_zero_step() {
        let span = TemperatureSpan { start: 2000, end: 3000, step: 0 };
        assert!(matches!(
            sample_locus(&span),
            Err(DiagramError::InvalidTemperatureSpan { .. })
        ));
    }

    #[test]
    fn test_sample_locus_fails_outside_domain() {
        let span = TemperatureSpan { start: 1500, end: 2000, step: 100 };
        assert!(matches!(
            sample_locus(&span),
            Err(DiagramError::UnsupportedTemperature(1500))
        ));
    }
}

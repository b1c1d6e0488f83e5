//! Chromaticity-plane geometry: points, value ranges, and half-plane cut-offs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, Result};

/// Approximate white point used to orient every half-plane constraint.
///
/// The side of a cut-off line containing this point is always the kept side.
pub const REFERENCE_WHITE: ChromaticityPoint = ChromaticityPoint::new(0.33, 0.33);

/// A CIE 1931 xy chromaticity coordinate. The implied `z` is `1 - x - y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromaticityPoint {
    pub x: f32,
    pub y: f32,
}

impl ChromaticityPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Third chromaticity component, `1 - x - y`.
    pub fn z(&self) -> f32 {
        1.0 - self.x - self.y
    }

    /// Tristimulus XYZ with the components summing to one.
    pub fn to_xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z()]
    }

    /// True when the point lies inside the xy unit triangle.
    pub fn is_in_unit_triangle(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.y <= 1.0
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for ChromaticityPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<ChromaticityPoint> for Vec2 {
    fn from(p: ChromaticityPoint) -> Self {
        p.to_vec2()
    }
}

/// Normalized span of chromaticity values mapped onto both raster axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub start: f32,
    pub end: f32,
}

impl ValueRange {
    /// Create a validated range. Fails unless both bounds are finite and `end > start`.
    pub fn new(start: f32, end: f32) -> Result<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() || self.end <= self.start {
            return Err(DiagramError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Width of the range, `end - start`.
    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// Map `t` in `[0, 1]` into the range.
    pub fn lerp(&self, t: f32) -> f32 {
        self.start + t * self.span()
    }

    /// Map a value in the range back to `[0, 1]`.
    pub fn normalize(&self, value: f32) -> f32 {
        (value - self.start) / self.span()
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 0.7,
        }
    }
}

/// A line through two chromaticity points. The half-plane away from
/// [`REFERENCE_WHITE`] is cut out of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub first: ChromaticityPoint,
    pub second: ChromaticityPoint,
}

impl LineSegment {
    pub const fn new(first: ChromaticityPoint, second: ChromaticityPoint) -> Self {
        Self { first, second }
    }
}

/// A forbidden half-plane stored as an anchor point and an outward normal.
///
/// The normal is fixed at construction so that [`REFERENCE_WHITE`] is on the
/// negative side. A point is excluded when `(p - anchor) · normal >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlaneConstraint {
    anchor: Vec2,
    normal: Vec2,
}

impl HalfPlaneConstraint {
    /// Derive the constraint from a segment.
    ///
    /// Returns `None` when the segment cannot define a usable half-plane:
    /// coincident endpoints (zero normal, which would reject every point under
    /// the `>= 0` test) or a supporting line passing exactly through
    /// [`REFERENCE_WHITE`] (no side can keep it).
    pub fn from_segment(segment: &LineSegment) -> Option<Self> {
        let anchor = segment.first.to_vec2();
        let direction = segment.second.to_vec2() - anchor;
        let mut normal = direction.perp();
        if normal == Vec2::ZERO {
            return None;
        }

        let side = (REFERENCE_WHITE.to_vec2() - anchor).dot(normal);
        if side == 0.0 {
            return None;
        }
        if side > 0.0 {
            normal = -normal;
        }
        Some(Self { anchor, normal })
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Whether `point` lies on the forbidden side (or on the line itself).
    pub fn excludes(&self, point: Vec2) -> bool {
        (point - self.anchor).dot(self.normal) >= 0.0
    }
}

/// Build the constraint list for a set of segments, dropping degenerate ones.
pub fn build_constraints(segments: &[LineSegment]) -> Vec<HalfPlaneConstraint> {
    segments
        .iter()
        .filter_map(|segment| {
            let constraint = HalfPlaneConstraint::from_segment(segment);
            if constraint.is_none() {
                tracing::warn!(
                    "ignoring degenerate cut-off segment ({}, {}) -> ({}, {})",
                    segment.first.x,
                    segment.first.y,
                    segment.second.x,
                    segment.second.y
                );
            }
            constraint
        })
        .collect()
}

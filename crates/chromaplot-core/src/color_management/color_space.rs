//! Linear 3x3 color matrix transforms.

/// A 3x3 color matrix for linear color space conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f32; 3]; 3]);

/// CIE XYZ to linear sRGB (Rec. 709 primaries, D65 white).
///
/// # Reference
/// IEC 61966-2-1, with the coefficients used by OpenCV's `COLOR_XYZ2RGB`.
pub const XYZ_TO_LINEAR_SRGB: ColorMatrix = ColorMatrix([
    [3.240479, -1.537150, -0.498535],
    [-0.969256, 1.875991, 0.041556],
    [0.055648, -0.204043, 1.057311],
]);

impl ColorMatrix {
    /// Apply this matrix to a color triplet.
    pub fn apply(&self, v: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }
}

/// Convert CIE XYZ tristimulus values to linear sRGB. Out-of-gamut inputs
/// produce negative components; nothing is clamped here.
pub fn xyz_to_linear_srgb(xyz: [f32; 3]) -> [f32; 3] {
    XYZ_TO_LINEAR_SRGB.apply(xyz)
}

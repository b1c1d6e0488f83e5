//! Transfer functions between linear light and display encoding.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f32) -> f32;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f32) -> f32;

    /// Encode every channel of an RGB triplet.
    fn encode_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        rgb.map(|c| self.to_encoded(c))
    }
}

/// Default display exponent of the diagram.
pub const DISPLAY_GAMMA: f32 = 2.4;

/// Pure power-law display encoding.
///
/// ```text
/// to_linear:  V ^ γ
/// to_encoded: L ^ (1 / γ)
/// ```
///
/// Unlike the piecewise sRGB curve there is no linear toe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawTransfer {
    pub gamma: f32,
}

impl Default for PowerLawTransfer {
    fn default() -> Self {
        Self {
            gamma: DISPLAY_GAMMA,
        }
    }
}

impl TransferFunction for PowerLawTransfer {
    fn to_linear(&self, encoded: f32) -> f32 {
        encoded.powf(self.gamma)
    }

    fn to_encoded(&self, linear: f32) -> f32 {
        linear.powf(1.0 / self.gamma)
    }
}

//! Color management: XYZ conversion, display encoding, and the Planckian locus.

pub mod color_space;
pub mod planckian;
pub mod transfer;

//! Raster representation and 8-bit export.

use std::path::Path;

use image::{Rgb, Rgb32FImage, RgbImage};
use palette::Srgb;

use crate::error::{DiagramError, Result};

/// A width × height grid of display-encoded RGB floats, nominally in `[0, 1]`.
///
/// Row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Pixel data, row-major, RGB order.
    pub pixels: Vec<[f32; 3]>,
}

impl Raster {
    /// Allocate a raster filled with `fill`.
    pub fn new(width: u32, height: u32, fill: [f32; 3]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DiagramError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x < self.width && y < self.height {
            self.pixels.get(self.index(x, y)).copied()
        } else {
            None
        }
    }

    /// Write a pixel; coordinates outside the raster are clipped.
    pub fn put(&mut self, x: i32, y: i32, color: [f32; 3]) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        if let Some(px) = self.pixels.get_mut(idx) {
            *px = color;
        }
    }

    /// Quantize to 8 bits per channel (×255, rounded, clamped).
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b] = self.get(x, y).unwrap_or_default();
            let px: Srgb<u8> = Srgb::new(r, g, b).into_format();
            Rgb([px.red, px.green, px.blue])
        })
    }

    /// Copy into a floating-point `image` buffer without quantizing.
    pub fn to_rgb32f(&self) -> Result<Rgb32FImage> {
        let data: Vec<f32> = bytemuck::cast_slice(&self.pixels).to_vec();
        Rgb32FImage::from_raw(self.width, self.height, data).ok_or(
            DiagramError::InvalidDimension {
                width: self.width,
                height: self.height,
            },
        )
    }

    /// Write an 8-bit image; the encoder is chosen from the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_rgb8().save(path)?;
        tracing::info!("wrote {}x{} diagram to {}", self.width, self.height, path.display());
        Ok(())
    }
}

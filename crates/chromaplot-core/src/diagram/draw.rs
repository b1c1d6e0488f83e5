//! Rasterization primitives used by the overlays. Writes outside the raster
//! are clipped.

use glam::{DVec2, IVec2, Vec2};

use crate::raster::Raster;

use super::glyphs::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph, is_set};

/// Liang-Barsky clip of `p0..p1` against `[0, max.x] x [0, max.y]`.
fn clip_segment(p0: DVec2, p1: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    if !p0.is_finite() || !p1.is_finite() {
        return None;
    }
    let d = p1 - p0;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-d.x, p0.x),
        (d.x, max.x - p0.x),
        (-d.y, p0.y),
        (d.y, max.y - p0.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((p0 + d * t0, p0 + d * t1))
}

/// One-pixel Bresenham line from `p0` to `p1`, both endpoints included.
///
/// The segment is clipped to the raster before rasterization, so only
/// visible pixels are walked however far off-raster the endpoints lie.
pub fn draw_line(raster: &mut Raster, p0: Vec2, p1: Vec2, color: [f32; 3]) {
    let max = DVec2::new(raster.width as f64 - 1.0, raster.height as f64 - 1.0);
    let Some((a, b)) = clip_segment(p0.as_dvec2(), p1.as_dvec2(), max) else {
        return;
    };
    let to_pixel = |v: DVec2| v.round().clamp(DVec2::ZERO, max).as_ivec2();
    let (p0, p1) = (to_pixel(a), to_pixel(b));

    let dx = (p1.x - p0.x).abs();
    let dy = -(p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut p = p0;

    loop {
        raster.put(p.x, p.y, color);
        if p == p1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            p.x += sx;
        }
        if e2 <= dx {
            err += dx;
            p.y += sy;
        }
    }
}

/// Filled disc of `radius` pixels around `center`.
pub fn fill_disc(raster: &mut Raster, center: IVec2, radius: i32, color: [f32; 3]) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                raster.put(center.x.saturating_add(dx), center.y.saturating_add(dy), color);
            }
        }
    }
}

/// Draw `text` with its bottom-left corner at `origin`, each font pixel
/// scaled to a `scale` × `scale` block. Unknown characters advance blank.
pub fn draw_text(raster: &mut Raster, text: &str, origin: IVec2, scale: u32, color: [f32; 3]) {
    let scale = scale.max(1) as i32;
    let top = origin.y.saturating_sub(GLYPH_HEIGHT * scale - 1);
    let mut left = origin.x;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if !is_set(&rows, col, row) {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            raster.put(
                                left.saturating_add(col * scale + sx),
                                top.saturating_add(row * scale + sy),
                                color,
                            );
                        }
                    }
                }
            }
        }
        left = left.saturating_add(GLYPH_ADVANCE * scale);
    }
}

/// Pixel width of `text` as drawn by [`draw_text`].
pub fn text_width(text: &str, scale: u32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        return 0;
    }
    (n * GLYPH_ADVANCE - 1) * scale.max(1) as i32
}

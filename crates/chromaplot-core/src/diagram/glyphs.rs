//! Built-in 5x7 bitmap glyphs for axis and temperature labels.

/// Glyph cell width in font pixels.
pub const GLYPH_WIDTH: i32 = 5;
/// Glyph cell height in font pixels.
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal distance between glyph origins, in font pixels.
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Row bitmaps, top row first. Bit 4 is the leftmost column.
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        ' ' => [0x00; 7],
        _ => return None,
    };
    Some(rows)
}

/// Whether font pixel `(col, row)` of `rows` is set.
pub fn is_set(rows: &[u8; 7], col: i32, row: i32) -> bool {
    if !(0..GLYPH_WIDTH).contains(&col) || !(0..GLYPH_HEIGHT).contains(&row) {
        return false;
    }
    rows[row as usize] & (0x10 >> col) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_characters_are_covered() {
        for c in "0123456789.-D ".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
        assert!(glyph('x').is_none());
    }

    #[test]
    fn test_glyph_rows_fit_cell_width() {
        for c in "0123456789.-D".chars() {
            let rows = glyph(c).unwrap();
            assert!(rows.iter().all(|r| r >> GLYPH_WIDTH == 0), "{c:?} overflows");
        }
    }

    #[test]
    fn test_is_set_reads_leftmost_bit_first() {
        let one = glyph('1').unwrap();
        // Bottom row of '1' is 0b01110.
        assert!(!is_set(&one, 0, 6));
        assert!(is_set(&one, 1, 6));
        assert!(!is_set(&one, 5, 6));
    }
}

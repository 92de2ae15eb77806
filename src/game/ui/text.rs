//! Text Rendering
//!
//! Pixel-font text drawn as quads, plus the metrics scenes use for layout.
//! Glyphs are 5x7 cells advancing 6 cells; a handful of emoji have their own
//! bitmaps and colors.

use crate::render::ShapeMesh;

/// Glyph columns drawn per character
const GLYPH_COLUMNS: u32 = 5;
/// Glyph rows drawn per character
const GLYPH_ROWS: usize = 7;
/// Horizontal advance per character, in glyph cells
const GLYPH_ADVANCE: f32 = 6.0;
/// Font size that maps to one pixel per glyph cell
const FONT_SIZE_PER_CELL: f32 = 10.0;

/// Glyph cell size (pixels) for a font size
pub fn pixel_scale(font_size: f32) -> f32 {
    font_size / FONT_SIZE_PER_CELL
}

/// Rendered `(width, height)` of `text` at the given pixel scale.
///
/// Width spans from the first glyph's left edge to the last glyph's right
/// edge (no trailing spacing). Empty text measures zero width.
pub fn measure_text(text: &str, scale: f32) -> (f32, f32) {
    let count = text.chars().count();
    if count == 0 {
        return (0.0, 0.0);
    }
    let width = (count as f32 * GLYPH_ADVANCE - 1.0) * scale;
    (width, GLYPH_ROWS as f32 * scale)
}

/// Fixed fill color for emoji glyphs (they ignore the text color)
pub fn emoji_color(c: char) -> Option<[f32; 4]> {
    let rgb: u32 = match c {
        '\u{1F600}' => 0xffcc33, // grinning face
        '\u{1F30D}' => 0x3399dd, // globe
        '\u{1F4BB}' => 0x555566, // laptop
        '\u{1F3AE}' => 0x7755aa, // game controller
        _ => return None,
    };
    Some(crate::game::canvas::hex_color(rgb))
}

// ============================================================================
// SIMPLE PIXEL FONT FOR UI TEXT
// ============================================================================
// Each character is 5x7 pixels, stored as a bitmask array
// 1 = pixel on, 0 = pixel off

pub fn get_char_bitmap(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [
            0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
        ],
        'B' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110,
        ],
        'C' => [
            0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110,
        ],
        'D' => [
            0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110,
        ],
        'E' => [
            0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111,
        ],
        'F' => [
            0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000,
        ],
        'G' => [
            0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110,
        ],
        'H' => [
            0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
        ],
        'I' => [
            0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110,
        ],
        'J' => [
            0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100,
        ],
        'K' => [
            0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001,
        ],
        'L' => [
            0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111,
        ],
        'M' => [
            0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001,
        ],
        'N' => [
            0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001,
        ],
        'O' => [
            0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
        ],
        'P' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000,
        ],
        'Q' => [
            0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101,
        ],
        'R' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001,
        ],
        'S' => [
            0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110,
        ],
        'T' => [
            0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100,
        ],
        'U' => [
            0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
        ],
        'V' => [
            0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100,
        ],
        'W' => [
            0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001,
        ],
        'X' => [
            0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001,
        ],
        'Y' => [
            0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100,
        ],
        'Z' => [
            0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111,
        ],
        '0' => [
            0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110,
        ],
        '1' => [
            0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110,
        ],
        '2' => [
            0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111,
        ],
        '3' => [
            0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110,
        ],
        '4' => [
            0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010,
        ],
        '5' => [
            0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110,
        ],
        '6' => [
            0b01110, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b01110,
        ],
        '7' => [
            0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000,
        ],
        '8' => [
            0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110,
        ],
        '9' => [
            0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110,
        ],
        ' ' => [
            0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000,
        ],
        '.' => [
            0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100,
        ],
        '-' => [
            0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000,
        ],
        '+' => [
            0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000,
        ],
        ':' => [
            0b00000, 0b00100, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000,
        ],
        '\u{1F600}' => [
            0b01110, 0b11111, 0b10101, 0b11111, 0b10001, 0b11011, 0b01110,
        ],
        '\u{1F30D}' => [
            0b01110, 0b11011, 0b10111, 0b11101, 0b10011, 0b11011, 0b01110,
        ],
        '\u{1F4BB}' => [
            0b11111, 0b10001, 0b10001, 0b10001, 0b11111, 0b00000, 0b11111,
        ],
        '\u{1F3AE}' => [
            0b00000, 0b01110, 0b11111, 0b10101, 0b11111, 0b11011, 0b00000,
        ],
        _ => [
            0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111,
        ], // Unknown = filled box
    }
}

/// Draw text with its top-left corner at screen position `(x, y)`
pub fn draw_text(
    mesh: &mut ShapeMesh,
    text: &str,
    x: f32,
    y: f32,
    scale: f32,
    color: [f32; 4],
    screen_width: f32,
    screen_height: f32,
) {
    let to_ndc = |px: f32, py: f32| ShapeMesh::screen_to_ndc(px, py, screen_width, screen_height);

    let char_width = GLYPH_ADVANCE * scale;

    for (char_idx, c) in text.chars().enumerate() {
        let bitmap = get_char_bitmap(c);
        let glyph_color = emoji_color(c).unwrap_or(color);
        let char_x = x + (char_idx as f32) * char_width;

        for (row, &row_bits) in bitmap.iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if (row_bits >> (GLYPH_COLUMNS - 1 - col)) & 1 == 1 {
                    let px = char_x + (col as f32) * scale;
                    let py = y + (row as f32) * scale;

                    mesh.add_quad(
                        to_ndc(px, py),
                        to_ndc(px + scale, py),
                        to_ndc(px + scale, py + scale),
                        to_ndc(px, py + scale),
                        glyph_color,
                    );
                }
            }
        }
    }
}

// this_file: crates/xshot-fontdb/src/builtin.rs

//! The font of last resort
//!
//! When no font file can be found the overlay still has to draw something.
//! This is a 5x7 ASCII bitmap face living in a 6x8 cell, scaled to whatever
//! pixel size is requested. Each lit cell is emitted as a small square, so it
//! goes through exactly the same fill path as outline fonts.

use std::sync::Arc;

use once_cell::sync::Lazy;

use xshot_core::{FontFace, LineMetrics, OutlineSink};

/// Rows of the glyph cell that sit above the baseline
const ASCENT_ROWS: f32 = 7.0;
/// Total cell height in rows, one row of descent
const CELL_ROWS: f32 = 8.0;
/// Cell width in columns, one column of spacing
const CELL_COLUMNS: f32 = 6.0;
const GLYPH_COLUMNS: u32 = 5;

static BUILTIN: Lazy<Arc<BuiltinFont>> = Lazy::new(|| Arc::new(BuiltinFont));

/// Shared instance of the built-in face
pub fn builtin_face() -> Arc<dyn FontFace> {
    BUILTIN.clone()
}

/// Fixed-pitch bitmap face covering printable ASCII
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl BuiltinFont {
    fn glyph(ch: char) -> &'static [u8; 7] {
        let index = match ch {
            ' '..='~' => ch as usize - ' ' as usize,
            _ => '?' as usize - ' ' as usize,
        };
        &GLYPHS[index]
    }

    fn unit(size: f32) -> f32 {
        size.max(1.0) / CELL_ROWS
    }
}

impl FontFace for BuiltinFont {
    fn name(&self) -> &str {
        "builtin"
    }

    fn line_metrics(&self, size: f32) -> LineMetrics {
        let unit = Self::unit(size);
        LineMetrics {
            ascent: ASCENT_ROWS * unit,
            descent: (CELL_ROWS - ASCENT_ROWS) * unit,
        }
    }

    fn advance(&self, _ch: char, size: f32) -> f32 {
        CELL_COLUMNS * Self::unit(size)
    }

    fn outline_glyph(&self, ch: char, size: f32, x: f32, baseline: f32, sink: &mut dyn OutlineSink) {
        let unit = Self::unit(size);
        let top = baseline - ASCENT_ROWS * unit;

        for (row, bits) in Self::glyph(ch).iter().enumerate() {
            for column in 0..GLYPH_COLUMNS {
                // Bit 4 is the leftmost column
                if bits & (0x10 >> column) != 0 {
                    sink.rect(
                        x + column as f32 * unit,
                        top + row as f32 * unit,
                        unit,
                        unit,
                    );
                }
            }
        }
    }

    fn is_builtin(&self) -> bool {
        true
    }
}

/// Printable ASCII from ' ' to '~', seven rows of five bits each
#[rustfmt::skip]
static GLYPHS: [[u8; 7]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04], // '!'
    [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A], // '#'
    [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04], // '$'
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03], // '%'
    [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D], // '&'
    [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02], // '('
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08], // ')'
    [0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00], // '*'
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08], // ','
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C], // '.'
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00], // '/'
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // '1'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // '2'
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // '9'
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00], // ':'
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08], // ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // '<'
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // '>'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // '?'
    [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E], // '@'
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], // 'A'
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // 'B'
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // 'C'
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // 'D'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // 'E'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // 'F'
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // 'G'
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // 'L'
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // 'M'
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'O'
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // 'P'
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // 'Q'
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // 'R'
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'U'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // 'W'
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // 'X'
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // 'Y'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // '['
    [0x00, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00], // '\\'
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ']'
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // '_'
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F], // 'a'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E], // 'b'
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E], // 'c'
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F], // 'd'
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E], // 'e'
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08], // 'f'
    [0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E], // 'g'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11], // 'h'
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E], // 'i'
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C], // 'j'
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12], // 'k'
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // 'l'
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11], // 'm'
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11], // 'n'
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E], // 'o'
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10], // 'p'
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01], // 'q'
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10], // 'r'
    [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E], // 's'
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06], // 't'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D], // 'u'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04], // 'v'
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A], // 'w'
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11], // 'x'
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E], // 'y'
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F], // 'z'
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02], // '{'
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // '|'
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08], // '}'
    [0x00, 0x00, 0x08, 0x15, 0x02, 0x00, 0x00], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RectCounter {
        rects: usize,
        min_y: f32,
        max_y: f32,
    }

    impl OutlineSink for RectCounter {
        fn move_to(&mut self, _x: f32, y: f32) {
            if self.rects == 0 {
                self.min_y = y;
                self.max_y = y;
            }
            self.rects += 1;
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
        fn line_to(&mut self, _x: f32, y: f32) {
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
        fn quad_to(&mut self, _cx: f32, _cy: f32, _x: f32, _y: f32) {}
        fn curve_to(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: f32) {}
        fn close(&mut self) {}
    }

    #[test]
    fn test_metrics_scale_with_size() {
        let font = BuiltinFont;
        let metrics = font.line_metrics(16.0);
        assert_eq!(metrics.ascent, 14.0);
        assert_eq!(metrics.descent, 2.0);
        assert_eq!(metrics.height(), 16.0);
        assert_eq!(font.advance('W', 16.0), 12.0);
        assert_eq!(font.advance('i', 16.0), 12.0);
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut sink = RectCounter::default();
        BuiltinFont.outline_glyph(' ', 16.0, 0.0, 14.0, &mut sink);
        assert_eq!(sink.rects, 0);
    }

    #[test]
    fn test_glyph_stays_above_baseline() {
        let mut sink = RectCounter::default();
        BuiltinFont.outline_glyph('H', 8.0, 0.0, 7.0, &mut sink);
        // 'H': two full columns of 7 plus the 3-pixel crossbar
        assert_eq!(sink.rects, 17);
        assert_eq!(sink.min_y, 0.0);
        assert_eq!(sink.max_y, 7.0);
    }

    #[test]
    fn test_unknown_chars_render_as_question_mark() {
        assert_eq!(BuiltinFont::glyph('é'), BuiltinFont::glyph('?'));
        assert_eq!(BuiltinFont::glyph('\u{1F600}'), BuiltinFont::glyph('?'));
    }

    #[test]
    fn test_shared_instance_is_builtin() {
        let face = builtin_face();
        assert!(face.is_builtin());
        assert_eq!(face.name(), "builtin");
    }
}

//! The contracts between font resolution and rendering
//!
//! - [`FontFace`] - Metrics and outlines for one loaded typeface
//! - [`OutlineSink`] - Where glyph outlines get traced into
//!
//! Fonts never see the image. They describe glyph shapes in image space
//! (y grows downward) and the renderer decides how those shapes become pixels.

use crate::types::LineMetrics;

/// Receives glyph outlines, already positioned in image coordinates
pub trait OutlineSink {
    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);

    fn close(&mut self);

    /// Axis-aligned rectangle as a closed subpath
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.close();
    }
}

/// A typeface the overlay can measure and draw with
///
/// Outline fonts loaded from disk and the built-in bitmap face both implement
/// this, so everything above font resolution stays oblivious to which one it
/// got.
pub trait FontFace: Send + Sync {
    /// Human-readable name, used in logs
    fn name(&self) -> &str;

    /// Vertical metrics at the given pixel size
    fn line_metrics(&self, size: f32) -> LineMetrics;

    /// Horizontal advance of one character at the given pixel size
    fn advance(&self, ch: char, size: f32) -> f32;

    /// Traces one character with its origin at `(x, baseline)`
    fn outline_glyph(&self, ch: char, size: f32, x: f32, baseline: f32, sink: &mut dyn OutlineSink);

    /// Whether this is the fallback face rather than a font file
    fn is_builtin(&self) -> bool {
        false
    }
}

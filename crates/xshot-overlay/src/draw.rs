//! Glyph outlines to tiny-skia paths, and the primitive fills built on them

use tiny_skia::{FillRule, Paint, Path, PathBuilder, PixmapMut, Rect, Transform};

use xshot_core::{Color, OutlineSink};
use xshot_fontdb::FontHandle;

/// Collects outlines into a single tiny-skia path
struct PathSink {
    builder: PathBuilder,
}

impl OutlineSink for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.builder.quad_to(cx, cy, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            self.builder.push_rect(rect);
        }
    }
}

/// Outline of a whole line of text with its line box at `(x, y)`
///
/// `None` when nothing in the text has ink, e.g. all spaces.
pub fn text_path(font: &FontHandle, text: &str, x: i32, y: i32) -> Option<Path> {
    let mut sink = PathSink {
        builder: PathBuilder::new(),
    };
    font.outline(text, x as f32, y as f32, &mut sink);
    sink.builder.finish()
}

/// Anti-aliased paint for glyphs
pub fn glyph_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Fills an already built text path, shifted by `(dx, dy)`
pub fn fill_text_path(image: &mut PixmapMut<'_>, path: &Path, dx: i32, dy: i32, paint: &Paint<'_>) {
    let transform = Transform::from_translate(dx as f32, dy as f32);
    image.fill_path(path, paint, FillRule::Winding, transform, None);
}

/// Draws `text` once, plainly, with its line box at `(x, y)`
pub fn draw_text(image: &mut PixmapMut<'_>, font: &FontHandle, text: &str, x: i32, y: i32, color: Color) {
    if let Some(path) = text_path(font, text, x, y) {
        fill_text_path(image, &path, 0, 0, &glyph_paint(color));
    }
}

/// Fills the inclusive pixel box `[left, right] x [top, bottom]`
pub fn fill_box(image: &mut PixmapMut<'_>, left: i32, top: i32, right: i32, bottom: i32, color: Color) {
    fill_pixels(
        image,
        i64::from(left),
        i64::from(top),
        i64::from(right) + 1,
        i64::from(bottom) + 1,
        color,
    );
}

/// Draws the one-pixel outline of the inclusive box `[left, right] x [top, bottom]`
///
/// The four edges don't overlap, so translucent colors blend once per pixel.
/// Coordinates are wide so rings grown around a box at the `i32` limits
/// still land in the right place.
pub fn stroke_box(image: &mut PixmapMut<'_>, left: i64, top: i64, right: i64, bottom: i64, color: Color) {
    fill_pixels(image, left, top, right + 1, top + 1, color);
    if bottom > top {
        fill_pixels(image, left, bottom, right + 1, bottom + 1, color);
    }
    fill_pixels(image, left, top + 1, left + 1, bottom, color);
    if right > left {
        fill_pixels(image, right, top + 1, right + 1, bottom, color);
    }
}

/// Fills the half-open span `[x0, x1) x [y0, y1)`, clipped to the image
fn fill_pixels(image: &mut PixmapMut<'_>, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(i64::from(image.width()));
    let y1 = y1.min(i64::from(image.height()));
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let Some(rect) = Rect::from_ltrb(x0 as f32, y0 as f32, x1 as f32, y1 as f32) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = false;
    image.fill_rect(rect, &paint, Transform::identity(), None);
}

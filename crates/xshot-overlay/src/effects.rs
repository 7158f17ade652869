// this_file: crates/xshot-overlay/src/effects.rs

//! Decorated text: background, border, shadow, outline, then the text itself
//!
//! Each layer is composited source-over onto the previous ones, so the order
//! below is what the viewer sees from back to front. The glyph path is built
//! once per element and reused for every duplicate draw.

use tiny_skia::PixmapMut;

use xshot_core::{Color, EffectsConfig, TextBounds};
use xshot_fontdb::FontHandle;

use crate::draw::{fill_box, fill_text_path, glyph_paint, stroke_box, text_path};

/// Widest outline drawn; each step adds a ring of duplicate fills
pub const MAX_OUTLINE_WIDTH: u32 = 32;

/// Draws `text` at `(x, y)` with every decoration `effects` turns on
///
/// `bounds` is the measured line box of `text` in `font`; the background is
/// sized from it even when the text itself has no ink.
pub fn apply_effects(
    image: &mut PixmapMut<'_>,
    font: &FontHandle,
    text: &str,
    x: i32,
    y: i32,
    bounds: TextBounds,
    effects: &EffectsConfig,
) {
    if effects.background_enabled {
        draw_background(image, x, y, bounds, effects);
    }

    let Some(path) = text_path(font, text, x, y) else {
        return;
    };

    if effects.text_shadow {
        let paint = glyph_paint(Color::parse_or_black(&effects.shadow_color));
        let [dx, dy] = effects.shadow_offset;
        fill_text_path(image, &path, dx, dy, &paint);
    }

    if effects.text_outline {
        let paint = glyph_paint(Color::parse_or_black(&effects.outline_color));
        if effects.outline_width > MAX_OUTLINE_WIDTH {
            log::warn!(
                "Outline width {} capped at {}",
                effects.outline_width,
                MAX_OUTLINE_WIDTH
            );
        }
        let width = effects.outline_width.min(MAX_OUTLINE_WIDTH) as i32;
        for dx in -width..=width {
            for dy in -width..=width {
                if dx != 0 || dy != 0 {
                    fill_text_path(image, &path, dx, dy, &paint);
                }
            }
        }
    }

    let paint = glyph_paint(Color::parse_or_black(&effects.color));
    fill_text_path(image, &path, 0, 0, &paint);
}

fn draw_background(
    image: &mut PixmapMut<'_>,
    x: i32,
    y: i32,
    bounds: TextBounds,
    effects: &EffectsConfig,
) {
    let [pad_x, pad_y] = effects.background_padding;
    let left = x.saturating_sub(pad_x);
    let top = y.saturating_sub(pad_y);
    let right = x.saturating_add(bounds.width).saturating_add(pad_x);
    let bottom = y.saturating_add(bounds.height).saturating_add(pad_y);

    let fill = Color::parse_or_black(&effects.background_color).with_alpha(effects.background_opacity);
    log::trace!("Background {},{} .. {},{}", left, top, right, bottom);
    fill_box(image, left, top, right, bottom, fill);

    if effects.background_border {
        let border = Color::parse_or_black(&effects.border_color);
        let (width, height) = (i64::from(image.width()), i64::from(image.height()));
        for i in 0..i64::from(effects.border_width) {
            let (l, t) = (i64::from(left) - i, i64::from(top) - i);
            let (r, b) = (i64::from(right) + i, i64::from(bottom) + i);
            // Rings only grow, so once one misses the image the rest do too
            if l < 0 && t < 0 && r >= width && b >= height {
                break;
            }
            stroke_box(image, l, t, r, b, border);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Pixmap;

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).unwrap();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    fn plain() -> EffectsConfig {
        EffectsConfig {
            color: "#FF0000".to_string(),
            ..EffectsConfig::default()
        }
    }

    #[test]
    fn test_no_effects_equals_plain_draw() {
        let font = FontHandle::builtin(16.0);
        let bounds = font.measure("XShot");

        let mut decorated = Pixmap::new(120, 60).unwrap();
        apply_effects(&mut decorated.as_mut(), &font, "XShot", 20, 20, bounds, &plain());

        let mut reference = Pixmap::new(120, 60).unwrap();
        crate::draw::draw_text(&mut reference.as_mut(), &font, "XShot", 20, 20, Color::rgb(255, 0, 0));

        assert_eq!(decorated.data(), reference.data());
    }

    #[test]
    fn test_background_sits_under_text() {
        let font = FontHandle::builtin(8.0);
        let bounds = font.measure("I");
        let effects = EffectsConfig {
            background_enabled: true,
            background_color: "#0000FF".to_string(),
            background_opacity: 255,
            ..plain()
        };

        let mut pixmap = Pixmap::new(40, 40).unwrap();
        apply_effects(&mut pixmap.as_mut(), &font, "I", 10, 10, bounds, &effects);

        // Padding corner is background, the stem of the I is text
        assert_eq!(pixel(&pixmap, 0, 5), [0, 0, 255, 255]);
        assert_eq!(pixel(&pixmap, 12, 11), [255, 0, 0, 255]);
        // Outside the padded box stays untouched
        assert_eq!(pixel(&pixmap, 10, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn test_border_rings_grow_outward() {
        let font = FontHandle::builtin(8.0);
        let bounds = font.measure("I");
        let effects = EffectsConfig {
            background_enabled: true,
            background_opacity: 0,
            background_border: true,
            border_color: "#00FF00".to_string(),
            border_width: 2,
            background_padding: [2, 2],
            ..plain()
        };

        let mut pixmap = Pixmap::new(40, 40).unwrap();
        apply_effects(&mut pixmap.as_mut(), &font, "I", 10, 10, bounds, &effects);

        assert_eq!(pixel(&pixmap, 8, 8), [0, 255, 0, 255]);
        assert_eq!(pixel(&pixmap, 7, 7), [0, 255, 0, 255]);
        assert_eq!(pixel(&pixmap, 6, 6), [0, 0, 0, 0]);
        assert_eq!(pixel(&pixmap, 9, 9), [0, 0, 0, 0]);
    }

    #[test]
    fn test_shadow_is_offset_and_beneath() {
        let font = FontHandle::builtin(8.0);
        let bounds = font.measure("I");
        let effects = EffectsConfig {
            text_shadow: true,
            shadow_color: "#00FF00".to_string(),
            shadow_offset: [1, 0],
            ..plain()
        };

        let mut pixmap = Pixmap::new(40, 40).unwrap();
        apply_effects(&mut pixmap.as_mut(), &font, "I", 10, 10, bounds, &effects);

        // The stem column covers the shadow, the next column shows it
        assert_eq!(pixel(&pixmap, 12, 12), [255, 0, 0, 255]);
        assert_eq!(pixel(&pixmap, 13, 12), [0, 255, 0, 255]);
    }

    #[test]
    fn test_outline_surrounds_text() {
        let font = FontHandle::builtin(8.0);
        let bounds = font.measure("I");
        let effects = EffectsConfig {
            text_outline: true,
            outline_color: "#FFFFFF".to_string(),
            outline_width: 1,
            ..plain()
        };

        let mut pixmap = Pixmap::new(40, 40).unwrap();
        apply_effects(&mut pixmap.as_mut(), &font, "I", 10, 10, bounds, &effects);

        assert_eq!(pixel(&pixmap, 12, 12), [255, 0, 0, 255]);
        assert_eq!(pixel(&pixmap, 11, 12), [255, 255, 255, 255]);
        assert_eq!(pixel(&pixmap, 13, 12), [255, 255, 255, 255]);
    }

    #[test]
    fn test_blank_text_still_gets_background() {
        let font = FontHandle::builtin(8.0);
        let bounds = font.measure("  ");
        let effects = EffectsConfig {
            background_enabled: true,
            background_opacity: 255,
            ..plain()
        };

        let mut pixmap = Pixmap::new(40, 40).unwrap();
        apply_effects(&mut pixmap.as_mut(), &font, "  ", 10, 10, bounds, &effects);
        assert_eq!(pixel(&pixmap, 10, 10), [0, 0, 0, 255]);
    }

    #[test]
    fn test_huge_outline_width_is_capped() {
        let font = FontHandle::builtin(8.0);
        let bounds = font.measure("I");
        let outline = |width| EffectsConfig {
            text_outline: true,
            outline_width: width,
            ..plain()
        };

        let mut huge = Pixmap::new(100, 100).unwrap();
        apply_effects(&mut huge.as_mut(), &font, "I", 40, 40, bounds, &outline(u32::MAX));
        let mut capped = Pixmap::new(100, 100).unwrap();
        apply_effects(&mut capped.as_mut(), &font, "I", 40, 40, bounds, &outline(MAX_OUTLINE_WIDTH));

        assert_eq!(huge.data(), capped.data());
    }

    #[test]
    fn test_huge_border_stops_past_the_image() {
        let font = FontHandle::builtin(8.0);
        let bounds = font.measure("I");
        let border = |width| EffectsConfig {
            background_enabled: true,
            background_border: true,
            background_padding: [0, 0],
            border_width: width,
            ..plain()
        };

        let mut huge = Pixmap::new(20, 20).unwrap();
        apply_effects(&mut huge.as_mut(), &font, "I", 5, 5, bounds, &border(u32::MAX));
        let mut enough = Pixmap::new(20, 20).unwrap();
        apply_effects(&mut enough.as_mut(), &font, "I", 5, 5, bounds, &border(40));

        assert_eq!(huge.data(), enough.data());
        assert_eq!(pixel(&huge, 0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_extreme_padding_and_shadow_stay_on_image() {
        let font = FontHandle::builtin(8.0);
        let bounds = font.measure("I");
        let effects = EffectsConfig {
            background_enabled: true,
            background_opacity: 255,
            background_color: "#0000FF".to_string(),
            background_padding: [i32::MAX, i32::MAX],
            text_shadow: true,
            shadow_offset: [i32::MAX, i32::MIN],
            ..plain()
        };

        let mut pixmap = Pixmap::new(30, 30).unwrap();
        apply_effects(&mut pixmap.as_mut(), &font, "I", 10, 10, bounds, &effects);
        assert_eq!(pixel(&pixmap, 0, 0), [0, 0, 255, 255]);
        assert_eq!(pixel(&pixmap, 29, 29), [0, 0, 255, 255]);
        assert_eq!(pixel(&pixmap, 12, 11), [255, 0, 0, 255]);
    }
}

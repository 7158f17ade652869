// this_file: crates/xshot-overlay/src/layout.rs

//! Bounding-box arithmetic: where text goes and how it's kept on the image
//!
//! Coordinates are the top-left corner of the text's line box, in whole
//! pixels. Every function here is pure so placement can be tested without
//! touching a pixmap. Offsets and sizes come straight from user config, so
//! all sums saturate instead of overflowing.

use xshot_core::{Anchor, HAlign, TextBounds, VAlign};

/// Minimum distance between text and the image edge
pub const PADDING: i32 = 20;

/// Vertical gap between a header/footer and its timestamp
pub const TIME_GAP: i32 = 5;

/// Places a text box on the image according to its anchor
pub fn text_position(
    bounds: TextBounds,
    anchor: Anchor,
    width: i32,
    height: i32,
    padding: i32,
) -> (i32, i32) {
    let x = match anchor.horizontal {
        HAlign::Left => padding,
        HAlign::Right => far_edge(width, bounds.width, padding),
        HAlign::Center => width.saturating_sub(bounds.width).div_euclid(2),
    };
    let y = match anchor.vertical {
        VAlign::Top => padding,
        VAlign::Bottom => far_edge(height, bounds.height, padding),
        VAlign::Center => height.saturating_sub(bounds.height).div_euclid(2),
    };
    (x, y)
}

/// Pulls a position back inside `[padding, dimension - padding]`
///
/// Text too large to fit is pinned to the top-left padding corner. The
/// result is never below `padding` on either axis.
pub fn clamp_to_bounds(
    x: i32,
    y: i32,
    bounds: TextBounds,
    width: i32,
    height: i32,
    padding: i32,
) -> (i32, i32) {
    (
        clamp_axis(x, bounds.width, width, padding),
        clamp_axis(y, bounds.height, height, padding),
    )
}

fn clamp_axis(value: i32, extent: i32, dimension: i32, padding: i32) -> i32 {
    let value = if value < padding {
        padding
    } else if value.saturating_add(extent) > dimension.saturating_sub(padding) {
        far_edge(dimension, extent, padding)
    } else {
        value
    };
    value.max(padding)
}

/// Start of an `extent`-long span that ends `padding` before `dimension`
fn far_edge(dimension: i32, extent: i32, padding: i32) -> i32 {
    dimension.saturating_sub(extent).saturating_sub(padding)
}

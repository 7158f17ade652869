// this_file: crates/xshot-core/src/color.rs

//! Colors as they appear in overlay configuration
//!
//! Config files carry colors as strings: hex triplets, `rgb(...)` calls or a
//! handful of CSS names. [`Color::parse`] is strict; [`Color::parse_or_black`]
//! is what the renderer uses, so a typo in a config never stops a render.

use crate::error::{OverlayError, Result};

/// Straight (non-premultiplied) RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// Same color with the alpha channel replaced
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parses a color string, rejecting anything it doesn't recognize
    pub fn parse(color: &str) -> Result<Self> {
        let color = color.trim();
        let invalid = || OverlayError::Color(color.to_string());

        if let Some(hex) = color.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let lower = color.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_components(args).ok_or_else(invalid);
        }

        named(&lower).ok_or_else(invalid)
    }

    /// Parses a color string, falling back to opaque black
    pub fn parse_or_black(color: &str) -> Self {
        match Self::parse(color) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("{}, falling back to black", e);
                Self::black()
            },
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    // Short form doubles each nibble: #f80 == #ff8800
    let short = |s: &str| channel(s).map(|v| v * 17);

    match hex.len() {
        3 => Some(Color::rgb(
            short(&hex[0..1])?,
            short(&hex[1..2])?,
            short(&hex[2..3])?,
        )),
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color::rgba(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn parse_components(args: &str) -> Option<Color> {
    let parts: Vec<u8> = args
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;

    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(*r, *g, *b)),
        [r, g, b, a] => Some(Color::rgba(*r, *g, *b, *a)),
        _ => None,
    }
}

fn named(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::black(),
        "white" => Color::white(),
        "transparent" => Color::transparent(),
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "blue" => Color::rgb(0, 0, 255),
        "yellow" => Color::rgb(255, 255, 0),
        "cyan" | "aqua" => Color::rgb(0, 255, 255),
        "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "silver" => Color::rgb(192, 192, 192),
        "orange" => Color::rgb(255, 165, 0),
        "purple" => Color::rgb(128, 0, 128),
        "navy" => Color::rgb(0, 0, 128),
        _ => return None,
    };
    Some(color)
}

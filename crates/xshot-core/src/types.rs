// this_file: crates/xshot-core/src/types.rs

//! Core value types shared by font resolution and rendering.

use std::fmt;

/// Typeface families a config can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Mono,
    Sans,
    Serif,
    Modern,
    Classic,
    Minimal,
}

impl FontFamily {
    pub const ALL: [FontFamily; 6] = [
        FontFamily::Mono,
        FontFamily::Sans,
        FontFamily::Serif,
        FontFamily::Modern,
        FontFamily::Classic,
        FontFamily::Minimal,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let family = match name.trim().to_ascii_lowercase().as_str() {
            "mono" => Self::Mono,
            "sans" => Self::Sans,
            "serif" => Self::Serif,
            "modern" => Self::Modern,
            "classic" => Self::Classic,
            "minimal" => Self::Minimal,
            _ => return None,
        };
        Some(family)
    }

    /// Unknown family names resolve as monospace
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("Unknown font family '{}', using mono", name);
            Self::Mono
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Sans => "sans",
            Self::Serif => "serif",
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weight and slant combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        let style = match name.trim().to_ascii_lowercase().as_str() {
            "normal" | "regular" => Self::Normal,
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "bold-italic" | "bolditalic" => Self::BoldItalic,
            _ => return None,
        };
        Some(style)
    }

    /// Unknown style names resolve as normal
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("Unknown font style '{}', using normal", name);
            Self::Normal
        })
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold-italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Vertical metrics of a face at a given size, in pixels
///
/// `descent` is positive and measured downward from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl LineMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Measured extent of a line of text, in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub width: i32,
    pub height: i32,
}

impl TextBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_lenient() {
        assert_eq!(FontFamily::parse_lenient("Serif"), FontFamily::Serif);
        assert_eq!(FontFamily::parse_lenient("comic"), FontFamily::Mono);
        for family in FontFamily::ALL {
            assert_eq!(FontFamily::from_name(family.name()), Some(family));
        }
    }

    #[test]
    fn test_style_flags() {
        assert_eq!(FontStyle::parse_lenient("bold-italic"), FontStyle::BoldItalic);
        assert_eq!(FontStyle::parse_lenient("heavy"), FontStyle::Normal);
        assert!(FontStyle::BoldItalic.is_bold());
        assert!(FontStyle::BoldItalic.is_italic());
        assert!(!FontStyle::Italic.is_bold());
    }

    #[test]
    fn test_line_height() {
        let metrics = LineMetrics {
            ascent: 15.5,
            descent: 4.5,
        };
        assert_eq!(metrics.height(), 20.0);
    }
}

//! Named anchor positions
//!
//! An anchor is a pair of independent alignments, one per axis. Config files
//! spell them as `"<vertical>-<horizontal>"` (`"top-left"`, `"bottom-center"`)
//! or with one of the short legacy aliases (`"top"`, `"bottom"`, `"center"`).

use std::fmt;

/// Horizontal alignment of a text box within the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical alignment of a text box within the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Where a piece of text sits on the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub vertical: VAlign,
    pub horizontal: HAlign,
}

impl Anchor {
    pub const TOP_LEFT: Anchor = Anchor::new(VAlign::Top, HAlign::Left);
    pub const TOP_CENTER: Anchor = Anchor::new(VAlign::Top, HAlign::Center);
    pub const TOP_RIGHT: Anchor = Anchor::new(VAlign::Top, HAlign::Right);
    pub const CENTER_LEFT: Anchor = Anchor::new(VAlign::Center, HAlign::Left);
    pub const CENTER_CENTER: Anchor = Anchor::new(VAlign::Center, HAlign::Center);
    pub const CENTER_RIGHT: Anchor = Anchor::new(VAlign::Center, HAlign::Right);
    pub const BOTTOM_LEFT: Anchor = Anchor::new(VAlign::Bottom, HAlign::Left);
    pub const BOTTOM_CENTER: Anchor = Anchor::new(VAlign::Bottom, HAlign::Center);
    pub const BOTTOM_RIGHT: Anchor = Anchor::new(VAlign::Bottom, HAlign::Right);

    pub const fn new(vertical: VAlign, horizontal: HAlign) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Looks up a position name, including the legacy aliases
    ///
    /// Returns `None` for names that aren't recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        let anchor = match name.trim().to_ascii_lowercase().as_str() {
            "top" | "top-center" => Self::TOP_CENTER,
            "top-left" => Self::TOP_LEFT,
            "top-right" => Self::TOP_RIGHT,
            "bottom" | "bottom-center" => Self::BOTTOM_CENTER,
            "bottom-left" => Self::BOTTOM_LEFT,
            "bottom-right" => Self::BOTTOM_RIGHT,
            "center" | "center-center" => Self::CENTER_CENTER,
            "center-left" => Self::CENTER_LEFT,
            "center-right" => Self::CENTER_RIGHT,
            _ => return None,
        };
        Some(anchor)
    }

    /// Like [`Anchor::from_name`], but unknown names land at bottom-center
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown position '{}', using bottom-center", name);
            Self::BOTTOM_CENTER
        })
    }

    /// Canonical `"vertical-horizontal"` spelling
    pub fn name(&self) -> &'static str {
        match (self.vertical, self.horizontal) {
            (VAlign::Top, HAlign::Left) => "top-left",
            (VAlign::Top, HAlign::Center) => "top-center",
            (VAlign::Top, HAlign::Right) => "top-right",
            (VAlign::Center, HAlign::Left) => "center-left",
            (VAlign::Center, HAlign::Center) => "center-center",
            (VAlign::Center, HAlign::Right) => "center-right",
            (VAlign::Bottom, HAlign::Left) => "bottom-left",
            (VAlign::Bottom, HAlign::Center) => "bottom-center",
            (VAlign::Bottom, HAlign::Right) => "bottom-right",
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::BOTTOM_CENTER
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

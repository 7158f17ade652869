// this_file: crates/xshot-core/src/config.rs

//! The overlay configuration tree
//!
//! Mirrors the `header` / `footer` sections of the XShot config file. Every
//! key is optional: a missing key takes the default of the section it lives
//! in, which is why the same [`TextElementConfig`] resolves differently under
//! the header than under the footer. String-typed keys (positions, families,
//! colors) are interpreted at render time so that a bad value degrades to a
//! default instead of rejecting the whole document.

use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;
use crate::types::{FontFamily, FontStyle};

/// strftime pattern used when a section doesn't set `time_format`
pub const DEFAULT_TIME_FORMAT: &str = "%a %d.%b.%Y %H:%M";

/// Decorations drawn around and behind a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Main text color
    pub color: String,
    pub text_shadow: bool,
    pub shadow_color: String,
    /// Shadow displacement as `[dx, dy]`
    pub shadow_offset: [i32; 2],
    pub text_outline: bool,
    pub outline_color: String,
    pub outline_width: u32,
    pub background_enabled: bool,
    pub background_color: String,
    /// Background alpha, 0-255
    pub background_opacity: u8,
    /// Space around the text as `[horizontal, vertical]`
    pub background_padding: [i32; 2],
    pub background_border: bool,
    pub border_color: String,
    pub border_width: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            text_shadow: false,
            shadow_color: "#FFFFFF".to_string(),
            shadow_offset: [2, 2],
            text_outline: false,
            outline_color: "#FFFFFF".to_string(),
            outline_width: 1,
            background_enabled: false,
            background_color: "#000000".to_string(),
            background_opacity: 128,
            background_padding: [10, 5],
            background_border: false,
            border_color: "#FFFFFF".to_string(),
            border_width: 1,
        }
    }
}

/// One styled piece of text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextElementConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Anchor name such as `"top-left"` or the alias `"bottom"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(flatten)]
    pub effects: EffectsConfig,
}

/// Fallback values for a [`TextElementConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementDefaults {
    pub text: &'static str,
    pub position: &'static str,
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f32,
}

/// A [`TextElementConfig`] with every default filled in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedElement<'a> {
    pub text: &'a str,
    pub anchor: Anchor,
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f32,
    pub effects: &'a EffectsConfig,
}

impl TextElementConfig {
    /// Fills the gaps in this element from `defaults`
    pub fn resolve<'a>(&'a self, defaults: &ElementDefaults) -> ResolvedElement<'a> {
        let text = self.text.as_deref().unwrap_or(defaults.text);
        let anchor = Anchor::parse_lenient(self.position.as_deref().unwrap_or(defaults.position));
        let family = self
            .font_family
            .as_deref()
            .map_or(defaults.family, FontFamily::parse_lenient);
        let style = self
            .font_style
            .as_deref()
            .map_or(defaults.style, FontStyle::parse_lenient);

        ResolvedElement {
            text,
            anchor,
            family,
            style,
            size: valid_size(self.size, defaults.size),
            effects: &self.effects,
        }
    }
}

/// Header or footer section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub element: TextElementConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_size: Option<f32>,
    pub custom_elements: Vec<CustomElementConfig>,
}

/// Fallback values for a [`SectionConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionDefaults {
    pub element: ElementDefaults,
    pub enabled: bool,
    pub show_time: bool,
    pub time_size: f32,
}

pub const HEADER_DEFAULTS: SectionDefaults = SectionDefaults {
    element: ElementDefaults {
        text: "XShot Screenshot",
        position: "top",
        family: FontFamily::Sans,
        style: FontStyle::Bold,
        size: 22.0,
    },
    enabled: false,
    show_time: false,
    time_size: 18.0,
};

pub const FOOTER_DEFAULTS: SectionDefaults = SectionDefaults {
    element: ElementDefaults {
        text: "Shot by XShot",
        position: "bottom",
        family: FontFamily::Mono,
        style: FontStyle::Normal,
        size: 20.0,
    },
    enabled: true,
    show_time: true,
    time_size: 15.0,
};

pub const CUSTOM_ELEMENT_DEFAULTS: ElementDefaults = ElementDefaults {
    text: "Custom Text",
    position: "center",
    family: FontFamily::Mono,
    style: FontStyle::Normal,
    size: 16.0,
};

impl SectionConfig {
    pub fn is_enabled(&self, defaults: &SectionDefaults) -> bool {
        self.enabled.unwrap_or(defaults.enabled)
    }

    pub fn shows_time(&self, defaults: &SectionDefaults) -> bool {
        self.show_time.unwrap_or(defaults.show_time)
    }

    pub fn time_format(&self) -> &str {
        self.time_format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT)
    }

    pub fn time_size(&self, defaults: &SectionDefaults) -> f32 {
        valid_size(self.time_size, defaults.time_size)
    }
}

/// Extra text element with its own style and a manual nudge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomElementConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub element: TextElementConfig,
    /// Pixel displacement applied after anchoring, as `[dx, dy]`
    pub offset: [i32; 2],
}

impl Default for CustomElementConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            element: TextElementConfig::default(),
            offset: [0, 0],
        }
    }
}

/// Everything the text overlay reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub header: SectionConfig,
    pub footer: SectionConfig,
}

fn valid_size(size: Option<f32>, fallback: f32) -> f32 {
    match size {
        Some(size) if size.is_finite() && size > 0.0 => size,
        Some(size) => {
            log::warn!("Ignoring font size {}, using {}", size, fallback);
            fallback
        },
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_section_defaults() {
        let config: OverlayConfig = serde_json::from_str("{}").unwrap();

        assert!(!config.header.is_enabled(&HEADER_DEFAULTS));
        assert!(config.footer.is_enabled(&FOOTER_DEFAULTS));
        assert!(config.footer.shows_time(&FOOTER_DEFAULTS));
        assert_eq!(config.footer.time_format(), DEFAULT_TIME_FORMAT);
        assert_eq!(config.footer.time_size(&FOOTER_DEFAULTS), 15.0);

        let footer = config.footer.element.resolve(&FOOTER_DEFAULTS.element);
        assert_eq!(footer.text, "Shot by XShot");
        assert_eq!(footer.anchor, Anchor::BOTTOM_CENTER);
        assert_eq!(footer.family, FontFamily::Mono);
        assert_eq!(footer.size, 20.0);

        let header = config.header.element.resolve(&HEADER_DEFAULTS.element);
        assert_eq!(header.text, "XShot Screenshot");
        assert_eq!(header.anchor, Anchor::TOP_CENTER);
        assert_eq!(header.style, FontStyle::Bold);
    }

    #[test]
    fn test_flat_keys_deserialize_into_effects() {
        let config: OverlayConfig = serde_json::from_str(
            r##"{
                "footer": {
                    "text": "hello",
                    "position": "bottom-right",
                    "size": 30,
                    "color": "#FF0000",
                    "text_shadow": true,
                    "shadow_offset": [3, 4],
                    "background_enabled": true,
                    "background_opacity": 200,
                    "custom_elements": [
                        {"text": "tag", "offset": [5, -5]},
                        {"enabled": false}
                    ]
                }
            }"##,
        )
        .unwrap();

        let footer = config.footer.element.resolve(&FOOTER_DEFAULTS.element);
        assert_eq!(footer.text, "hello");
        assert_eq!(footer.anchor, Anchor::BOTTOM_RIGHT);
        assert_eq!(footer.size, 30.0);
        assert_eq!(footer.effects.color, "#FF0000");
        assert!(footer.effects.text_shadow);
        assert_eq!(footer.effects.shadow_offset, [3, 4]);
        assert_eq!(footer.effects.background_opacity, 200);
        // Untouched effect keys keep their defaults
        assert_eq!(footer.effects.background_padding, [10, 5]);

        let elements = &config.footer.custom_elements;
        assert_eq!(elements.len(), 2);
        assert!(elements[0].enabled);
        assert_eq!(elements[0].offset, [5, -5]);
        assert!(!elements[1].enabled);

        let custom = elements[1].element.resolve(&CUSTOM_ELEMENT_DEFAULTS);
        assert_eq!(custom.text, "Custom Text");
        assert_eq!(custom.anchor, Anchor::CENTER_CENTER);
        assert_eq!(custom.size, 16.0);
    }

    #[test]
    fn test_bad_values_degrade() {
        let config: OverlayConfig = serde_json::from_str(
            r#"{"header": {"position": "sideways", "font_family": "comic", "font_style": "wide", "size": -4}}"#,
        )
        .unwrap();

        let header = config.header.element.resolve(&HEADER_DEFAULTS.element);
        assert_eq!(header.anchor, Anchor::BOTTOM_CENTER);
        assert_eq!(header.family, FontFamily::Mono);
        assert_eq!(header.style, FontStyle::Normal);
        assert_eq!(header.size, 22.0);
    }
}

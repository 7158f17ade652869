//! XShot Core: the shared vocabulary of the text overlay
//!
//! A screenshot goes in, a captioned screenshot comes out. This crate holds
//! the pieces every stage agrees on: what a color is, where "bottom-right"
//! lands, which config keys exist and what they default to, and how a font
//! hands its glyph shapes to the renderer.
//!
//! ## Modules
//!
//! - [`config`] - The header / footer / custom element configuration tree
//! - [`anchor`] - Named text positions and their legacy aliases
//! - [`color`] - Lenient color parsing
//! - [`types`] - Font families, styles and metrics
//! - [`traits`] - [`FontFace`] and [`OutlineSink`]
//! - [`error`] - Error types
//!
//! ```
//! use xshot_core::{Anchor, OverlayConfig, FOOTER_DEFAULTS};
//!
//! let config = OverlayConfig::default();
//! let footer = config.footer.element.resolve(&FOOTER_DEFAULTS.element);
//! assert_eq!(footer.text, "Shot by XShot");
//! assert_eq!(footer.anchor, Anchor::BOTTOM_CENTER);
//! ```

pub mod anchor;
pub mod color;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use anchor::{Anchor, HAlign, VAlign};
pub use color::Color;
pub use config::{
    CustomElementConfig, EffectsConfig, ElementDefaults, OverlayConfig, ResolvedElement,
    SectionConfig, SectionDefaults, TextElementConfig, CUSTOM_ELEMENT_DEFAULTS,
    DEFAULT_TIME_FORMAT, FOOTER_DEFAULTS, HEADER_DEFAULTS,
};
pub use error::{FontLoadError, OverlayError, Result};
pub use traits::{FontFace, OutlineSink};
pub use types::{FontFamily, FontStyle, LineMetrics, TextBounds};

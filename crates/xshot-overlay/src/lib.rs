//! XShot text overlays: headers, footers, timestamps and custom captions
//!
//! [`TextRenderer`] takes an [`OverlayConfig`](xshot_core::OverlayConfig),
//! finds fonts through an [`xshot_fontdb::FontResolver`], and composites
//! styled text onto an image that someone else decoded and will encode.
//! Styling problems never fail a render: bad colors turn black, missing fonts
//! become the built-in face, and out-of-range positions get pulled back
//! inside the padding.
//!
//! ```
//! use tiny_skia::Pixmap;
//! use xshot_core::OverlayConfig;
//! use xshot_fontdb::FontResolver;
//! use xshot_overlay::TextRenderer;
//!
//! let renderer = TextRenderer::new(OverlayConfig::default())
//!     .with_resolver(FontResolver::isolated());
//!
//! let mut pixmap = Pixmap::new(800, 600).unwrap();
//! pixmap.fill(tiny_skia::Color::WHITE);
//! renderer.render_all(&mut pixmap.as_mut());
//!
//! let placed = renderer.layout_footer(800, 600);
//! let footer = &placed[0];
//! assert_eq!(footer.text, "Shot by XShot");
//! assert_eq!(footer.y, 600 - footer.bounds.height - 20);
//! ```

pub mod draw;
pub mod effects;
pub mod layout;
mod renderer;
mod timestamp;

pub use effects::apply_effects;
pub use layout::{clamp_to_bounds, text_position, PADDING, TIME_GAP};
pub use renderer::{PlacedText, TextRenderer};
pub use timestamp::Clock;

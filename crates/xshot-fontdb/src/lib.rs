//! Where fonts come from: discovery and loading for XShot
//!
//! Asks for a family and a style, gets back something that can measure and
//! trace text. The answer might be a bundled TTF, an installed system font,
//! or the built-in bitmap face when the machine has nothing suitable.
//!
//! ```
//! use xshot_core::{FontFamily, FontStyle};
//! use xshot_fontdb::FontResolver;
//!
//! let resolver = FontResolver::isolated();
//! let handle = resolver.resolve(FontFamily::Mono, FontStyle::Normal, 20.0);
//! assert!(handle.is_builtin());
//! assert!(handle.measure("Shot by XShot").width > 0);
//! ```

mod builtin;
pub mod candidates;
mod font;
mod resolver;

pub use builtin::{builtin_face, BuiltinFont};
pub use candidates::Platform;
pub use font::Font;
pub use resolver::{FontHandle, FontResolver, DEFAULT_ASSETS_DIR, USER_FONTS_DIR};

// this_file: crates/xshot-fontdb/src/resolver.rs

//! Turning `(family, style, size)` into something that can draw
//!
//! Resolution walks an ordered list of candidate files and takes the first
//! one that loads. It never fails: when every candidate is missing or broken
//! the built-in bitmap face answers instead.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use walkdir::WalkDir;

use xshot_core::{FontFace, FontFamily, FontStyle, LineMetrics, OutlineSink, TextBounds};

use crate::builtin::builtin_face;
use crate::candidates::{bundled_files, platform_candidates, scan_names, Platform};
use crate::font::Font;

/// Bundled font directory, relative to the working directory
pub const DEFAULT_ASSETS_DIR: &str = "assets/fonts";
/// Per-user font directory
pub const USER_FONTS_DIR: &str = "~/.config/xshot/fonts";
/// How deep the system font scan descends
const SCAN_DEPTH: usize = 5;

/// A face paired with the pixel size it will be used at
#[derive(Clone)]
pub struct FontHandle {
    face: Arc<dyn FontFace>,
    size: f32,
}

impl FontHandle {
    pub fn new(face: Arc<dyn FontFace>, size: f32) -> Self {
        Self { face, size }
    }

    /// The built-in bitmap face at `size`
    pub fn builtin(size: f32) -> Self {
        Self::new(builtin_face(), size)
    }

    pub fn face(&self) -> &Arc<dyn FontFace> {
        &self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_builtin(&self) -> bool {
        self.face.is_builtin()
    }

    pub fn metrics(&self) -> LineMetrics {
        self.face.line_metrics(self.size)
    }

    /// Line box of `text`: summed advances by ascent plus descent
    ///
    /// Control characters take no space, so a stray newline doesn't shift
    /// the layout.
    pub fn measure(&self, text: &str) -> TextBounds {
        let width: f32 = drawable(text).map(|ch| self.face.advance(ch, self.size)).sum();
        TextBounds::new(width.ceil() as i32, self.metrics().height().ceil() as i32)
    }

    /// Traces `text` with the top of its line box at `(x, y)`
    pub fn outline(&self, text: &str, x: f32, y: f32, sink: &mut dyn OutlineSink) {
        let baseline = y + self.metrics().ascent;
        let mut pen_x = x;
        for ch in drawable(text) {
            self.face.outline_glyph(ch, self.size, pen_x, baseline, sink);
            pen_x += self.face.advance(ch, self.size);
        }
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("face", &self.face.name())
            .field("size", &self.size)
            .finish()
    }
}

fn drawable(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|ch| !ch.is_control())
}

/// Finds font files for families and remembers what it loaded
///
/// Loaded files are cached by path, failures included, so a broken font is
/// read once per resolver rather than once per render.
pub struct FontResolver {
    platform: Platform,
    explicit: HashMap<FontFamily, Vec<PathBuf>>,
    assets_dirs: Vec<PathBuf>,
    use_platform_table: bool,
    scan_dirs: Vec<PathBuf>,
    loaded: Mutex<HashMap<PathBuf, Option<Arc<Font>>>>,
    scan_index: OnceCell<HashMap<String, PathBuf>>,
}

impl FontResolver {
    /// Resolver for the platform we're running on
    pub fn new() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Resolver using another platform's font locations
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            explicit: HashMap::new(),
            assets_dirs: vec![
                PathBuf::from(DEFAULT_ASSETS_DIR),
                PathBuf::from(shellexpand::tilde(USER_FONTS_DIR).into_owned()),
            ],
            use_platform_table: true,
            scan_dirs: platform.system_font_dirs(),
            loaded: Mutex::new(HashMap::new()),
            scan_index: OnceCell::new(),
        }
    }

    /// Resolver that only knows about explicitly registered files
    ///
    /// Everything else resolves to the built-in face, which makes layout
    /// independent of the fonts installed on the machine.
    pub fn isolated() -> Self {
        Self {
            assets_dirs: Vec::new(),
            use_platform_table: false,
            scan_dirs: Vec::new(),
            ..Self::new()
        }
    }

    /// Adds a directory of bundled fonts, searched before the defaults
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dirs.insert(0, dir.into());
        self
    }

    /// Replaces the directories scanned as a last resort
    pub fn with_scan_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.scan_dirs = dirs;
        self.scan_index = OnceCell::new();
        self
    }

    /// Skips the platform table and the directory scan
    pub fn without_system_fonts(mut self) -> Self {
        self.use_platform_table = false;
        self.scan_dirs.clear();
        self
    }

    /// Registers a file to try first for `family`, whatever the style
    pub fn with_font_file(mut self, family: FontFamily, path: impl Into<PathBuf>) -> Self {
        self.explicit.entry(family).or_default().push(path.into());
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Every path tried for a family and style, in order, before the scan
    pub fn candidates(&self, family: FontFamily, style: FontStyle) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.explicit.get(&family).cloned().unwrap_or_default();

        let bundled = bundled_files(family, style);
        for dir in &self.assets_dirs {
            paths.extend(bundled.iter().map(|file| dir.join(file)));
        }

        if self.use_platform_table {
            paths.extend(
                platform_candidates(family, style, self.platform)
                    .into_iter()
                    .map(PathBuf::from),
            );
        }

        paths
    }

    /// Resolves a face and pairs it with `size`
    pub fn resolve(&self, family: FontFamily, style: FontStyle, size: f32) -> FontHandle {
        FontHandle::new(self.resolve_face(family, style), size)
    }

    /// Resolves a face, falling back to the built-in one
    pub fn resolve_face(&self, family: FontFamily, style: FontStyle) -> Arc<dyn FontFace> {
        for path in self.candidates(family, style) {
            if let Some(font) = self.load_cached(&path) {
                log::debug!("Resolved {} {} to {}", family, style, path.display());
                return font;
            }
        }

        if let Some(path) = self.scan(family, style) {
            if let Some(font) = self.load_cached(&path) {
                log::debug!("Resolved {} {} by scan to {}", family, style, path.display());
                return font;
            }
        }

        log::warn!("No font file for {} {}, using built-in font", family, style);
        builtin_face()
    }

    /// Number of font files currently held in memory
    pub fn loaded_count(&self) -> usize {
        self.loaded.lock().values().filter(|font| font.is_some()).count()
    }

    fn load_cached(&self, path: &Path) -> Option<Arc<Font>> {
        if let Some(cached) = self.loaded.lock().get(path) {
            return cached.clone();
        }

        // Missing files are the common case and not worth remembering
        if !path.is_file() {
            return None;
        }

        let font = match Font::from_file(path) {
            Ok(font) => Some(Arc::new(font)),
            Err(e) => {
                log::debug!("Skipping {}: {}", path.display(), e);
                None
            },
        };
        self.loaded.lock().insert(path.to_path_buf(), font.clone());
        font
    }

    fn scan(&self, family: FontFamily, style: FontStyle) -> Option<PathBuf> {
        if self.scan_dirs.is_empty() {
            return None;
        }

        let index = self.scan_index.get_or_init(|| build_scan_index(&self.scan_dirs));
        scan_names(family, style, self.platform)
            .into_iter()
            .find_map(|name| index.get(&name).cloned())
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps font file names to the first path they were found at
fn build_scan_index(dirs: &[PathBuf]) -> HashMap<String, PathBuf> {
    let mut index = HashMap::new();

    for dir in dirs.iter().filter(|dir| dir.is_dir()) {
        for entry in WalkDir::new(dir)
            .max_depth(SCAN_DEPTH)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            index.entry(name).or_insert_with(|| entry.into_path());
        }
    }

    log::debug!("Indexed {} font files", index.len());
    index
}

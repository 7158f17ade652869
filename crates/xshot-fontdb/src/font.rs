// this_file: crates/xshot-fontdb/src/font.rs

//! Outline fonts loaded from disk
//!
//! Fonts store their raw data and create a `FontRef` on demand for parsing.
//! This keeps [`Font`] free of self-references and properly supports TTC
//! collections with multiple faces.

use std::fs;
use std::path::Path;

use read_fonts::FileRef;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::TableProvider;
use skrifa::{FontRef, GlyphId, MetadataProvider};

use xshot_core::{FontFace, FontLoadError, LineMetrics, OutlineSink};

/// A TrueType/OpenType face held in memory
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    name: String,
    units_per_em: u16,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let data =
            fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;

        if let Ok(FileRef::Collection(collection)) = FileRef::new(&data) {
            if face_index >= collection.len() {
                return Err(FontLoadError::UnsupportedCollection {
                    path: path.display().to_string(),
                    index: face_index,
                });
            }
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::from_data_index(data, face_index, name)
    }

    /// Turns raw font bytes into a usable face
    pub fn from_data(data: Vec<u8>, name: impl Into<String>) -> Result<Self, FontLoadError> {
        Self::from_data_index(data, 0, name)
    }

    fn from_data_index(
        data: Vec<u8>,
        face_index: u32,
        name: impl Into<String>,
    ) -> Result<Self, FontLoadError> {
        let font_ref =
            FontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        // A face without a head table can't be scaled, so it's useless to us
        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .map_err(|_| FontLoadError::InvalidData)?;

        Ok(Font {
            data,
            face_index,
            name: name.into(),
            units_per_em,
        })
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Raw font bytes as they live in the file
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Maps a character to its glyph, using .notdef for anything unmapped
    fn glyph_id(font: &FontRef<'_>, ch: char) -> GlyphId {
        font.charmap().map(ch).unwrap_or(GlyphId::NOTDEF)
    }
}

impl FontFace for Font {
    fn name(&self) -> &str {
        &self.name
    }

    fn line_metrics(&self, size: f32) -> LineMetrics {
        let Some(font) = self.font_ref() else {
            return LineMetrics::default();
        };
        let metrics = font.metrics(Size::new(size), LocationRef::default());

        LineMetrics {
            ascent: metrics.ascent,
            // skrifa reports descent as a negative y-up offset
            descent: -metrics.descent,
        }
    }

    fn advance(&self, ch: char, size: f32) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let glyph = Self::glyph_id(&font, ch);
                font.glyph_metrics(Size::new(size), LocationRef::default())
                    .advance_width(glyph)
            })
            .unwrap_or(0.0)
    }

    fn outline_glyph(&self, ch: char, size: f32, x: f32, baseline: f32, sink: &mut dyn OutlineSink) {
        let Some(font) = self.font_ref() else {
            return;
        };
        let glyph_id = Self::glyph_id(&font, ch);
        let Some(glyph) = font.outline_glyphs().get(glyph_id) else {
            log::debug!("{}: no outline for glyph {}", self.name, glyph_id.to_u32());
            return;
        };

        let mut pen = ImageSpacePen { sink, x, baseline };
        let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
        if let Err(e) = glyph.draw(settings, &mut pen) {
            log::debug!("{}: failed to draw glyph {}: {:?}", self.name, glyph_id.to_u32(), e);
        }
    }
}

/// Flips skrifa's y-up outlines into image space around a pen position
struct ImageSpacePen<'a> {
    sink: &'a mut dyn OutlineSink,
    x: f32,
    baseline: f32,
}

impl OutlinePen for ImageSpacePen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.sink.move_to(self.x + x, self.baseline - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.sink.line_to(self.x + x, self.baseline - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.sink.quad_to(
            self.x + cx0,
            self.baseline - cy0,
            self.x + x,
            self.baseline - y,
        );
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.sink.curve_to(
            self.x + cx0,
            self.baseline - cy0,
            self.x + cx1,
            self.baseline - cy1,
            self.x + x,
            self.baseline - y,
        );
    }

    fn close(&mut self) {
        self.sink.close();
    }
}

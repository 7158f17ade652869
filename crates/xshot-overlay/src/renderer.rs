// this_file: crates/xshot-overlay/src/renderer.rs

//! The overlay renderer: turns an [`OverlayConfig`] into text on a pixmap
//!
//! Rendering happens in two passes. Layout resolves fonts, measures text and
//! settles every position without touching pixels; compositing then walks
//! the placed texts in order. Splitting them keeps placement testable and
//! lets callers inspect where things will land.

use image::RgbaImage;
use tiny_skia::{ColorU8, PixmapMut, PremultipliedColorU8};

use xshot_core::{
    CustomElementConfig, EffectsConfig, OverlayConfig, OverlayError, Result, SectionConfig,
    SectionDefaults, TextBounds, CUSTOM_ELEMENT_DEFAULTS, FOOTER_DEFAULTS, HEADER_DEFAULTS,
};
use xshot_fontdb::{FontHandle, FontResolver};

use crate::effects::apply_effects;
use crate::layout::{clamp_to_bounds, text_position, PADDING, TIME_GAP};
use crate::timestamp::Clock;

/// A piece of text with everything needed to draw it
#[derive(Debug, Clone)]
pub struct PlacedText<'a> {
    pub text: String,
    pub font: FontHandle,
    pub x: i32,
    pub y: i32,
    pub bounds: TextBounds,
    pub effects: &'a EffectsConfig,
}

/// Which edge a section's timestamp stacks against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Footer,
}

impl Section {
    fn defaults(self) -> &'static SectionDefaults {
        match self {
            Section::Header => &HEADER_DEFAULTS,
            Section::Footer => &FOOTER_DEFAULTS,
        }
    }

    /// True when the timestamp goes below the main text
    ///
    /// Decided on the position as written, so an unrecognized position
    /// stacks away from the section's home edge: above a header, below a
    /// footer.
    fn time_below(self, position: &str) -> bool {
        let position = position.to_ascii_lowercase();
        match self {
            Section::Header => position.contains("top"),
            Section::Footer => !position.contains("bottom"),
        }
    }
}

/// Draws headers, footers, timestamps and custom elements onto images
pub struct TextRenderer {
    config: OverlayConfig,
    resolver: FontResolver,
    clock: Clock,
}

impl TextRenderer {
    /// Renderer with system font discovery and the local clock
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            resolver: FontResolver::new(),
            clock: Clock::System,
        }
    }

    pub fn with_resolver(mut self, resolver: FontResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn resolver(&self) -> &FontResolver {
        &self.resolver
    }

    /// Header text and its timestamp; empty when the header is disabled
    pub fn layout_header(&self, width: i32, height: i32) -> Vec<PlacedText<'_>> {
        self.layout_section(&self.config.header, Section::Header, width, height)
    }

    /// Footer text and its timestamp; empty when the footer is disabled
    pub fn layout_footer(&self, width: i32, height: i32) -> Vec<PlacedText<'_>> {
        self.layout_section(&self.config.footer, Section::Footer, width, height)
    }

    /// Enabled custom elements, the footer's list before the header's
    ///
    /// Custom elements don't depend on their section being enabled.
    pub fn layout_custom_elements(&self, width: i32, height: i32) -> Vec<PlacedText<'_>> {
        self.config
            .footer
            .custom_elements
            .iter()
            .chain(&self.config.header.custom_elements)
            .filter(|element| element.enabled)
            .map(|element| self.layout_custom_element(element, width, height))
            .collect()
    }

    /// Everything in compositing order: header, custom elements, footer
    pub fn layout_all(&self, width: i32, height: i32) -> Vec<PlacedText<'_>> {
        let mut placed = self.layout_header(width, height);
        placed.extend(self.layout_custom_elements(width, height));
        placed.extend(self.layout_footer(width, height));
        placed
    }

    pub fn render_header(&self, image: &mut PixmapMut<'_>) {
        let (width, height) = dimensions(image);
        composite(image, &self.layout_header(width, height));
    }

    pub fn render_footer(&self, image: &mut PixmapMut<'_>) {
        let (width, height) = dimensions(image);
        composite(image, &self.layout_footer(width, height));
    }

    pub fn render_custom_elements(&self, image: &mut PixmapMut<'_>) {
        let (width, height) = dimensions(image);
        composite(image, &self.layout_custom_elements(width, height));
    }

    pub fn render_all(&self, image: &mut PixmapMut<'_>) {
        self.render_header(image);
        self.render_custom_elements(image);
        self.render_footer(image);
    }

    /// Renders onto a premultiplied RGBA8 buffer of `width * height * 4` bytes
    pub fn render_all_rgba(&self, data: &mut [u8], width: u32, height: u32) -> Result<()> {
        let len = data.len();
        let mut pixmap = PixmapMut::from_bytes(data, width, height).ok_or(
            OverlayError::InvalidImage { width, height, len },
        )?;
        self.render_all(&mut pixmap);
        Ok(())
    }

    /// Renders onto a straight-alpha [`RgbaImage`]
    ///
    /// Drawing happens on a premultiplied copy. Only pixels the overlay
    /// actually changed are converted back, so untouched translucent pixels
    /// keep their exact straight-alpha values.
    pub fn render_all_image(&self, image: &mut RgbaImage) -> Result<()> {
        let (width, height) = image.dimensions();
        let buffer: &mut [u8] = image;

        let before: Vec<u8> = buffer
            .chunks_exact(4)
            .flat_map(|px| {
                let c = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        let mut after = before.clone();
        self.render_all_rgba(&mut after, width, height)?;

        let changed = before.chunks_exact(4).zip(after.chunks_exact(4));
        for (px, (old, new)) in buffer.chunks_exact_mut(4).zip(changed) {
            if old == new {
                continue;
            }
            if let Some(c) = PremultipliedColorU8::from_rgba(new[0], new[1], new[2], new[3]) {
                let c = c.demultiply();
                px.copy_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
            }
        }

        Ok(())
    }

    fn layout_section<'a>(
        &'a self,
        section: &'a SectionConfig,
        kind: Section,
        width: i32,
        height: i32,
    ) -> Vec<PlacedText<'a>> {
        let defaults = kind.defaults();
        if !section.is_enabled(defaults) {
            return Vec::new();
        }

        let element = section.element.resolve(&defaults.element);
        let font = self.resolver.resolve(element.family, element.style, element.size);
        let bounds = font.measure(element.text);
        let (x, y) = text_position(bounds, element.anchor, width, height, PADDING);
        let (x, y) = clamp_to_bounds(x, y, bounds, width, height, PADDING);
        log::trace!("{:?} {:?} at ({}, {}) size {:?}", kind, element.text, x, y, bounds);

        let mut placed = vec![PlacedText {
            text: element.text.to_string(),
            font,
            x,
            y,
            bounds,
            effects: element.effects,
        }];

        if section.shows_time(defaults) {
            let time_size = section.time_size(defaults);
            let text = self.clock.format(section.time_format());
            let font = self.resolver.resolve(element.family, element.style, time_size);
            let time_bounds = font.measure(&text);

            let (time_x, _) = text_position(time_bounds, element.anchor, width, height, PADDING);
            let position = section.element.position.as_deref().unwrap_or(defaults.element.position);
            // Float to int casts saturate, so only the sums need care
            let time_y = if kind.time_below(position) {
                y.saturating_add(element.size.round() as i32).saturating_add(TIME_GAP)
            } else {
                y.saturating_sub(time_size.round() as i32).saturating_sub(TIME_GAP)
            };
            let (time_x, time_y) = clamp_to_bounds(time_x, time_y, time_bounds, width, height, PADDING);
            log::trace!("{:?} time {:?} at ({}, {})", kind, text, time_x, time_y);

            placed.push(PlacedText {
                text,
                font,
                x: time_x,
                y: time_y,
                bounds: time_bounds,
                effects: element.effects,
            });
        }

        placed
    }

    fn layout_custom_element<'a>(
        &'a self,
        custom: &'a CustomElementConfig,
        width: i32,
        height: i32,
    ) -> PlacedText<'a> {
        let element = custom.element.resolve(&CUSTOM_ELEMENT_DEFAULTS);
        let font = self.resolver.resolve(element.family, element.style, element.size);
        let bounds = font.measure(element.text);

        let (x, y) = text_position(bounds, element.anchor, width, height, PADDING);
        let [dx, dy] = custom.offset;
        let (x, y) = clamp_to_bounds(
            x.saturating_add(dx),
            y.saturating_add(dy),
            bounds,
            width,
            height,
            PADDING,
        );
        log::trace!("Custom {:?} at ({}, {})", element.text, x, y);

        PlacedText {
            text: element.text.to_string(),
            font,
            x,
            y,
            bounds,
            effects: element.effects,
        }
    }
}

fn dimensions(image: &PixmapMut<'_>) -> (i32, i32) {
    let width = i32::try_from(image.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(image.height()).unwrap_or(i32::MAX);
    (width, height)
}

fn composite(image: &mut PixmapMut<'_>, placed: &[PlacedText<'_>]) {
    for item in placed {
        apply_effects(image, &item.font, &item.text, item.x, item.y, item.bounds, item.effects);
    }
}

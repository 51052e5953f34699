//! Glyph compositor — lays glyph images side by side on one canvas.
//!
//! Two passes over the text:
//!
//! ```text
//! pass 1: char ─► GlyphLocator ─► decode (once per distinct char) ─► width sum
//!                                                                  └► height of FIRST glyph
//! pass 2: canvas(width × height) ◄── overlay each glyph at its recorded x
//! ```
//!
//! The canvas height comes from the first character processed, including a
//! leading space whose placeholder is 1 px tall (a space only contributes
//! its advance; its placeholder is 1x1). Glyph sets are expected to
//! share one height; taller glyphs are clipped and shorter ones leave a
//! transparent strip at the bottom.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use image::{imageops, ImageError, ImageFormat, RgbaImage};

use crate::assets::AssetSource;
use crate::error::RenderError;
use crate::glyphs::{GlyphLocation, GlyphLocator, SPACE};

/// Height of the transparent placeholder used for ' '.
pub const SPACE_HEIGHT: u32 = 1;

/// Largest canvas (in pixels) a render may allocate: 256 MiB of RGBA.
pub const MAX_CANVAS_PIXELS: u64 = 64 * 1024 * 1024;

/// Composites text into a single RGBA canvas.
pub struct Compositor<'a, S: AssetSource> {
    locator: GlyphLocator<'a, S>,
    source: &'a S,
    space_width: u32,
}

impl<'a, S: AssetSource> Compositor<'a, S> {
    pub fn new(locator: GlyphLocator<'a, S>, source: &'a S, space_width: u32) -> Self {
        Self {
            locator,
            source,
            space_width,
        }
    }

    /// Render `text` onto a transparent canvas.
    ///
    /// Fails with the first missing glyph in left-to-right order, or with
    /// [`RenderError::UnsupportedImageFormat`] if an asset does not decode,
    /// or with [`RenderError::CanvasTooLarge`] if the widths overflow or the
    /// canvas would exceed [`MAX_CANVAS_PIXELS`].
    pub fn compose(&self, text: &str) -> Result<RgbaImage, RenderError> {
        if text.is_empty() {
            return Err(RenderError::InvalidInput);
        }

        // Pass 1: load + measure. `glyphs` holds each distinct glyph once;
        // `placements` holds (glyph index, x) for every character in order.
        let mut index: HashMap<char, usize> = HashMap::new();
        let mut glyphs: Vec<RgbaImage> = Vec::new();
        let mut placements: Vec<(usize, u32)> = Vec::with_capacity(text.len());
        let mut height: Option<u32> = None;
        let mut total_width: u32 = 0;

        for c in text.chars() {
            let slot = match index.entry(c) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    glyphs.push(self.load(c)?);
                    *entry.insert(glyphs.len() - 1)
                }
            };
            let glyph = &glyphs[slot];
            let first_height = *height.get_or_insert(glyph.height());
            let advance = self.advance(c, glyph);
            placements.push((slot, total_width));
            total_width = total_width
                .checked_add(advance)
                .ok_or(RenderError::CanvasTooLarge {
                    width: u64::from(total_width) + u64::from(advance),
                    height: u64::from(first_height),
                })?;
        }

        let height = height.unwrap_or(SPACE_HEIGHT);
        if u64::from(total_width) * u64::from(height) > MAX_CANVAS_PIXELS {
            return Err(RenderError::CanvasTooLarge {
                width: u64::from(total_width),
                height: u64::from(height),
            });
        }
        let mut canvas = RgbaImage::new(total_width, height);

        // Pass 2: place.
        for &(slot, x) in &placements {
            imageops::overlay(&mut canvas, &glyphs[slot], i64::from(x), 0);
        }

        log::debug!(
            "composed {} chars ({} distinct) into {}x{}",
            placements.len(),
            glyphs.len(),
            total_width,
            height,
        );
        Ok(canvas)
    }

    /// Horizontal space `c` takes on the canvas.
    fn advance(&self, c: char, glyph: &RgbaImage) -> u32 {
        if c == SPACE {
            self.space_width
        } else {
            glyph.width()
        }
    }

    fn load(&self, c: char) -> Result<RgbaImage, RenderError> {
        match self.locator.locate(c)? {
            // Only the advance matters for a space; the pixels stay transparent.
            GlyphLocation::Space => Ok(RgbaImage::new(1, SPACE_HEIGHT)),
            GlyphLocation::File(path) => {
                let bytes = self.source.read(&path)?;
                decode_glyph(&bytes, &path)
            }
        }
    }
}

/// Decode an asset into RGBA8.
pub fn decode_glyph(bytes: &[u8], path: &Path) -> Result<RgbaImage, RenderError> {
    match image::load_from_memory(bytes) {
        Ok(img) => Ok(img.to_rgba8()),
        Err(ImageError::IoError(e)) => Err(RenderError::Io(e)),
        Err(e) => {
            log::debug!("cannot decode {}: {e}", path.display());
            Err(RenderError::UnsupportedImageFormat {
                path: path.to_path_buf(),
            })
        }
    }
}

/// Encode a finished canvas as PNG bytes.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(RenderError::Encode)?;
    Ok(buf)
}

// ===================================================================
// Tests
// ===================================================================

//! Render boundary — text in, saved PNG path (or a structured error) out.

use std::path::PathBuf;

use image::{ImageError, ImageFormat, RgbaImage};

use crate::assets::{AssetSource, FsAssetSource};
use crate::compositor::Compositor;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::filename::FilenameGenerator;
use crate::glyphs::{GlyphLocator, SpecialCharacterTable};
use crate::paths::{AssetRoots, FontSelection};

/// Path of the saved image, or why nothing was saved.
pub type RenderResult = Result<PathBuf, RenderError>;

/// Owns everything one render needs except the text.
///
/// Holds no per-render state, so one renderer can serve any number of
/// sequential or parallel renders.
pub struct Renderer<S: AssetSource = FsAssetSource> {
    config: RenderConfig,
    symbols: SpecialCharacterTable,
    source: S,
}

impl Renderer<FsAssetSource> {
    /// Renderer reading assets from the local filesystem.
    pub fn new(config: RenderConfig) -> Self {
        Self::with_source(config, FsAssetSource)
    }
}

impl<S: AssetSource> Renderer<S> {
    pub fn with_source(config: RenderConfig, source: S) -> Self {
        Self {
            config,
            symbols: SpecialCharacterTable::builtin(),
            source,
        }
    }

    /// Swap in a symbol table for a non-standard glyph set.
    pub fn with_symbols(mut self, symbols: SpecialCharacterTable) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SpecialCharacterTable {
        &self.symbols
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Composite `text` without saving it.
    ///
    /// Empty or whitespace-only text is rejected before the asset store is
    /// touched.
    pub fn compose(&self, text: &str, selection: FontSelection) -> Result<RgbaImage, RenderError> {
        if text.trim().is_empty() {
            return Err(RenderError::InvalidInput);
        }
        let roots = AssetRoots::resolve(&self.config.asset_base, selection);
        let locator = GlyphLocator::new(&roots, &self.symbols, &self.source);
        Compositor::new(locator, &self.source, self.config.space_width).compose(text)
    }

    /// Composite `text` and save it as PNG in the output directory.
    ///
    /// Nothing is written unless compositing succeeds.
    pub fn render(&self, text: &str, selection: FontSelection) -> RenderResult {
        let result = self.try_render(text, selection);
        if let Err(e) = &result {
            log::warn!("render of {text:?} with {} failed: {e}", selection.dir_name());
        }
        result
    }

    /// [`render`](Self::render) flattened to `(path, message)`; exactly one
    /// side is `Some`.
    pub fn render_pair(&self, text: &str, selection: FontSelection) -> (Option<PathBuf>, Option<String>) {
        match self.render(text, selection) {
            Ok(path) => (Some(path), None),
            Err(e) => (None, Some(e.user_message())),
        }
    }

    fn try_render(&self, text: &str, selection: FontSelection) -> RenderResult {
        let canvas = self.compose(text, selection)?;

        let filename = FilenameGenerator::new(self.config.max_filename_length).generate(text);
        let path = self.config.output_dir.join(filename);

        canvas
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(io) => RenderError::Io(io),
                other => RenderError::Encode(other),
            })?;

        log::info!(
            "saved {} ({}x{}, {} chars, {})",
            path.display(),
            canvas.width(),
            canvas.height(),
            text.chars().count(),
            selection.dir_name(),
        );
        Ok(path)
    }
}

/// One-shot render with the default configuration and the filesystem store.
pub fn render(text: &str, selection: FontSelection) -> RenderResult {
    Renderer::new(RenderConfig::default()).render(text, selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetSource;
    use crate::compositor::encode_png;
    use crate::paths::ColorVariant;
    use image::Rgba;

    fn glyph(width: u32) -> Vec<u8> {
        encode_png(&RgbaImage::from_pixel(width, 12, Rgba([200, 10, 10, 255]))).unwrap()
    }

    fn renderer(out: &std::path::Path) -> Renderer<MemoryAssetSource> {
        let config = RenderConfig::for_testing("fonts", out);
        let roots = AssetRoots::resolve(&config.asset_base, FontSelection::default());
        let mut source = MemoryAssetSource::new();
        source.insert(roots.letters.join("Upper-Case/H.png"), glyph(7));
        source.insert(roots.letters.join("Lower-Case/i.png"), glyph(3));
        Renderer::with_source(config, source)
    }

    #[test]
    fn test_whitespace_rejected_before_store_access() {
        let dir = tempfile::tempdir().unwrap();
        let r = renderer(dir.path());
        for text in ["", " ", "\t \n"] {
            assert!(matches!(r.render(text, FontSelection::default()), Err(RenderError::InvalidInput)));
        }
        assert_eq!(r.source().access_count(), 0);
    }

    #[test]
    fn test_render_saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let r = renderer(dir.path());
        let path = r.render("Hi", FontSelection::default()).unwrap();
        assert!(path.starts_with(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Hi-") && name.ends_with(".png"), "{name}");

        let saved = image::open(&path).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (10, 12));
    }

    #[test]
    fn test_missing_glyph_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let r = renderer(dir.path());
        let (path, message) = r.render_pair("Hi?", FontSelection::default());
        assert!(path.is_none());
        assert_eq!(message.as_deref(), Some("Error: Image not found for character '?'"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_other_selection_misses_assets() {
        let dir = tempfile::tempdir().unwrap();
        let r = renderer(dir.path());
        let err = r
            .render("H", FontSelection::new(2, ColorVariant::Orange1))
            .unwrap_err();
        assert_eq!(err.missing_char(), Some('H'));
    }

    #[test]
    fn test_render_pair_success() {
        let dir = tempfile::tempdir().unwrap();
        let r = renderer(dir.path());
        let (path, message) = r.render_pair("iH", FontSelection::default());
        assert!(path.unwrap().is_file());
        assert!(message.is_none());
    }

    #[test]
    fn test_missing_output_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let r = renderer(&dir.path().join("nope"));
        let err = r.render("Hi", FontSelection::default()).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)), "{err:?}");
    }
}

//! # slugtype-glyphs
//!
//! Renders text as a transparent PNG by stitching together pre-rendered
//! glyph images from a font/color asset set.
//!
//! ## Architecture
//!
//! ```text
//! (text, FontSelection)
//!     │
//!     ▼
//! AssetRoots::resolve ──► GlyphLocator (per char) ──► Compositor ──► RgbaImage
//!                                                          │
//!                                    FilenameGenerator ──► Renderer::render ──► <out>/<name>.png
//! ```
//!
//! - **`paths`** — font/color selection and asset directory layout.
//! - **`glyphs`** — character classes, symbol table, glyph lookup.
//! - **`compositor`** — glyph decoding, canvas sizing, alpha-over placement.
//! - **`filename`** — sanitized, timestamped output names.
//! - **`render`** — the render boundary used by front-ends.

pub mod assets;
pub mod compositor;
pub mod config;
pub mod error;
pub mod filename;
pub mod glyphs;
pub mod paths;
pub mod render;

// Re-exports for ergonomic use.
pub use assets::{AssetSource, FsAssetSource, MemoryAssetSource};
pub use compositor::{encode_png, Compositor, MAX_CANVAS_PIXELS};
pub use config::{RenderConfig, MAX_FILENAME_LENGTH, SPACE_WIDTH};
pub use error::RenderError;
pub use filename::FilenameGenerator;
pub use glyphs::{GlyphLocation, GlyphLocator, SpecialCharacterTable};
pub use paths::{supported_colors, AssetRoots, ColorVariant, FontSelection, FONT_IDS};
pub use render::{render, RenderResult, Renderer};

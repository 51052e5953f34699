//! Font selection and asset root resolution.
//!
//! A font id plus a color variant picks one directory in the asset store:
//!
//! ```text
//! <asset_base>/Font-<id>/Font-<id>-<color>/
//!     ├── Letters/{Lower-Case,Upper-Case}/<c>.png
//!     ├── Numbers/<d>.png
//!     └── Symbols/<label>.png
//! ```
//!
//! Resolution is pure path construction; a missing directory only shows
//! up later as a missing glyph.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ── Color variant ───────────────────────────────────────────────────

/// Color variants shipped with the glyph sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    Blue,
    Orange1,
    Orange2,
}

impl ColorVariant {
    pub const ALL: [ColorVariant; 3] = [Self::Blue, Self::Orange1, Self::Orange2];

    /// Spelling used in asset directory names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Orange1 => "Orange-1",
            Self::Orange2 => "Orange-2",
        }
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown color name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color variant: {0}")]
pub struct ParseColorError(pub String);

impl FromStr for ColorVariant {
    type Err = ParseColorError;

    /// Accepts the directory spelling, case-insensitively
    /// (`"orange-1"`, `"Orange-1"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

// ── Font selection ──────────────────────────────────────────────────

/// Font ids with at least one glyph set.
pub const FONT_IDS: std::ops::RangeInclusive<u8> = 1..=5;

/// Colors each font actually ships with.
pub fn supported_colors(font_id: u8) -> &'static [ColorVariant] {
    use ColorVariant::*;
    match font_id {
        1 | 2 => &[Blue, Orange1, Orange2],
        3 | 4 => &[Blue, Orange1],
        5 => &[Orange1],
        _ => &[],
    }
}

/// Which glyph set to draw with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontSelection {
    pub font_id: u8,
    pub color: ColorVariant,
}

impl FontSelection {
    pub fn new(font_id: u8, color: ColorVariant) -> Self {
        Self { font_id, color }
    }

    /// Whether this font/color pair exists in the shipped asset table.
    ///
    /// The renderer does not check this; front-ends use it to reject a
    /// combination before asking for a render.
    pub fn is_supported(&self) -> bool {
        supported_colors(self.font_id).contains(&self.color)
    }

    /// `Font-<id>-<color>`
    pub fn dir_name(&self) -> String {
        format!("Font-{}-{}", self.font_id, self.color)
    }
}

impl Default for FontSelection {
    fn default() -> Self {
        Self::new(1, ColorVariant::Blue)
    }
}

// ── Asset roots ─────────────────────────────────────────────────────

/// The three glyph directories of one font/color combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRoots {
    pub letters: PathBuf,
    pub digits: PathBuf,
    pub symbols: PathBuf,
}

impl AssetRoots {
    /// Build the roots for `selection` under `asset_base`.
    pub fn resolve(asset_base: &Path, selection: FontSelection) -> Self {
        let base = asset_base
            .join(format!("Font-{}", selection.font_id))
            .join(selection.dir_name());
        Self {
            letters: base.join("Letters"),
            digits: base.join("Numbers"),
            symbols: base.join("Symbols"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_layout() {
        let roots = AssetRoots::resolve(
            Path::new("Assets/FONTS"),
            FontSelection::new(2, ColorVariant::Orange1),
        );
        let base = Path::new("Assets/FONTS/Font-2/Font-2-Orange-1");
        assert_eq!(roots.letters, base.join("Letters"));
        assert_eq!(roots.digits, base.join("Numbers"));
        assert_eq!(roots.symbols, base.join("Symbols"));
    }

    #[test]
    fn test_resolve_does_not_touch_disk() {
        // Nonexistent base still resolves.
        let roots = AssetRoots::resolve(
            Path::new("/definitely/not/here"),
            FontSelection::new(9, ColorVariant::Blue),
        );
        assert!(roots.letters.ends_with("Font-9/Font-9-Blue/Letters"));
    }

    #[test]
    fn test_color_round_trip_spelling() {
        assert_eq!("Orange-2".parse::<ColorVariant>(), Ok(ColorVariant::Orange2));
        assert_eq!("blue".parse::<ColorVariant>(), Ok(ColorVariant::Blue));
        assert_eq!(ColorVariant::Orange1.to_string(), "Orange-1");
        assert!("Green".parse::<ColorVariant>().is_err());
    }

    #[test]
    fn test_supported_table() {
        assert!(FontSelection::new(1, ColorVariant::Orange2).is_supported());
        assert!(!FontSelection::new(3, ColorVariant::Orange2).is_supported());
        assert!(!FontSelection::new(5, ColorVariant::Blue).is_supported());
        assert!(FontSelection::new(5, ColorVariant::Orange1).is_supported());
        assert!(supported_colors(0).is_empty());
        assert!(supported_colors(6).is_empty());
        for id in FONT_IDS {
            assert!(!supported_colors(id).is_empty(), "font {id} has no colors");
        }
    }

    #[test]
    fn test_default_selection() {
        let sel = FontSelection::default();
        assert_eq!(sel.dir_name(), "Font-1-Blue");
        assert!(sel.is_supported());
    }
}

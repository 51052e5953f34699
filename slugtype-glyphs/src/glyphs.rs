//! Character → glyph asset lookup.
//!
//! Every character falls into exactly one class, checked in this order:
//! space, letter, decimal digit, symbol. Letters and digits are stored under
//! their own character as file name; symbols go through the
//! [`SpecialCharacterTable`] to get a readable label.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::assets::AssetSource;
use crate::error::RenderError;
use crate::paths::AssetRoots;

/// The only character that is never looked up on disk.
pub const SPACE: char = ' ';

/// Extension of every glyph asset.
pub const GLYPH_EXTENSION: &str = "png";

const BUILTIN_SYMBOLS: &[(char, &str)] = &[
    ('!', "Exclamation"),
    ('?', "Question"),
    ('\'', "Apostrophe"),
    ('*', "Asterisk"),
    // Bracket labels are mirrored in the shipped sets: ')' is "Left".
    (')', "Bracket-Left"),
    ('}', "Bracket-Left-2"),
    (']', "Bracket-Left-3"),
    ('(', "Bracket-Right"),
    ('{', "Bracket-Right-2"),
    ('[', "Bracket-Right-3"),
    ('^', "Caret"),
    (':', "Colon"),
    ('$', "Dollar"),
    ('=', "Equals"),
    ('>', "Greater-than"),
    ('-', "Hyphen"),
    ('∞', "Infinity"),
    ('<', "Less-than"),
    ('#', "Number"),
    ('%', "Percent"),
    ('.', "Period"),
    ('+', "Plus"),
    ('"', "Quotation"),
    (';', "Semicolon"),
    ('/', "Slash"),
    ('~', "Tilde"),
    ('_', "Underscore"),
    ('|', "Vertical-bar"),
    (',', "Comma"),
    ('&', "Ampersand"),
    ('♥', "Heart"),
    ('©', "Copyright"),
    ('⛶', "Square"),
    ('Ⅰ', "One"),
    ('Ⅱ', "Two"),
    ('Ⅲ', "Three"),
    ('Ⅳ', "Four"),
    ('Ⅴ', "Five"),
    ('◀', "Left"),
    ('▲', "Up"),
    ('▶', "Right"),
    ('▼', "Down"),
    ('★', "Star"),
    ('⋆', "Mini-Star"),
    ('☞', "Hand"),
    ('¥', "Yen"),
    ('♪', "Musical-Note"),
    ('︷', "Up-Arrow"),
];

// ── Special character table ─────────────────────────────────────────

/// Closed mapping from non-alphanumeric characters to asset labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialCharacterTable {
    labels: HashMap<char, String>,
}

impl Default for SpecialCharacterTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SpecialCharacterTable {
    /// The symbol set every shipped font uses.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_SYMBOLS.iter().map(|&(c, label)| (c, label)))
    }

    /// Build a table for a custom glyph set.
    pub fn from_pairs<I, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, L)>,
        L: Into<String>,
    {
        Self {
            labels: pairs.into_iter().map(|(c, l)| (c, l.into())).collect(),
        }
    }

    pub fn label(&self, c: char) -> Option<&str> {
        self.labels.get(&c).map(String::as_str)
    }

    pub fn contains(&self, c: char) -> bool {
        self.labels.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Mapped characters, sorted.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.labels.keys().copied().collect();
        chars.sort_unstable();
        chars
    }
}

// ── Character classes ───────────────────────────────────────────────

/// Letters get the case-split letter folder.
///
/// Roman numerals (U+2160..U+2188) count as alphabetic in Unicode but are
/// drawn from the symbol set, so they are excluded here.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !('\u{2160}'..='\u{2188}').contains(&c)
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

// ── Locator ─────────────────────────────────────────────────────────

/// Where a character's glyph comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlyphLocation {
    /// Blank advance; nothing to load.
    Space,
    /// Asset file to decode.
    File(PathBuf),
}

/// Resolves characters to glyph files inside one set of asset roots.
pub struct GlyphLocator<'a, S: AssetSource> {
    roots: &'a AssetRoots,
    symbols: &'a SpecialCharacterTable,
    source: &'a S,
}

impl<'a, S: AssetSource> GlyphLocator<'a, S> {
    pub fn new(roots: &'a AssetRoots, symbols: &'a SpecialCharacterTable, source: &'a S) -> Self {
        Self {
            roots,
            symbols,
            source,
        }
    }

    /// The path a character would live at, without checking it exists.
    ///
    /// Unmapped symbols resolve to an empty label (`Symbols/.png`), which
    /// never exists and so fails the later existence check.
    pub fn candidate(&self, c: char) -> GlyphLocation {
        if c == SPACE {
            return GlyphLocation::Space;
        }

        let path = if is_letter(c) {
            let case_dir = if c.is_lowercase() {
                "Lower-Case"
            } else {
                "Upper-Case"
            };
            self.roots.letters.join(case_dir).join(asset_file(&c.to_string()))
        } else if is_digit(c) {
            self.roots.digits.join(asset_file(&c.to_string()))
        } else {
            let label = self.symbols.label(c).unwrap_or("");
            self.roots.symbols.join(asset_file(label))
        };
        GlyphLocation::File(path)
    }

    /// Locate `c`, failing with [`RenderError::GlyphNotFound`] if the asset
    /// is missing.
    pub fn locate(&self, c: char) -> Result<GlyphLocation, RenderError> {
        match self.candidate(c) {
            GlyphLocation::Space => Ok(GlyphLocation::Space),
            GlyphLocation::File(path) => {
                if self.source.exists(&path) {
                    log::debug!("glyph {c:?} -> {}", path.display());
                    Ok(GlyphLocation::File(path))
                } else {
                    Err(RenderError::GlyphNotFound(c))
                }
            }
        }
    }
}

fn asset_file(stem: &str) -> String {
    format!("{stem}.{GLYPH_EXTENSION}")
}

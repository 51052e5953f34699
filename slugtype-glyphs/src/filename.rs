//! Output file naming.
//!
//! `"Hello World!"` rendered at 2024-03-09 14:05:07 becomes
//! `Hello-World-20240309-140507.png`.

use chrono::{Local, NaiveDateTime};

use crate::config::MAX_FILENAME_LENGTH;

/// Extension of every rendered image.
pub const OUTPUT_EXTENSION: &str = "png";

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";
const TOKEN_SEPARATOR: char = '-';

/// Builds output names from the input text and a timestamp.
#[derive(Clone, Copy, Debug)]
pub struct FilenameGenerator {
    max_len: usize,
}

impl Default for FilenameGenerator {
    fn default() -> Self {
        Self::new(MAX_FILENAME_LENGTH)
    }
}

impl FilenameGenerator {
    /// `max_len` is in bytes and is never allowed below 1.
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Name for `text` stamped with the current local time.
    pub fn generate(&self, text: &str) -> String {
        self.generate_at(text, Local::now().naive_local())
    }

    /// Name for `text` stamped with `at`.
    ///
    /// The whole string is clipped to `max_len` bytes, which may cut into
    /// the timestamp or extension.
    pub fn generate_at(&self, text: &str, at: NaiveDateTime) -> String {
        let stamp = at.format(TIMESTAMP_FORMAT);
        let tokens = sanitize(text);
        let mut name = if tokens.is_empty() {
            format!("{stamp}.{OUTPUT_EXTENSION}")
        } else {
            format!("{tokens}{TOKEN_SEPARATOR}{stamp}.{OUTPUT_EXTENSION}")
        };
        truncate_bytes(&mut name, self.max_len);
        name
    }
}

/// Keep the alphanumeric characters of each whitespace-separated token and
/// join the non-empty results with `-`.
pub fn sanitize(text: &str) -> String {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|tok| tok.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|tok| !tok.is_empty())
        .collect();
    tokens.join(&TOKEN_SEPARATOR.to_string())
}

fn truncate_bytes(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

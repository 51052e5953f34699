use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a render.
///
/// `InvalidInput`, `GlyphNotFound`, `UnsupportedImageFormat` and
/// `CanvasTooLarge` are the expected failures a user can trigger. `Io` and
/// `Encode` cover disk and encoder trouble and are reported as a generic
/// failure.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Input text is empty. Please enter some text.")]
    InvalidInput,
    #[error("Image not found for character '{0}'")]
    GlyphNotFound(char),
    #[error("Unsupported image format: {}", path.display())]
    UnsupportedImageFormat { path: PathBuf },
    #[error("Canvas too large: {width}x{height}")]
    CanvasTooLarge { width: u64, height: u64 },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Image encoding failed: {0}")]
    Encode(#[source] image::ImageError),
}

impl RenderError {
    /// Message suitable for showing to the person who typed the text.
    pub fn user_message(&self) -> String {
        match self {
            RenderError::InvalidInput
            | RenderError::GlyphNotFound(_)
            | RenderError::CanvasTooLarge { .. } => {
                format!("Error: {self}")
            }
            RenderError::UnsupportedImageFormat { .. } => {
                "Error: Unsupported image format".to_string()
            }
            RenderError::Io(_) | RenderError::Encode(_) => {
                format!("An unexpected error occurred: {self}")
            }
        }
    }

    /// The offending character, when the failure is a missing glyph.
    pub fn missing_char(&self) -> Option<char> {
        match self {
            RenderError::GlyphNotFound(c) => Some(*c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_not_found_names_character() {
        let err = RenderError::GlyphNotFound('@');
        assert_eq!(err.to_string(), "Image not found for character '@'");
        assert_eq!(err.user_message(), "Error: Image not found for character '@'");
        assert_eq!(err.missing_char(), Some('@'));
    }

    #[test]
    fn test_generic_failure_message() {
        let err = RenderError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.user_message().starts_with("An unexpected error occurred"));
        assert_eq!(err.missing_char(), None);
    }

    #[test]
    fn test_canvas_too_large_message() {
        let err = RenderError::CanvasTooLarge { width: 5_000_000_000, height: 20 };
        assert_eq!(err.user_message(), "Error: Canvas too large: 5000000000x20");
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = RenderError::UnsupportedImageFormat {
            path: PathBuf::from("Symbols/Heart.png"),
        };
        assert_eq!(err.user_message(), "Error: Unsupported image format");
        assert!(err.to_string().contains("Heart.png"));
    }
}

use std::env;
use std::path::PathBuf;

/// Advance width of the space character, in pixels.
pub const SPACE_WIDTH: u32 = 30;

/// Longest file name most filesystems accept.
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Root of the glyph asset store (contains `Font-<id>/...`).
    pub asset_base: PathBuf,
    /// Directory rendered images are written to.
    pub output_dir: PathBuf,
    /// Advance width used for ' '.
    pub space_width: u32,
    /// Upper bound on generated file names, in bytes.
    pub max_filename_length: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            asset_base: PathBuf::from("Assets").join("FONTS"),
            output_dir: default_output_dir(),
            space_width: SPACE_WIDTH,
            max_filename_length: MAX_FILENAME_LENGTH,
        }
    }
}

impl RenderConfig {
    /// Config rooted at explicit directories (tests, embedding).
    pub fn for_testing(asset_base: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_base: asset_base.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

/// `$HOME/Desktop`, or the working directory when `HOME` is unset.
fn default_output_dir() -> PathBuf {
    env::var_os("HOME")
        .map(|home| PathBuf::from(home).join("Desktop"))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.space_width, 30);
        assert_eq!(config.max_filename_length, 255);
        assert!(config.asset_base.ends_with("Assets/FONTS"));
    }

    #[test]
    fn test_for_testing_keeps_limits() {
        let config = RenderConfig::for_testing("a", "b");
        assert_eq!(config.asset_base, PathBuf::from("a"));
        assert_eq!(config.output_dir, PathBuf::from("b"));
        assert_eq!(config.space_width, SPACE_WIDTH);
    }
}

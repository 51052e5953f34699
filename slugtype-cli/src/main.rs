//! slugtype — render text with pre-drawn glyph sets from the command line.
//!
//! Collects text, font and color, hands them to `slugtype-glyphs`, and
//! reports either the saved image path or the error message.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use slugtype_glyphs::{
    supported_colors, ColorVariant, FontSelection, RenderConfig, Renderer, FONT_IDS,
};

/// Widest space the CLI accepts.
const MAX_SPACE_WIDTH: i64 = 4096;

/// Command-line arguments for `slugtype`.
#[derive(Parser, Debug)]
#[command(
    name = "slugtype",
    version,
    about = "Render text as a transparent PNG using pre-drawn glyph sets"
)]
struct Cli {
    /// Text to render (multiple words are joined with a space)
    #[arg(value_name = "TEXT", required_unless_present = "list_fonts")]
    text: Vec<String>,

    /// Font id (1-5)
    #[arg(short, long, default_value_t = 1)]
    font: u8,

    /// Color variant: Blue, Orange-1 or Orange-2
    #[arg(short, long, default_value = "Blue")]
    color: ColorVariant,

    /// Root of the glyph asset store
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Directory to write the image to (default: ~/Desktop)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Advance width of the space character in pixels (0-4096)
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(0..=MAX_SPACE_WIDTH))]
    space_width: Option<u32>,

    /// Maximum output file name length in bytes
    #[arg(long, value_name = "N")]
    max_filename_length: Option<usize>,

    /// Print the font/color combinations and exit
    #[arg(long, action)]
    list_fonts: bool,
}

impl Cli {
    fn config(&self) -> RenderConfig {
        let mut config = RenderConfig::default();
        if let Some(dir) = &self.assets {
            config.asset_base = dir.clone();
        }
        if let Some(dir) = &self.out {
            config.output_dir = dir.clone();
        }
        if let Some(px) = self.space_width {
            config.space_width = px;
        }
        if let Some(n) = self.max_filename_length {
            config.max_filename_length = n;
        }
        config
    }
}

fn list_fonts() {
    for id in FONT_IDS {
        let colors: Vec<&str> = supported_colors(id).iter().map(ColorVariant::as_str).collect();
        println!("Font {id}: {}", colors.join(", "));
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.list_fonts {
        list_fonts();
        return ExitCode::SUCCESS;
    }

    let text = cli.text.join(" ");
    if text.eq_ignore_ascii_case("exit") {
        println!("Closing...");
        return ExitCode::SUCCESS;
    }

    let selection = FontSelection::new(cli.font, cli.color);
    if !selection.is_supported() {
        eprintln!(
            "Error: font {} has no {} glyph set (run with --list-fonts)",
            selection.font_id, selection.color,
        );
        return ExitCode::FAILURE;
    }

    let renderer = Renderer::new(cli.config());
    info!(
        "rendering {:?} with {} from {}",
        text,
        selection.dir_name(),
        renderer.config().asset_base.display(),
    );

    match renderer.render_pair(&text, selection) {
        (Some(path), _) => {
            println!("Image successfully generated and saved as: {}", path.display());
            ExitCode::SUCCESS
        }
        (None, message) => {
            eprintln!("{}", message.unwrap_or_else(|| "Error: render failed".into()));
            ExitCode::FAILURE
        }
    }
}

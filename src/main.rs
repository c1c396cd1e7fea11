use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use impasto::stylize::{self, StylizeOptions};
use painterly::StrokeStyle;

#[derive(Parser)]
#[command(name = "impasto")]
#[command(about = "Repaints raster images as randomized brush strokes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Paint an image file and write the result as a PNG
    Render {
        /// Input image file (any format the decoder recognizes)
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long, default_value = "painterly.png")]
        output: PathBuf,

        /// Stroke style: "bristle", "dab", or "flat-rect"
        #[arg(short, long, default_value = "bristle")]
        style: String,

        /// Stroke count multiplier (strictly positive)
        #[arg(short, long, default_value_t = 1.0)]
        density: f32,

        /// Base stroke size in pixels (strictly positive)
        #[arg(long, default_value_t = 4.0)]
        size: f32,

        /// Posterization levels per channel (at least 2)
        #[arg(long, default_value_t = painterly::DEFAULT_LEVELS)]
        levels: u8,

        /// Cap on the longer side of the working image
        #[arg(long, default_value_t = painterly::DEFAULT_MAX_SIDE)]
        max_side: usize,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the available stroke styles
    Styles,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            style,
            density,
            size,
            levels,
            max_side,
            seed,
        }) => run_render_command(&input, &output, &style, density, size, levels, max_side, seed),
        Some(Commands::Styles) => {
            run_styles_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Paint an image file and write the painting to a PNG file
#[allow(clippy::too_many_arguments)]
fn run_render_command(
    input: &Path,
    output: &Path,
    style: &str,
    density: f32,
    size: f32,
    levels: u8,
    max_side: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impasto=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let options = StylizeOptions {
        style: stylize::parse_style(style)?,
        density,
        base_size: size,
        levels,
        max_side,
        seed,
    };

    let png_bytes = stylize::stylize_file(input, &options)?;

    std::fs::write(output, &png_bytes)?;
    println!("Painted {} ({} bytes)", output.display(), png_bytes.len());

    Ok(())
}

/// List the stroke styles with their tuned coverage factors
fn run_styles_command() {
    println!("Available stroke styles:\n");
    let styles = [
        (
            StrokeStyle::bristle(),
            "parallel bristle streaks, the default",
        ),
        (StrokeStyle::dab(), "loose chains of soft elliptical dabs"),
        (
            StrokeStyle::flat_rect(),
            "single flat rectangles, palette-knife look",
        ),
    ];
    for (style, blurb) in styles {
        println!(
            "  {:<10} {} (coverage {})",
            style.name(),
            blurb,
            style.coverage()
        );
    }
    println!("\nSelect one with 'impasto render --style <name>'.");
}

/// Display version and command summary
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Impasto v{VERSION} - painterly image stylizer");
    println!("Repaints raster images as randomized brush strokes\n");

    println!("Commands:");
    println!("  impasto render   Paint an image file to a PNG");
    println!("  impasto styles   List the available stroke styles");
    println!("\nRun 'impasto --help' for more details.");
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notan_tone::{grid_lines, Contrast, CurveKind, DisplayGeometry, GridSpec, Region, ToneQuantizer};
use notanizer::models::NotanConfig;
use notanizer::services::Session;

#[derive(Parser)]
#[command(name = "notanizer")]
#[command(about = "Reduce photos to Notan value studies with a composition grid")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize a photo and save the result
    Render(RenderArgs),
    /// Print grid line offsets as JSON
    Grid {
        #[arg(long, default_value_t = 3)]
        rows: u32,

        #[arg(long, default_value_t = 3)]
        cols: u32,

        /// Image width in pixels
        #[arg(long)]
        width: u32,

        /// Image height in pixels
        #[arg(long)]
        height: u32,

        /// Width the image is shown at (defaults to its native width)
        #[arg(long)]
        viewport: Option<f64>,
    },
    /// Print the luminance bands for a level count and contrast
    Thresholds {
        #[arg(short, long, default_value_t = 2)]
        levels: usize,

        #[arg(short, long, default_value_t = 0.5)]
        contrast: f32,

        /// Contrast curve: "linear" or "sigmoid"
        #[arg(long, default_value = "linear")]
        curve: String,

        #[arg(long, default_value_t = notan_tone::DEFAULT_GAIN)]
        gain: f32,
    },
    /// Write the default config.yaml (or $CONFIG_FILE)
    InitConfig {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Photo to process
    input: PathBuf,

    /// Crop before quantizing, as x,y,width,height in resized pixels
    #[arg(long, conflicts_with = "square")]
    crop: Option<Region>,

    /// Crop to the largest centered square
    #[arg(long)]
    square: bool,

    /// Number of tones: 2, 3 or 4
    #[arg(short, long)]
    levels: Option<usize>,

    /// Contrast, 0.0 to 1.0 (0.5 is neutral)
    #[arg(short, long)]
    contrast: Option<f32>,

    /// Contrast curve: "linear" or "sigmoid"
    #[arg(long)]
    curve: Option<String>,

    #[arg(long)]
    rows: Option<u32>,

    #[arg(long)]
    cols: Option<u32>,

    /// Output file (format from extension); defaults to a new file in the
    /// configured gallery directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Draw the grid into the saved image
    #[arg(long)]
    overlay: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => {
            init_tracing();
            run_render_command(args).await
        }
        Some(Commands::Grid {
            rows,
            cols,
            width,
            height,
            viewport,
        }) => run_grid_command(rows, cols, width, height, viewport),
        Some(Commands::Thresholds {
            levels,
            contrast,
            curve,
            gain,
        }) => run_thresholds_command(levels, contrast, &curve, gain),
        Some(Commands::InitConfig { force }) => {
            init_tracing();
            run_init_config_command(force)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Logs go to stderr so that command output on stdout stays parseable
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notanizer=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Select, crop, quantize and save one photo
async fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = NotanConfig::load_or_default(&NotanConfig::path_from_env());

    if let Some(levels) = args.levels {
        config.tone.levels = levels;
    }
    if let Some(contrast) = args.contrast {
        config.tone.contrast = contrast;
    }
    if let Some(curve) = args.curve {
        config.tone.curve = curve;
    }
    if let Some(rows) = args.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.grid.cols = cols;
    }
    config.validate()?;

    let mut session = Session::new(config);
    session.select(&args.input).await?;

    if let Some(region) = args.crop {
        session.crop(region)?;
    } else if args.square {
        session.crop_square()?;
    }
    session.quantize()?;

    let saved = match (args.output, args.overlay) {
        (Some(path), false) => session.save_to(path).await?,
        (Some(path), true) => session.save_preview_to(path).await?,
        (None, false) => session.save().await?,
        (None, true) => session.save_preview().await?,
    };

    if let Some(image) = session.current() {
        println!(
            "Saved {} ({}x{}, {} tones)",
            saved.display(),
            image.width(),
            image.height(),
            session.config().tone.levels
        );
    }
    Ok(())
}

/// Print grid lines for an image as JSON
fn run_grid_command(
    rows: u32,
    cols: u32,
    width: u32,
    height: u32,
    viewport: Option<f64>,
) -> anyhow::Result<()> {
    let spec = GridSpec::new(rows, cols)?;
    let geometry = match viewport {
        Some(viewport) => DisplayGeometry::fit_width(width, height, viewport)?,
        None => DisplayGeometry::native(width, height)?,
    };
    let lines = grid_lines(spec, geometry);

    let json = serde_json::json!({
        "rows": rows,
        "cols": cols,
        "rendered_width": geometry.rendered_width(),
        "rendered_height": geometry.rendered_height(),
        "horizontal": lines.horizontal,
        "vertical": lines.vertical,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Print the band table for one quantizer setting
fn run_thresholds_command(
    levels: usize,
    contrast: f32,
    curve: &str,
    gain: f32,
) -> anyhow::Result<()> {
    let curve: CurveKind = curve.parse()?;
    let quantizer = ToneQuantizer::new(levels)?
        .boxed_curve(curve.build(gain))
        .contrast(Contrast::new(contrast)?);
    let table = quantizer.table();

    println!("{levels} tones, contrast {contrast}, {curve} curve (gain {gain})\n");
    println!("level  tone     luminance");
    for (level, (lower, upper)) in quantizer.thresholds().bands().into_iter().enumerate() {
        let c = table.color(level);
        println!(
            "{level:<5}  #{:02x}{:02x}{:02x}  {lower:.4} - {upper:.4}",
            c.r, c.g, c.b
        );
    }
    Ok(())
}

/// Write the default configuration file
fn run_init_config_command(force: bool) -> anyhow::Result<()> {
    let path = NotanConfig::path_from_env();

    if path.exists() && !force {
        println!(
            "Skipped {} (already exists, use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, NotanConfig::default().to_yaml()?)?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    println!("Wrote {}", path.display());
    Ok(())
}

/// Display version and effective configuration
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let path = NotanConfig::path_from_env();
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("defaults ({} not found)", path.display())
    };
    let config = NotanConfig::load_or_default(&path);

    println!("Notanizer v{VERSION}\n");
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE").as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration: {source}");
    println!("  grid       {}x{}", config.grid.rows, config.grid.cols);
    println!(
        "  tone       {} levels, contrast {}, {} curve",
        config.tone.levels, config.tone.contrast, config.tone.curve
    );
    println!(
        "  resize to  {}x{} max",
        config.processing.max_width, config.processing.max_height
    );
    println!(
        "  output     {} ({}, quality {})",
        config.output.directory.display(),
        config.output.format,
        config.output.quality
    );

    println!("\nCommands:");
    println!("  notanizer render       Quantize a photo and save it");
    println!("  notanizer grid         Print grid line offsets");
    println!("  notanizer thresholds   Print luminance bands");
    println!("  notanizer init-config  Write the default config.yaml");
    println!("\nRun 'notanizer --help' for more details.");
}

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use keyed_compositor::{
    config::{Config, ConfigOverrides},
    keying::KeyModeRegistry,
    pipeline::{CompositeOutcome, KeyedCompositor},
};

#[derive(Parser)]
#[command(
    name = "keyed-compositor",
    version,
    about = "Composite a keyed text or logo image onto an icon background",
    long_about = "Keyed-Compositor makes the near-black background of an overlay image transparent and alpha-composites the rest onto a background image, writing the result as PNG. If compositing fails, the background is copied to the output instead."
)]
struct Cli {
    /// Background image (PNG or JPEG)
    #[arg(short, long)]
    background: Option<PathBuf>,

    /// Overlay image with a near-black background (PNG or JPEG)
    #[arg(short = 'O', long)]
    overlay: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Key mode for non-black overlay pixels (white, passthrough)
    #[arg(short, long)]
    mode: Option<String>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail instead of copying the background when compositing fails
    #[arg(long)]
    no_fallback: bool,

    /// Exit with status 2 when the background had to be copied
    #[arg(long)]
    strict: bool,

    /// List the available key modes and exit
    #[arg(long)]
    list_modes: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout only carries the output path
    let log_level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = KeyModeRegistry::new();

    if cli.list_modes {
        for name in registry.available_modes() {
            if let Some(mode) = registry.get_mode(&name) {
                println!("{:<12} {}", name, mode.description());
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting Keyed-Compositor v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path).map_err(|e| anyhow!(e.user_message()))?
        }
        None => Config::default(),
    };

    // Command line flags win over the file
    config.apply_overrides(ConfigOverrides {
        background: cli.background,
        overlay: cli.overlay,
        output: cli.output,
        mode: cli.mode,
        no_fallback: cli.no_fallback,
    });

    let compositor = KeyedCompositor::from_config(&config, &registry)
        .map_err(|e| anyhow!(e.user_message()))?;
    let job = config.job()?;

    let outcome = compositor
        .run(&job)
        .map_err(|e| anyhow!(e.user_message()))?;

    if let CompositeOutcome::FellBack { reason, .. } = &outcome {
        eprintln!("Compositing failed: {}", reason.user_message());
        eprintln!("Copied the background as a stand-in.");
    }
    println!("{}", outcome.output().display());

    Ok(ExitCode::from(outcome.exit_status(cli.strict)))
}

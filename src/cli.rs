use clap::Parser;
use std::path::PathBuf;

// Build version with renderer info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Renderer: egui painter (wireframe)\n",
    "Target:   ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Scroll-driven cosmic journey presentation
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Scene index to start on (0-based, clamped to the roster)
    #[arg(short = 's', long = "scene", value_name = "N", default_value = "0")]
    pub scene: usize,

    /// Start in fullscreen mode
    #[arg(short = 'F', long = "fullscreen")]
    pub fullscreen: bool,

    /// World seed for scene generation (overrides settings)
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Enable debug logging to file (default: voyage.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

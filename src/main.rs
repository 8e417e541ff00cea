use clap::Parser;
use log::{debug, info};

use voyage::app::VoyageApp;
use voyage::cli::Args;
use voyage::paths;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = paths::PathConfig::from_env_and_cli(args.config_dir.clone());

    // Ensure directories exist
    if let Err(e) = paths::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {}", e);
    }

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        // File logging with specified verbosity level
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| paths::data_file("voyage.log", &path_config));

        let file = std::fs::File::create(&log_path)?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .filter_module("eframe", log::LevelFilter::Info)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info)
            .filter_module("eframe", log::LevelFilter::Info)
            .format_timestamp_millis()
            .init();
    }

    info!("Voyage starting...");
    debug!("Command-line args: {:?}", args);
    info!(
        "Config path: {}",
        paths::config_file("voyage.json", &path_config).display()
    );

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(format!(
                "Voyage v{} • scroll to explore",
                env!("CARGO_PKG_VERSION")
            ))
            .with_inner_size([1440.0, 900.0])
            .with_resizable(true),
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "voyage",
        native_options,
        Box::new(move |_cc| Ok(Box::new(VoyageApp::new(&args, path_config)))),
    )?;

    Ok(())
}

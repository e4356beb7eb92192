//! Bookstore Dashboard - desktop mock of a bookstore management system.

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use bookstore_dashboard as app;
use clap::Parser;
use eframe::egui;

use app::config::{AppConfig, ConfigLoadResult};
use app::ui::DashboardApp;

/// Desktop mock of a bookstore management dashboard.
#[derive(Parser)]
#[command(name = "bookstore-dashboard")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    // Logging is configured from the file, so load problems are reported once it is up.
    let load_result = AppConfig::try_load(&config_path);
    let config = match &load_result {
        ConfigLoadResult::Loaded(config) => config.clone(),
        ConfigLoadResult::Missing | ConfigLoadResult::Invalid(_) => AppConfig::default(),
    };

    let _log_guard = app::logging::init(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("Bookstore Dashboard starting...");
    if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
    }
    tracing::info!("Config path: {:?}", config_path);
    match load_result {
        ConfigLoadResult::Loaded(_) => tracing::info!("Config loaded successfully"),
        ConfigLoadResult::Missing => tracing::info!("Config missing, using defaults"),
        ConfigLoadResult::Invalid(e) => tracing::warn!("Config invalid, using defaults: {}", e),
    }

    run_dashboard(config)
}

/// Run the main window.
fn run_dashboard(config: AppConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bookstore Management System")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([config.window.min_width, config.window.min_height]),
        ..Default::default()
    };

    // Create tokio runtime for simulated action timers
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    eframe::run_native(
        "Bookstore Management System",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, &config, rt)))),
    )
    .map_err(|e| anyhow!("Window error: {e}"))
}

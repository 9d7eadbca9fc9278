//! LogiSphere - demo desktop shell for logistics and supply chain management.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use egui_phosphor::Variant;
use logisphere as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::ui::MainApp;

const WINDOW_TITLE: &str = "LogiSphere - Supply Chain Management";

/// Demo logistics, supply chain and transport management shell.
#[derive(Parser)]
#[command(name = "logisphere")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Override the header image path
    #[arg(long, value_name = "PATH")]
    header_image: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let load_result = AppConfig::try_load(&config_path);
    let mut config = match &load_result {
        ConfigLoadResult::Loaded(config) => config.clone(),
        ConfigLoadResult::Missing | ConfigLoadResult::Invalid(_) => AppConfig::default(),
    };

    // Initialize logging
    let _log_guard = app::logging::init(&config.logging);

    tracing::info!("LogiSphere starting...");
    tracing::info!("Config path: {:?}", config_path);
    match load_result {
        ConfigLoadResult::Loaded(_) => tracing::info!("Config loaded successfully"),
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            if cli.dev {
                match AppConfig::write_default_if_missing(&config_path) {
                    Ok(true) => tracing::info!("Wrote default config to {:?}", config_path),
                    Ok(false) => {}
                    Err(e) => tracing::warn!("Failed to write default config: {}", e),
                }
            }
        }
        ConfigLoadResult::Invalid(e) => tracing::warn!("Config invalid, using defaults: {}", e),
    }

    if let Some(path) = cli.header_image {
        tracing::info!("Header image override: {:?}", path);
        config.header.image_path = path;
    }

    run_main_app(config)
}

/// Run the main application.
fn run_main_app(config: AppConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_maximized(config.window.maximized)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([config.window.min_width, config.window.min_height]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(MainApp::new(&cc.egui_ctx, config)?))
        }),
    )
}

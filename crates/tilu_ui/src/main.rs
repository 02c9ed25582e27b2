//! TILU Media Player - Main entry point
//!
//! Handles process-wide setup before the iced event loop takes over:
//! - Configuration loading
//! - Application-level logging initialization
//! - Window settings and launch

use std::path::Path;

use anyhow::Context;
use iced::{window, Size};

use tilu_core::config::{ConfigManager, WindowSettings};
use tilu_core::logging::{init_tracing, init_tracing_with_file};

mod app;
mod backend;
mod handlers;
mod pages;
mod theme;

use app::App;

fn main() -> anyhow::Result<()> {
    // Load configuration first (needed for logs directory path)
    let mut config = ConfigManager::new(ConfigManager::default_path());

    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let logging = config.settings().logging.clone();
    let _log_guard = if logging.file_output {
        init_tracing_with_file(logging.level, config.logs_folder())
    } else {
        init_tracing(logging.level);
        None
    };

    tracing::info!("TILU Media Player starting");
    tracing::info!("Config: {}", config.path().display());
    tracing::info!("Core version: {}", tilu_core::version());

    let window_settings = window_settings(&config.settings().window);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window(window_settings)
        .run_with(move || App::new(config))
        .context("event loop failed")?;

    tracing::info!("TILU Media Player exiting");
    Ok(())
}

fn window_settings(settings: &WindowSettings) -> window::Settings {
    window::Settings {
        size: Size::new(settings.width, settings.height),
        min_size: Some(Size::new(800.0, 500.0)),
        icon: load_icon(Path::new(&settings.icon_path)),
        ..Default::default()
    }
}

fn load_icon(path: &Path) -> Option<window::Icon> {
    if !path.exists() {
        tracing::debug!("No window icon at {}", path.display());
        return None;
    }
    match window::icon::from_file(path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("Failed to load window icon {}: {}", path.display(), e);
            None
        }
    }
}

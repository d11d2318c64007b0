#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::Context;
use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use level_dashboard::config::APP_STATE_PATH;
use level_dashboard::ui::UI_CONFIG;
use level_dashboard::ui::config::UI_TEXT;
use level_dashboard::{Cli, run_app};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for market data fetches, lives as long as the window
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let handle = rt.handle().clone();
    let settings = args.app_settings();

    log::info!(
        "🚀 Starting dashboard for {} (levels in {})",
        settings.symbol,
        settings.data_dir.display()
    );

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([UI_CONFIG.side_panel_min_width * 3.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, handle, settings))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    drop(rt);
    Ok(())
}

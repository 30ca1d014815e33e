mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::TradeViewerApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

/// Desktop viewer for market trade-opportunity exports.
#[derive(Debug, Parser)]
#[command(name = "trade-viewer", version, about)]
struct Cli {
    /// JSON (or CSV) export to open at startup.
    path: Option<PathBuf>,

    /// Compute net profit with the premium sales tax rate.
    #[arg(long)]
    premium: bool,
}

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut state = AppState::default();
    state.set_premium(cli.premium);
    if let Some(path) = &cli.path {
        state.load_file(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([800.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Trade Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(TradeViewerApp::new(state)))),
    )
}

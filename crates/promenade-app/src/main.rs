// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use promenade_app::ipc;
use promenade_app::state::AppState;
use promenade_content::PortfolioConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // A missing or malformed portfolio document is a startup failure;
    // it is never handled inside the frame loop.
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("portfolio.json"));
    let config = match PortfolioConfig::load_from_file(&config_path) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };
    info!(path = %config_path.display(), "portfolio config loaded");

    tauri::Builder::default()
        .manage(AppState::new(config))
        .invoke_handler(tauri::generate_handler![
            ipc::start_tour,
            ipc::send_command,
            ipc::get_snapshot,
            ipc::get_scene,
            ipc::get_zones,
            ipc::get_panel,
            ipc::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running PROMENADE");
}

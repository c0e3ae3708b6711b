//! Tauri IPC command handlers.
//!
//! These `#[tauri::command]` functions are invoked by the frontend via
//! `invoke()`. They bridge frontend requests to the frame loop thread
//! via channels, and serve the static startup data (scene manifest,
//! zone table, panel HTML).

use tauri::{AppHandle, State};

use promenade_content::{panels, PortfolioConfig};
use promenade_core::commands::ViewerCommand;
use promenade_core::state::{SceneManifest, TourSnapshot, ZoneView};
use promenade_core::zones::ZONES;

use crate::frame_loop;
use crate::state::{AppState, FrameLoopCommand};

/// Start the tour. Spawns the frame loop thread if not already running.
///
/// Frontend: `invoke("start_tour")`
#[tauri::command]
pub fn start_tour(app_handle: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Tour already running".into());
    }

    let cmd_tx = frame_loop::spawn_frame_loop(app_handle, state.latest_snapshot.clone());

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Send a viewer command to the tour.
///
/// Frontend: `invoke("send_command", { command })`
#[tauri::command]
pub fn send_command(command: ViewerCommand, state: State<'_, AppState>) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(FrameLoopCommand::Viewer(command))
            .map_err(|e| format!("Failed to send command: {e}")),
        None => Err("Tour not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
///
/// Frontend: `invoke("get_snapshot")`
#[tauri::command]
pub fn get_snapshot(state: State<'_, AppState>) -> Result<Option<TourSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Get the one-time scene manifest the renderer builds its objects from.
///
/// Frontend: `invoke("get_scene")`
#[tauri::command]
pub fn get_scene(state: State<'_, AppState>) -> Result<SceneManifest, String> {
    Ok(state.scene.clone())
}

/// Get the authored zone table, for the indicator dots and jump targets.
///
/// Frontend: `invoke("get_zones")`
#[tauri::command]
pub fn get_zones() -> Vec<ZoneView> {
    ZONES
        .iter()
        .enumerate()
        .map(|(index, zone)| ZoneView {
            index,
            name: zone.name.to_string(),
            description: zone.description.to_string(),
            start: zone.start,
            end: zone.end,
        })
        .collect()
}

/// Render the content panel HTML for a zone.
///
/// Frontend: `invoke("get_panel", { zoneIndex })`
#[tauri::command]
pub fn get_panel(zone_index: usize, state: State<'_, AppState>) -> Result<String, String> {
    panels::render_panel(&state.config, zone_index)
}

/// Get the full portfolio document.
///
/// Frontend: `invoke("get_config")`
#[tauri::command]
pub fn get_config(state: State<'_, AppState>) -> Result<PortfolioConfig, String> {
    Ok(state.config.clone())
}

//! Application state shared across Tauri commands and the frame loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use promenade_content::PortfolioConfig;
use promenade_core::commands::ViewerCommand;
use promenade_core::state::{SceneManifest, TourSnapshot};
use promenade_sim::engine::{TourConfig, TourEngine};

/// Commands sent from the IPC layer to the frame loop thread.
#[derive(Debug)]
pub enum FrameLoopCommand {
    /// A viewer command to forward to the tour engine.
    Viewer(ViewerCommand),
    /// Shut down the frame loop thread gracefully.
    Shutdown,
}

/// Shared application state, stored as Tauri managed state.
///
/// Tauri requires managed state to be Send + Sync. We achieve this by:
/// - Wrapping `mpsc::Sender` in `Mutex` (Sender is Send but not Sync)
/// - Using `Mutex<Option<...>>` for state that may not exist before `start_tour`
/// - Using `Arc<Mutex<...>>` for the latest snapshot (shared with the loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the frame loop thread.
    /// `None` before `start_tour` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<FrameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the frame loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<TourSnapshot>>>,
    /// Whether the frame loop is currently running.
    pub running: Mutex<bool>,
    /// Portfolio document loaded at startup; read-only thereafter.
    pub config: PortfolioConfig,
    /// Scene manifest built from a fresh engine with the default seed.
    /// The frame loop seeds its engine identically, so node ids line up.
    pub scene: SceneManifest,
}

impl AppState {
    pub fn new(config: PortfolioConfig) -> Self {
        let scene = TourEngine::new(TourConfig::default()).manifest();
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            config,
            scene,
        }
    }
}

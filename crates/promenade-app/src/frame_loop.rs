//! Frame loop thread — ticks the tour engine at 60Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are emitted
//! via Tauri `AppHandle` events and stored in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tauri::{AppHandle, Emitter};
use tracing::{debug, info};

use promenade_core::constants::{TICK_RATE, UI_REVEAL_DELAY_MS};
use promenade_core::events::UiEvent;
use promenade_core::state::TourSnapshot;
use promenade_sim::engine::{TourConfig, TourEngine};

use crate::state::FrameLoopCommand;

/// Duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender for the IPC layer to use.
pub fn spawn_frame_loop(
    app_handle: AppHandle,
    latest_snapshot: Arc<Mutex<Option<TourSnapshot>>>,
) -> mpsc::Sender<FrameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<FrameLoopCommand>();

    std::thread::Builder::new()
        .name("promenade-frame-loop".into())
        .spawn(move || {
            run_frame_loop(app_handle, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn frame loop thread");

    cmd_tx
}

/// The frame loop. Runs until Shutdown command or channel disconnect.
fn run_frame_loop(
    app_handle: AppHandle,
    cmd_rx: mpsc::Receiver<FrameLoopCommand>,
    latest_snapshot: &Mutex<Option<TourSnapshot>>,
) {
    let mut engine = TourEngine::new(TourConfig::default());
    let mut next_tick_time = Instant::now();
    info!("frame loop started");

    loop {
        // 1. Drain all pending viewer commands
        loop {
            match cmd_rx.try_recv() {
                Ok(FrameLoopCommand::Viewer(cmd)) => engine.queue_command(cmd),
                Ok(FrameLoopCommand::Shutdown) => {
                    info!("frame loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. The one delayed callback in the system: reveal the UI
        //    shortly after the character lands.
        if snapshot
            .ui_events
            .iter()
            .any(|e| matches!(e, UiEvent::DescentComplete))
        {
            debug!("descent complete, scheduling ui reveal");
            schedule_ui_reveal(app_handle.clone());
        }

        // 4. Emit snapshot to the frontend via Tauri event
        let _ = app_handle.emit("tour:snapshot", &snapshot);

        // 5. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 6. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

fn schedule_ui_reveal(app_handle: AppHandle) {
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(UI_REVEAL_DELAY_MS));
        let _ = app_handle.emit("tour:reveal-ui", ());
    });
}

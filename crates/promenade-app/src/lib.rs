//! PROMENADE Tauri application.
//!
//! Wires the tour engine and the portfolio content to the webview:
//! a frame-loop thread ticks the engine and emits snapshots, IPC commands
//! forward viewer input and serve the scene manifest and panel HTML.

pub mod frame_loop;
pub mod ipc;
pub mod state;

pub use promenade_core as core;

//! Core types and definitions for the PROMENADE portfolio walk.
//!
//! This crate defines the vocabulary shared across all other crates:
//! scene-node components, viewer commands, state snapshots, UI events,
//! the path function, the zone table, and tuning constants.
//! It has no dependency on Tauri or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod path;
pub mod state;
pub mod types;
pub mod zones;

//! Tour engine for the PROMENADE portfolio walk.
//!
//! Owns the hecs scene-node world, runs the per-tick systems at a fixed
//! tick rate, and produces TourSnapshots for the frontend.

pub mod engine;
pub mod locomotion;
pub mod systems;
pub mod world_setup;

pub use engine::TourEngine;
pub use promenade_core as core;

#[cfg(test)]
mod tests;

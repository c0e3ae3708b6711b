//! Per-tick systems that operate on the walk each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus the locomotion/camera state the engine owns. They hold no state of
//! their own.

pub mod ambient;
pub mod camera;
pub mod descent;
pub mod gait;
pub mod locomotion;
pub mod snapshot;
pub mod zone_watch;

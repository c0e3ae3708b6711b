//! Viewer commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Each one
//! only writes a target field — the per-tick systems do the smoothing.

use serde::{Deserialize, Serialize};

/// All possible viewer inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewerCommand {
    /// Wheel input. Moves the scroll target by -delta * WHEEL_GAIN,
    /// clamped to the path range. Ignored while the descent is playing.
    Scroll { delta: f32 },
    /// Pointer moved to normalized horizontal position x in [-1, 1].
    /// Sets the camera orbit target to x * POINTER_GAIN.
    PointerMoved { x: f32 },
    /// Jump directly to a zone: sets the scroll target to its midpoint.
    JumpToZone { index: usize },
}

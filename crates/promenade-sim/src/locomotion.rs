//! Locomotion and camera smoothing state, owned exclusively by the engine.
//!
//! Viewer input only ever writes the `target_*` fields (at the tick
//! boundary, via queued commands); the per-tick systems close the gap
//! between current and target by a fixed damping fraction.

use glam::Vec3;

use promenade_core::constants::{CAMERA_DISTANCE, CAMERA_HEIGHT, DESCENT_START_HEIGHT};

/// Scroll, gait, and camera-orbit state, mutated once per tick.
#[derive(Debug, Clone)]
pub struct LocomotionState {
    /// Smoothed depth of the character along the path.
    pub scroll_position: f32,
    /// Depth the scroll is converging toward. Always within the path range.
    pub target_scroll_position: f32,
    /// Smoothed horizontal camera orbit offset (radians).
    pub camera_angle: f32,
    /// Orbit offset the camera is converging toward, set by pointer input.
    pub target_camera_angle: f32,
    /// Gait phase accumulator. Advances only while moving, never resets.
    pub walk_cycle: f32,
    /// True until the intro descent lands the character on the path.
    pub is_descending: bool,
    /// Index of the zone the walk is currently in.
    pub current_zone: usize,
    /// Yaw the character faces this tick, derived from the path slope.
    pub heading: f32,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            scroll_position: 0.0,
            target_scroll_position: 0.0,
            camera_angle: 0.0,
            target_camera_angle: 0.0,
            walk_cycle: 0.0,
            is_descending: true,
            current_zone: 0,
            heading: 0.0,
        }
    }
}

/// The chase camera's smoothed placement.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        // Initial framing: above the descent start point, looking at the
        // character before it begins to fall.
        Self {
            position: Vec3::new(0.0, DESCENT_START_HEIGHT + CAMERA_HEIGHT, CAMERA_DISTANCE),
            look_at: Vec3::new(0.0, DESCENT_START_HEIGHT, 0.0),
        }
    }
}

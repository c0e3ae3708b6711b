//! Tour state snapshot — the complete visible state sent to the frontend
//! each tick — and the one-time scene manifest the renderer builds from.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::{Material, Shape};
use crate::events::UiEvent;
use crate::types::{Transform, TourTime};

/// Complete tour state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TourSnapshot {
    pub time: TourTime,
    pub locomotion: LocomotionView,
    pub character: CharacterView,
    pub camera: CameraView,
    pub zone: ZoneView,
    /// Local poses of every animated node, sorted by id.
    pub node_poses: Vec<NodePose>,
    pub ui_events: Vec<UiEvent>,
}

/// Scroll and camera-orbit smoothing state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocomotionView {
    pub scroll_position: f32,
    pub target_scroll_position: f32,
    pub camera_angle: f32,
    pub walk_cycle: f32,
    pub is_descending: bool,
    /// Fraction of the path walked, |scroll| / span. Not clamped.
    pub progress: f32,
}

/// Character root placement for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CharacterView {
    pub position: Vec3,
    /// Yaw in radians.
    pub heading: f32,
}

/// Camera placement for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// The currently active zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneView {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub start: f32,
    pub end: f32,
}

/// Local pose of one animated scene node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodePose {
    pub id: u32,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// One-time description of the full scene graph, sent to the renderer
/// before the first tick. Static nodes never appear in snapshots again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Every node in spawn order (ids are dense, starting at 0).
    pub nodes: Vec<NodeSpec>,
    /// Sampled path offsets for deforming the ground plane.
    pub path: PathProfile,
}

/// Construction-time description of one scene node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: u32,
    pub parent: Option<u32>,
    pub shape: Shape,
    pub material: Option<Material>,
    pub transform: Transform,
    pub outline: Option<f32>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    /// Whether this node's pose is updated by snapshots.
    pub animated: bool,
}

/// Lateral path offsets sampled at regular depth steps, from `depth_near`
/// down to `depth_far` inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathProfile {
    pub depth_near: f32,
    pub depth_far: f32,
    pub step: f32,
    pub offsets: Vec<f32>,
}

//! ECS components for hecs scene-node entities.
//!
//! Components are plain data structs with no methods.
//! All per-tick logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Stable identifier of a scene node, assigned in spawn order.
/// The renderer keys its objects on this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Parent node id. Absent on root-level nodes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Parent(pub u32);

/// Renderable geometry of a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Invisible grouping node.
    Group,
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Icosahedron {
        radius: f32,
        detail: u32,
    },
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Point cloud with positions baked at construction.
    Points {
        positions: Vec<Vec3>,
        size: f32,
    },
}

/// Surface appearance of a node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    pub kind: MaterialKind,
    /// Packed 0xRRGGBB color.
    pub color: u32,
    pub opacity: f32,
    pub transparent: bool,
    pub wireframe: bool,
    pub double_sided: bool,
}

/// Back-side outline shell around the mesh, with relative thickness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Outline(pub f32);

/// Marks a node as casting shadows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CastsShadow;

/// Marks a node as receiving shadows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReceivesShadow;

/// Marks a node whose transform changes after construction.
/// Only animated nodes are included in per-tick snapshot poses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Animated;

/// Marks the character root group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CharacterRig;

/// Marks a limb node of the character rig.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Limb {
    pub role: LimbRole,
}

/// Continuous rotation: rotation = base + rate * elapsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spin {
    /// Construction rotation of the non-spinning axes.
    pub base: Vec3,
    /// Radians per second on each axis.
    pub rate: Vec3,
}

/// Vertical bob: y = base_height + sin(elapsed * rate) * amplitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bob {
    pub base_height: f32,
    pub amplitude: f32,
    pub rate: f32,
}

/// Orbit around the local origin at angle = base_angle + elapsed * speed,
/// with a double-frequency vertical bob.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Orbiter {
    pub base_angle: f32,
    pub speed: f32,
    pub radius: f32,
}

/// Slow vertical drift and spin for portal particles, phase-shifted per
/// particle so the swarm shimmers instead of moving in lockstep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PortalDrift {
    pub phase: f32,
}

/// Falling streamer: loses height each tick, resets to the ceiling
/// after passing below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Streamer;

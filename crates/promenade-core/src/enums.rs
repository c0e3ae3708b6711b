//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which limb of the character rig a node drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimbRole {
    LeftLeg,
    RightLeg,
    LeftArm,
    RightArm,
}

/// Material family, mapping onto the renderer's material types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Cel-shaded with a stepped gradient ramp.
    #[default]
    Toon,
    /// Unlit flat color.
    Flat,
    /// Point-sprite material for point clouds.
    Points,
}

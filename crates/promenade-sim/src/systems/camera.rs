//! Chase camera system.

use glam::Vec3;
use hecs::World;

use promenade_core::components::CharacterRig;
use promenade_core::constants::{
    CAMERA_DAMPING, CAMERA_DISTANCE, CAMERA_HEIGHT, CAMERA_LOOK_OFFSET,
};
use promenade_core::types::Transform;

use crate::locomotion::{CameraRig, LocomotionState};

/// Smooth the orbit angle toward the pointer-driven target, then trail the
/// character at a fixed distance and height, rotated by heading + orbit
/// around the vertical axis.
///
/// Each position axis damps toward its desired value independently; the
/// look-at snaps to the character every tick.
pub fn run(world: &World, loco: &mut LocomotionState, camera: &mut CameraRig) {
    loco.camera_angle += (loco.target_camera_angle - loco.camera_angle) * CAMERA_DAMPING;

    let character = character_position(world);
    let orbit = loco.heading + loco.camera_angle;
    let desired = Vec3::new(
        character.x + orbit.sin() * CAMERA_DISTANCE,
        character.y + CAMERA_HEIGHT,
        character.z + orbit.cos() * CAMERA_DISTANCE,
    );

    camera.position.x += (desired.x - camera.position.x) * CAMERA_DAMPING;
    camera.position.y += (desired.y - camera.position.y) * CAMERA_DAMPING;
    camera.position.z += (desired.z - camera.position.z) * CAMERA_DAMPING;
    camera.look_at = character + Vec3::Y * CAMERA_LOOK_OFFSET;
}

/// Character root position (origin if the rig is missing).
fn character_position(world: &World) -> Vec3 {
    world
        .query::<(&CharacterRig, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| transform.position)
        .unwrap_or_default()
}

//! Intro descent system.
//!
//! Lowers the character from its spawn height while spinning it around its
//! vertical axis. Runs instead of the steady-state systems until the
//! character reaches the ground; the camera is rigidly offset above and
//! behind with no damping.

use hecs::World;

use promenade_core::components::CharacterRig;
use promenade_core::constants::{
    CAMERA_DISTANCE, CAMERA_HEIGHT, CHARACTER_HEIGHT, DESCENT_SPIN_STEP, DESCENT_STEP,
};
use promenade_core::events::UiEvent;
use promenade_core::types::Transform;

use crate::locomotion::{CameraRig, LocomotionState};

/// Advance the descent by one tick. Clears `is_descending` and emits
/// `DescentComplete` once — on the tick the character touches down.
pub fn run(
    world: &mut World,
    loco: &mut LocomotionState,
    camera: &mut CameraRig,
    ui_events: &mut Vec<UiEvent>,
) {
    for (_entity, (transform, _rig)) in world.query_mut::<(&mut Transform, &CharacterRig)>() {
        transform.position.y -= DESCENT_STEP;
        transform.rotation.y += DESCENT_SPIN_STEP;

        if transform.position.y <= CHARACTER_HEIGHT {
            transform.position.y = CHARACTER_HEIGHT;
            loco.is_descending = false;
            ui_events.push(UiEvent::DescentComplete);
        }

        // Rigid framing: no damping while falling.
        camera.position.y = transform.position.y + CAMERA_HEIGHT;
        camera.position.z = transform.position.z + CAMERA_DISTANCE;
        camera.look_at = transform.position;
    }
}

//! Scroll smoothing and character placement along the path.

use hecs::World;

use promenade_core::components::CharacterRig;
use promenade_core::constants::SCROLL_DAMPING;
use promenade_core::path;
use promenade_core::types::Transform;

use crate::locomotion::LocomotionState;

/// Exponentially smooth the scroll toward its target, then pin the
/// character to the path at the smoothed depth, facing down the local
/// slope. Residual distance to target decays by 5% per tick.
pub fn run(world: &mut World, loco: &mut LocomotionState) {
    loco.scroll_position +=
        (loco.target_scroll_position - loco.scroll_position) * SCROLL_DAMPING;
    loco.heading = path::heading_at(loco.scroll_position);

    let lateral = path::lateral_offset(loco.scroll_position);
    for (_entity, (transform, _rig)) in world.query_mut::<(&mut Transform, &CharacterRig)>() {
        transform.position.x = lateral;
        transform.position.z = loco.scroll_position;
        transform.rotation.y = loco.heading;
    }
}

//! Walking gait system.

use std::f32::consts::PI;

use hecs::World;

use promenade_core::components::Limb;
use promenade_core::constants::{
    ARM_SWING_AMPLITUDE, LEG_SWING_AMPLITUDE, MOVING_THRESHOLD, WALK_CYCLE_RATE,
};
use promenade_core::enums::LimbRole;
use promenade_core::types::Transform;

use crate::locomotion::LocomotionState;

/// Advance the walk cycle and swing the limbs while the character is still
/// closing on its scroll target. Once within the stop threshold the cycle
/// freezes and the limbs hold their last pose — they do not reset.
pub fn run(world: &mut World, loco: &mut LocomotionState) {
    if (loco.target_scroll_position - loco.scroll_position).abs() <= MOVING_THRESHOLD {
        return;
    }
    loco.walk_cycle += WALK_CYCLE_RATE;

    for (_entity, (transform, limb)) in world.query_mut::<(&mut Transform, &Limb)>() {
        // Legs swing in anti-phase; each arm counters its own side's leg.
        let (phase, amplitude) = match limb.role {
            LimbRole::LeftLeg => (0.0, LEG_SWING_AMPLITUDE),
            LimbRole::RightLeg => (PI, LEG_SWING_AMPLITUDE),
            LimbRole::LeftArm => (PI, ARM_SWING_AMPLITUDE),
            LimbRole::RightArm => (0.0, ARM_SWING_AMPLITUDE),
        };
        transform.rotation.x = (loco.walk_cycle + phase).sin() * amplitude;
    }
}

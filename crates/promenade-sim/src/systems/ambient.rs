//! Decorative animation systems.
//!
//! Each one is a pure function of elapsed time or a simple wrap-around
//! counter. None of them read or write locomotion state.

use hecs::World;

use promenade_core::components::{Bob, Orbiter, PortalDrift, Spin, Streamer};
use promenade_core::constants::{
    PORTAL_DRIFT_STEP, SKILL_ORB_BOB, SKILL_ORB_HEIGHT, STREAMER_CEILING, STREAMER_FALL_STEP,
};
use promenade_core::types::Transform;

/// Run every decorative animation for this tick.
pub fn run(world: &mut World, elapsed: f32) {
    run_spinners(world, elapsed);
    run_bobbers(world, elapsed);
    run_orbiters(world, elapsed);
    run_portal_drift(world, elapsed);
    run_streamers(world);
}

/// Absolute rotation from elapsed time: intro ring, skills core, portal.
fn run_spinners(world: &mut World, elapsed: f32) {
    for (_entity, (transform, spin)) in world.query_mut::<(&mut Transform, &Spin)>() {
        transform.rotation = spin.base + spin.rate * elapsed;
    }
}

fn run_bobbers(world: &mut World, elapsed: f32) {
    for (_entity, (transform, bob)) in world.query_mut::<(&mut Transform, &Bob)>() {
        transform.position.y = bob.base_height + (elapsed * bob.rate).sin() * bob.amplitude;
    }
}

/// Skill orbs: horizontal orbit with a double-frequency vertical bob.
fn run_orbiters(world: &mut World, elapsed: f32) {
    for (_entity, (transform, orbiter)) in world.query_mut::<(&mut Transform, &Orbiter)>() {
        let angle = orbiter.base_angle + elapsed * orbiter.speed;
        transform.position.x = angle.cos() * orbiter.radius;
        transform.position.y = SKILL_ORB_HEIGHT + (angle * 2.0).sin() * SKILL_ORB_BOB;
        transform.position.z = angle.sin() * orbiter.radius;
    }
}

/// Portal particles: incremental vertical shimmer, absolute spin.
/// Phase-shifted per particle so the swarm does not move in lockstep.
fn run_portal_drift(world: &mut World, elapsed: f32) {
    for (_entity, (transform, drift)) in world.query_mut::<(&mut Transform, &PortalDrift)>() {
        transform.position.y += (elapsed + drift.phase).sin() * PORTAL_DRIFT_STEP;
        transform.rotation.y = elapsed + drift.phase;
    }
}

/// Streamers fall a fixed step per tick and recycle to the ceiling once
/// they pass below zero.
fn run_streamers(world: &mut World) {
    for (_entity, (transform, _streamer)) in world.query_mut::<(&mut Transform, &Streamer)>() {
        transform.position.y -= STREAMER_FALL_STEP;
        if transform.position.y < 0.0 {
            transform.position.y = STREAMER_CEILING;
        }
    }
}

//! Tests for the tour engine: descent, scroll smoothing, gait, camera
//! follow, zone crossings, decorative animation, and determinism.

use glam::Vec3;

use promenade_core::commands::ViewerCommand;
use promenade_core::components::{Limb, Streamer};
use promenade_core::constants::*;
use promenade_core::enums::LimbRole;
use promenade_core::events::UiEvent;
use promenade_core::types::Transform;
use promenade_core::zones::ZONES;

use crate::engine::{TourConfig, TourEngine};

/// Ticks for the descent to land: (50 - 2) / 0.5.
const DESCENT_TICKS: usize = 96;

fn landed_engine() -> TourEngine {
    let mut engine = TourEngine::new(TourConfig::default());
    for _ in 0..DESCENT_TICKS {
        engine.tick();
    }
    engine
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = TourEngine::new(TourConfig { seed: 12345 });
    let mut engine_b = TourEngine::new(TourConfig { seed: 12345 });

    engine_a.queue_command(ViewerCommand::JumpToZone { index: 3 });
    engine_b.queue_command(ViewerCommand::JumpToZone { index: 3 });

    for _ in 0..300 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds_diverge() {
    let engine_a = TourEngine::new(TourConfig { seed: 111 });
    let engine_b = TourEngine::new(TourConfig { seed: 222 });

    let json_a = serde_json::to_string(&engine_a.manifest()).unwrap();
    let json_b = serde_json::to_string(&engine_b.manifest()).unwrap();
    assert_ne!(
        json_a, json_b,
        "Different seeds should place decorations differently"
    );
}

// ---- Scene manifest ----

#[test]
fn test_manifest_ids_dense_and_sorted() {
    let engine = TourEngine::new(TourConfig::default());
    let manifest = engine.manifest();

    assert!(!manifest.nodes.is_empty());
    for (i, node) in manifest.nodes.iter().enumerate() {
        assert_eq!(node.id, i as u32, "node ids must be dense in spawn order");
    }
}

#[test]
fn test_manifest_path_profile_spans_walk() {
    let engine = TourEngine::new(TourConfig::default());
    let profile = engine.manifest().path;

    assert_eq!(profile.depth_near, SCROLL_MAX);
    assert_eq!(profile.depth_far, SCROLL_MIN);
    // One sample per depth unit, both ends inclusive.
    assert_eq!(profile.offsets.len(), 301);
    assert_eq!(profile.offsets[0], 0.0);
}

// ---- Descent ----

#[test]
fn test_descent_lands_exactly_on_floor() {
    let mut engine = TourEngine::new(TourConfig::default());

    let mut snap = engine.tick();
    for _ in 1..DESCENT_TICKS - 1 {
        snap = engine.tick();
    }
    assert!(snap.locomotion.is_descending);
    assert!(snap.character.position.y > CHARACTER_HEIGHT);

    let snap = engine.tick();
    assert!(!snap.locomotion.is_descending);
    assert_eq!(snap.character.position.y, CHARACTER_HEIGHT);
    assert!(
        snap.ui_events
            .iter()
            .any(|e| matches!(e, UiEvent::DescentComplete)),
        "landing tick should carry the DescentComplete event"
    );
}

#[test]
fn test_descent_complete_fires_exactly_once() {
    let mut engine = TourEngine::new(TourConfig::default());
    let mut completions = 0;
    for _ in 0..300 {
        let snap = engine.tick();
        completions += snap
            .ui_events
            .iter()
            .filter(|e| matches!(e, UiEvent::DescentComplete))
            .count();
    }
    assert_eq!(completions, 1);
}

#[test]
fn test_descent_camera_rigid() {
    let mut engine = TourEngine::new(TourConfig::default());

    for _ in 0..DESCENT_TICKS - 1 {
        let snap = engine.tick();
        let character = snap.character.position;
        assert_eq!(snap.camera.position.y, character.y + CAMERA_HEIGHT);
        assert_eq!(snap.camera.position.z, character.z + CAMERA_DISTANCE);
        assert_eq!(snap.camera.look_at, character);
    }
}

#[test]
fn test_wheel_ignored_during_descent() {
    let mut engine = TourEngine::new(TourConfig::default());
    engine.queue_command(ViewerCommand::Scroll { delta: 500.0 });
    let snap = engine.tick();
    assert_eq!(snap.locomotion.target_scroll_position, 0.0);
}

// ---- Scroll input ----

#[test]
fn test_scroll_target_always_clamped() {
    let mut engine = landed_engine();

    engine.queue_command(ViewerCommand::Scroll { delta: 1.0e7 });
    let snap = engine.tick();
    assert_eq!(snap.locomotion.target_scroll_position, SCROLL_MIN);

    engine.queue_command(ViewerCommand::Scroll { delta: -1.0e9 });
    let snap = engine.tick();
    assert_eq!(snap.locomotion.target_scroll_position, SCROLL_MAX);

    // A long random-looking mix of wheel inputs never escapes the range.
    let deltas = [120.0, -360.0, 4800.0, -53.0, 9999.0, -9999.0, 1.5];
    for delta in deltas.iter().cycle().take(200).copied() {
        engine.queue_command(ViewerCommand::Scroll { delta });
        let snap = engine.tick();
        let target = snap.locomotion.target_scroll_position;
        assert!((SCROLL_MIN..=SCROLL_MAX).contains(&target), "target {target} escaped");
    }
}

#[test]
fn test_scroll_damped_approach() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 2 });

    let target = ZONES[2].midpoint();
    let initial_distance = target.abs();

    let ticks = 60;
    let mut snap = engine.tick();
    let mut previous = snap.locomotion.scroll_position;
    for _ in 1..ticks {
        snap = engine.tick();
        let current = snap.locomotion.scroll_position;
        // Strictly approaches, never overshoots.
        assert!(current < previous, "scroll must move toward the target each tick");
        assert!(current > target, "scroll must not overshoot the target");
        previous = current;
    }

    // Residual error decays as 0.95^N.
    let residual = (target - snap.locomotion.scroll_position).abs();
    let expected = initial_distance * (1.0 - SCROLL_DAMPING).powi(ticks as i32);
    assert!(
        (residual / expected - 1.0).abs() < 1e-3,
        "residual {residual} should be ~{expected}"
    );
}

#[test]
fn test_jump_to_zone_sets_midpoint_target() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 4 });
    let snap = engine.tick();
    assert_eq!(snap.locomotion.target_scroll_position, ZONES[4].midpoint());
}

#[test]
fn test_jump_to_invalid_zone_ignored() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 99 });
    let snap = engine.tick();
    assert_eq!(snap.locomotion.target_scroll_position, 0.0);
}

// ---- Zone crossings ----

#[test]
fn test_zone_crossings_fire_in_order_exactly_once() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 6 });

    let mut crossings = Vec::new();
    for _ in 0..600 {
        let snap = engine.tick();
        for event in &snap.ui_events {
            if let UiEvent::ZoneChanged { index, .. } = event {
                crossings.push(*index);
            }
        }
    }

    assert_eq!(crossings, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_zone_view_matches_authored_table() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 1 });

    let mut snap = engine.tick();
    for _ in 0..300 {
        snap = engine.tick();
    }
    assert_eq!(snap.zone.index, 1);
    assert_eq!(snap.zone.name, "About");
    assert_eq!(snap.zone.start, -25.0);
    assert_eq!(snap.zone.end, -65.0);
}

// ---- Gait ----

fn limb_angles(engine: &TourEngine) -> [(LimbRole, f32); 4] {
    let mut angles = [(LimbRole::LeftLeg, 0.0); 4];
    let mut query = engine.world().query::<(&Limb, &Transform)>();
    for (i, (_, (limb, transform))) in query.iter().enumerate() {
        angles[i] = (limb.role, transform.rotation.x);
    }
    angles
}

fn angle_of(angles: &[(LimbRole, f32); 4], role: LimbRole) -> f32 {
    angles
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, a)| *a)
        .unwrap()
}

#[test]
fn test_gait_amplitudes_and_phases() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 1 });

    for _ in 0..120 {
        let snap = engine.tick();
        let distance =
            (snap.locomotion.target_scroll_position - snap.locomotion.scroll_position).abs();
        if distance <= MOVING_THRESHOLD {
            break;
        }

        let angles = limb_angles(&engine);
        let left_leg = angle_of(&angles, LimbRole::LeftLeg);
        let right_leg = angle_of(&angles, LimbRole::RightLeg);
        let left_arm = angle_of(&angles, LimbRole::LeftArm);
        let right_arm = angle_of(&angles, LimbRole::RightArm);

        assert!(left_leg.abs() <= LEG_SWING_AMPLITUDE + 1e-6);
        assert!(right_leg.abs() <= LEG_SWING_AMPLITUDE + 1e-6);
        assert!(left_arm.abs() <= ARM_SWING_AMPLITUDE + 1e-6);
        assert!(right_arm.abs() <= ARM_SWING_AMPLITUDE + 1e-6);

        // Legs in anti-phase with each other, arms countering their side.
        assert!((left_leg + right_leg).abs() < 1e-5);
        assert!((left_arm + 0.6 * left_leg).abs() < 1e-5);
        assert!((right_arm - 0.6 * left_leg).abs() < 1e-5);
    }
}

#[test]
fn test_gait_freezes_when_stopped() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 1 });

    // More than enough ticks to settle within the stop threshold.
    let mut snap = engine.tick();
    for _ in 0..1000 {
        snap = engine.tick();
    }
    let distance =
        (snap.locomotion.target_scroll_position - snap.locomotion.scroll_position).abs();
    assert!(distance <= MOVING_THRESHOLD, "walk should have settled");

    let frozen_cycle = snap.locomotion.walk_cycle;
    assert!(frozen_cycle > 0.0, "cycle should have advanced while walking");
    let frozen_angles = limb_angles(&engine);

    for _ in 0..10 {
        let snap = engine.tick();
        assert_eq!(snap.locomotion.walk_cycle, frozen_cycle);
    }
    assert_eq!(limb_angles(&engine), frozen_angles, "limbs must hold their pose");
}

// ---- Camera ----

#[test]
fn test_camera_always_looks_above_character() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 3 });
    engine.queue_command(ViewerCommand::PointerMoved { x: -0.7 });

    for _ in 0..300 {
        let snap = engine.tick();
        assert_eq!(
            snap.camera.look_at,
            snap.character.position + Vec3::Y * CAMERA_LOOK_OFFSET
        );
    }
}

#[test]
fn test_camera_angle_converges_to_pointer_target() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::PointerMoved { x: 0.8 });

    let mut snap = engine.tick();
    assert_eq!(engine.locomotion().target_camera_angle, 0.8 * POINTER_GAIN);

    for _ in 0..500 {
        snap = engine.tick();
    }
    assert!((snap.locomotion.camera_angle - 0.4).abs() < 1e-3);
}

#[test]
fn test_camera_converges_to_trailing_position() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 1 });

    let mut snap = engine.tick();
    for _ in 0..2000 {
        snap = engine.tick();
    }

    // At rest the camera should sit at the fixed trailing offset.
    let orbit = snap.character.heading + snap.locomotion.camera_angle;
    let desired = Vec3::new(
        snap.character.position.x + orbit.sin() * CAMERA_DISTANCE,
        snap.character.position.y + CAMERA_HEIGHT,
        snap.character.position.z + orbit.cos() * CAMERA_DISTANCE,
    );
    assert!(
        snap.camera.position.distance(desired) < 0.01,
        "camera should have settled at the trailing offset"
    );
}

// ---- Decorative animation ----

#[test]
fn test_streamers_stay_within_recycle_band() {
    let mut engine = landed_engine();
    for _ in 0..600 {
        engine.tick();
    }

    let mut query = engine.world().query::<(&Streamer, &Transform)>();
    let mut count = 0;
    for (_, (_, transform)) in query.iter() {
        count += 1;
        assert!(
            (0.0..=STREAMER_CEILING).contains(&transform.position.y),
            "streamer at y={} outside the recycle band",
            transform.position.y
        );
    }
    assert_eq!(count, STREAMER_COUNT);
}

#[test]
fn test_animated_pose_count() {
    let mut engine = TourEngine::new(TourConfig::default());
    let snap = engine.tick();

    // Character root + 4 limbs, intro ring, skills core + 10 orbs,
    // portal + 100 particles, 600 streamers.
    assert_eq!(snap.node_poses.len(), 718);
}

// ---- Snapshot and timing ----

#[test]
fn test_progress_fraction() {
    let mut engine = landed_engine();
    engine.queue_command(ViewerCommand::JumpToZone { index: 3 });

    let mut snap = engine.tick();
    for _ in 0..2000 {
        snap = engine.tick();
    }
    let expected = ZONES[3].midpoint().abs() / PROGRESS_SPAN;
    assert!((snap.locomotion.progress - expected).abs() < 1e-3);
}

#[test]
fn test_snapshot_size_bounds() {
    let mut engine = landed_engine();
    let snap = engine.tick();
    let json = serde_json::to_string(&snap).unwrap();
    let size_kb = json.len() as f64 / 1024.0;

    assert!(size_kb < 200.0, "snapshot should be <200KB, was {size_kb:.1}KB");
    assert!(size_kb > 10.0, "snapshot should carry pose data, was {size_kb:.1}KB");
}

#[test]
fn test_sixty_ticks_is_one_second() {
    let mut engine = TourEngine::new(TourConfig::default());
    let mut snap = engine.tick();
    for _ in 1..60 {
        snap = engine.tick();
    }
    assert_eq!(snap.time.tick, 60);
    assert!((snap.time.elapsed_secs - 1.0).abs() < 1e-10);
}

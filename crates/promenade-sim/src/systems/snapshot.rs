//! Snapshot and manifest builders.
//!
//! Both query the world and never modify it. The manifest is built once at
//! startup; snapshots carry only the poses of `Animated` nodes.

use hecs::World;

use promenade_core::components::{
    Animated, CastsShadow, CharacterRig, Material, NodeId, Outline, Parent, ReceivesShadow,
    Shape,
};
use promenade_core::constants::{PROGRESS_SPAN, SCROLL_MAX, SCROLL_MIN};
use promenade_core::events::UiEvent;
use promenade_core::path;
use promenade_core::state::{
    CameraView, CharacterView, LocomotionView, NodePose, NodeSpec, PathProfile, SceneManifest,
    TourSnapshot, ZoneView,
};
use promenade_core::types::{Transform, TourTime};
use promenade_core::zones::ZONES;

use crate::locomotion::{CameraRig, LocomotionState};

/// Build a complete TourSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &TourTime,
    loco: &LocomotionState,
    camera: &CameraRig,
    ui_events: Vec<UiEvent>,
) -> TourSnapshot {
    TourSnapshot {
        time: *time,
        locomotion: LocomotionView {
            scroll_position: loco.scroll_position,
            target_scroll_position: loco.target_scroll_position,
            camera_angle: loco.camera_angle,
            walk_cycle: loco.walk_cycle,
            is_descending: loco.is_descending,
            progress: loco.scroll_position.abs() / PROGRESS_SPAN,
        },
        character: build_character(world),
        camera: CameraView {
            position: camera.position,
            look_at: camera.look_at,
        },
        zone: build_zone(loco.current_zone),
        node_poses: build_node_poses(world),
        ui_events,
    }
}

/// Character root placement from the rig entity.
fn build_character(world: &World) -> CharacterView {
    world
        .query::<(&CharacterRig, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| CharacterView {
            position: transform.position,
            heading: transform.rotation.y,
        })
        .unwrap_or_default()
}

/// View of the zone at the given index in the authored table.
fn build_zone(index: usize) -> ZoneView {
    let zone = &ZONES[index];
    ZoneView {
        index,
        name: zone.name.to_string(),
        description: zone.description.to_string(),
        start: zone.start,
        end: zone.end,
    }
}

/// Local poses of every animated node, sorted by id.
fn build_node_poses(world: &World) -> Vec<NodePose> {
    let mut poses: Vec<NodePose> = world
        .query::<(&NodeId, &Transform, &Animated)>()
        .iter()
        .map(|(_, (id, transform, _))| NodePose {
            id: id.0,
            position: transform.position,
            rotation: transform.rotation,
        })
        .collect();

    poses.sort_by_key(|pose| pose.id);
    poses
}

/// Build the one-time scene manifest: every node in spawn order plus the
/// sampled path profile for deforming the ground plane.
pub fn build_manifest(world: &World) -> SceneManifest {
    let mut nodes: Vec<NodeSpec> = world
        .query::<(
            &NodeId,
            &Transform,
            &Shape,
            Option<&Material>,
            Option<&Parent>,
            Option<&Outline>,
        )>()
        .iter()
        .map(|(entity, (id, transform, shape, material, parent, outline))| NodeSpec {
            id: id.0,
            parent: parent.map(|p| p.0),
            shape: shape.clone(),
            material: material.copied(),
            transform: *transform,
            outline: outline.map(|o| o.0),
            cast_shadow: world.satisfies::<&CastsShadow>(entity).unwrap_or(false),
            receive_shadow: world.satisfies::<&ReceivesShadow>(entity).unwrap_or(false),
            animated: world.satisfies::<&Animated>(entity).unwrap_or(false),
        })
        .collect();

    nodes.sort_by_key(|node| node.id);

    SceneManifest {
        nodes,
        path: build_path_profile(),
    }
}

/// Path offsets sampled once per depth unit over the whole walk.
fn build_path_profile() -> PathProfile {
    let step = 1.0;
    let mut offsets = Vec::new();
    let mut depth = SCROLL_MAX;
    while depth >= SCROLL_MIN {
        offsets.push(path::lateral_offset(depth));
        depth -= step;
    }

    PathProfile {
        depth_near: SCROLL_MAX,
        depth_far: SCROLL_MIN,
        step,
        offsets,
    }
}

//! Spawn factories that build the static scene once at engine construction.
//!
//! Node ids are handed out in spawn order; the frontend builds its objects
//! from the manifest keyed on those ids. Every random placement draws from
//! the seeded rng, so the same seed always produces the same scene.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use promenade_core::components::{
    Animated, Bob, CastsShadow, CharacterRig, Limb, Material, NodeId, Orbiter, Outline, Parent,
    PortalDrift, ReceivesShadow, Shape, Spin, Streamer,
};
use promenade_core::constants::*;
use promenade_core::enums::{LimbRole, MaterialKind};
use promenade_core::path;
use promenade_core::types::Transform;
use promenade_core::zones::ZONES;

/// Sequential node-id allocator.
#[derive(Default)]
struct NodeIds(u32);

impl NodeIds {
    fn next(&mut self) -> NodeId {
        let id = NodeId(self.0);
        self.0 += 1;
        id
    }
}

/// Build the whole static world: character, ground, the seven zone
/// decoration groups, and the ambient particles.
pub fn setup_world(world: &mut World, rng: &mut ChaCha8Rng) {
    let mut ids = NodeIds::default();
    spawn_character(world, &mut ids);
    spawn_ground(world, &mut ids);
    spawn_intro_zone(world, &mut ids);
    spawn_about_zone(world, &mut ids, rng);
    spawn_experience_zone(world, &mut ids, rng);
    spawn_projects_zone(world, &mut ids);
    spawn_skills_zone(world, &mut ids, rng);
    spawn_education_zone(world, &mut ids);
    spawn_contact_zone(world, &mut ids, rng);
    spawn_particles(world, &mut ids, rng);
}

/// Cel-shaded toon material.
fn toon(color: u32) -> Material {
    Material {
        kind: MaterialKind::Toon,
        color,
        opacity: 1.0,
        transparent: false,
        wireframe: false,
        double_sided: false,
    }
}

/// Unlit flat material.
fn flat(color: u32) -> Material {
    Material {
        kind: MaterialKind::Flat,
        ..toon(color)
    }
}

/// Point-sprite material.
fn point_cloud(color: u32) -> Material {
    Material {
        kind: MaterialKind::Points,
        ..toon(color)
    }
}

/// Spawn the character rig: root group plus body, head, backpack, and the
/// four limbs. Limbs carry their role so the gait system can find them.
fn spawn_character(world: &mut World, ids: &mut NodeIds) {
    let root = ids.next();
    world.spawn((
        root,
        CharacterRig,
        Animated,
        Shape::Group,
        Transform::from_position_scaled(Vec3::new(0.0, DESCENT_START_HEIGHT, 0.0), 1.5),
    ));

    // Body (coral suit)
    world.spawn((
        ids.next(),
        Parent(root.0),
        Shape::Box {
            width: 0.8,
            height: 1.2,
            depth: 0.5,
        },
        toon(0xff7675),
        Transform::default(),
        Outline(0.02),
        CastsShadow,
    ));

    // Head
    world.spawn((
        ids.next(),
        Parent(root.0),
        Shape::Sphere {
            radius: 0.4,
            width_segments: 16,
            height_segments: 16,
        },
        toon(0xffdcb6),
        Transform::from_position(Vec3::new(0.0, 1.0, 0.0)),
        Outline(0.02),
        CastsShadow,
    ));

    // Backpack
    world.spawn((
        ids.next(),
        Parent(root.0),
        Shape::Box {
            width: 0.6,
            height: 0.8,
            depth: 0.4,
        },
        toon(0xfdcb6e),
        Transform::from_position(Vec3::new(0.0, 0.2, -0.5)),
        Outline(0.02),
        CastsShadow,
    ));

    // Limbs: dark legs, coral arms
    let limbs = [
        (LimbRole::LeftLeg, -0.2, -1.0, 0.3, 0x2d3436),
        (LimbRole::RightLeg, 0.2, -1.0, 0.3, 0x2d3436),
        (LimbRole::LeftArm, -0.55, 0.2, 0.25, 0xff7675),
        (LimbRole::RightArm, 0.55, 0.2, 0.25, 0xff7675),
    ];
    for (role, x, y, size, color) in limbs {
        world.spawn((
            ids.next(),
            Parent(root.0),
            Limb { role },
            Animated,
            Shape::Box {
                width: size,
                height: 0.8,
                depth: size,
            },
            toon(color),
            Transform::from_position(Vec3::new(x, y, 0.0)),
            Outline(0.02),
            CastsShadow,
        ));
    }
}

/// The ground plane. Spawned flat; the renderer displaces its vertices
/// laterally with the manifest's sampled path profile.
fn spawn_ground(world: &mut World, ids: &mut NodeIds) {
    world.spawn((
        ids.next(),
        Shape::Plane {
            width: 50.0,
            height: 300.0,
            width_segments: 100,
            height_segments: 300,
        },
        toon(0x2d3436),
        Transform {
            rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
            ..Transform::default()
        },
        Outline(0.01),
        ReceivesShadow,
    ));
}

/// Group node at the path center of a zone.
fn spawn_zone_group(world: &mut World, ids: &mut NodeIds, zone_index: usize) -> NodeId {
    let mid = ZONES[zone_index].midpoint();
    let id = ids.next();
    world.spawn((
        id,
        Shape::Group,
        Transform::from_position(Vec3::new(path::lateral_offset(mid), 0.0, mid)),
    ));
    id
}

/// Intro: purple platform with a spinning, bobbing cyan ring above it.
fn spawn_intro_zone(world: &mut World, ids: &mut NodeIds) {
    let group = spawn_zone_group(world, ids, 0);

    world.spawn((
        ids.next(),
        Parent(group.0),
        Shape::Cylinder {
            radius_top: 5.0,
            radius_bottom: 5.0,
            height: 0.5,
            radial_segments: 32,
        },
        toon(0x6c5ce7),
        Transform::from_position(Vec3::new(0.0, 0.25, 0.0)),
        Outline(0.03),
        CastsShadow,
    ));

    world.spawn((
        ids.next(),
        Parent(group.0),
        Shape::Torus {
            radius: 3.0,
            tube: 0.3,
            radial_segments: 16,
            tubular_segments: 32,
        },
        flat(0x00f2fe),
        Transform {
            position: Vec3::new(0.0, 5.0, 0.0),
            rotation: Vec3::new(FRAC_PI_2, 0.0, 0.0),
            ..Transform::default()
        },
        Spin {
            base: Vec3::new(FRAC_PI_2, 0.0, 0.0),
            rate: Vec3::new(0.0, 0.0, 1.0),
        },
        Bob {
            base_height: 5.0,
            amplitude: 0.5,
            rate: 2.0,
        },
        Animated,
    ));
}

/// About: a ring of trees and a scatter of floating green orbs.
fn spawn_about_zone(world: &mut World, ids: &mut NodeIds, rng: &mut ChaCha8Rng) {
    let group = spawn_zone_group(world, ids, 1);

    for i in 0..ABOUT_TREE_COUNT {
        let angle = i as f32 / ABOUT_TREE_COUNT as f32 * TAU;
        let radius = 8.0 + rng.gen_range(0.0..4.0);
        let tree = ids.next();
        world.spawn((
            tree,
            Parent(group.0),
            Shape::Group,
            Transform::from_position(Vec3::new(angle.cos() * radius, 1.5, angle.sin() * radius)),
        ));

        // Trunk
        world.spawn((
            ids.next(),
            Parent(tree.0),
            Shape::Cylinder {
                radius_top: 0.3,
                radius_bottom: 0.4,
                height: 3.0,
                radial_segments: 8,
            },
            toon(0x8b4513),
            Transform::default(),
            Outline(0.03),
            CastsShadow,
        ));

        // Foliage
        world.spawn((
            ids.next(),
            Parent(tree.0),
            Shape::Sphere {
                radius: 1.5,
                width_segments: 8,
                height_segments: 8,
            },
            toon(0x27ae60),
            Transform::from_position(Vec3::new(0.0, 3.0, 0.0)),
            Outline(0.03),
            CastsShadow,
        ));
    }

    for _ in 0..ABOUT_ORB_COUNT {
        world.spawn((
            ids.next(),
            Parent(group.0),
            Shape::Sphere {
                radius: 0.3,
                width_segments: 16,
                height_segments: 16,
            },
            flat(0x2ecc71),
            Transform::from_position(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 20.0,
                2.0 + rng.gen::<f32>() * 3.0,
                (rng.gen::<f32>() - 0.5) * 20.0,
            )),
        ));
    }
}

/// Experience: grey buildings lining both sides of the path.
fn spawn_experience_zone(world: &mut World, ids: &mut NodeIds, rng: &mut ChaCha8Rng) {
    let group = spawn_zone_group(world, ids, 2);

    for _ in 0..EXPERIENCE_BUILDING_COUNT {
        let height = 3.0 + rng.gen::<f32>() * 8.0;
        let side = if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 };
        let distance = 8.0 + rng.gen::<f32>() * 7.0;
        world.spawn((
            ids.next(),
            Parent(group.0),
            Shape::Box {
                width: 2.0,
                height,
                depth: 2.0,
            },
            toon(0x7f8c8d),
            Transform {
                position: Vec3::new(
                    side * distance,
                    height / 2.0,
                    (rng.gen::<f32>() - 0.5) * 40.0,
                ),
                scale: Vec3::splat(1.5),
                ..Transform::default()
            },
            Outline(0.03),
            CastsShadow,
            ReceivesShadow,
        ));
    }
}

/// Projects: translucent holographic floor ringed by glowing pillars.
fn spawn_projects_zone(world: &mut World, ids: &mut NodeIds) {
    let group = spawn_zone_group(world, ids, 3);

    world.spawn((
        ids.next(),
        Parent(group.0),
        Shape::Plane {
            width: 30.0,
            height: 40.0,
            width_segments: 1,
            height_segments: 1,
        },
        Material {
            kind: MaterialKind::Flat,
            color: 0x00f2fe,
            opacity: 0.3,
            transparent: true,
            wireframe: false,
            double_sided: true,
        },
        Transform {
            position: Vec3::new(0.0, 0.1, 0.0),
            rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
            ..Transform::default()
        },
    ));

    for i in 0..PROJECT_PILLAR_COUNT {
        let angle = i as f32 / PROJECT_PILLAR_COUNT as f32 * TAU;
        let (x, z) = (angle.cos() * 10.0, angle.sin() * 10.0);

        world.spawn((
            ids.next(),
            Parent(group.0),
            Shape::Cylinder {
                radius_top: 0.5,
                radius_bottom: 0.5,
                height: 6.0,
                radial_segments: 8,
            },
            toon(0x4facfe),
            Transform::from_position(Vec3::new(x, 3.0, z)),
            Outline(0.03),
            CastsShadow,
        ));

        // Glow cap
        world.spawn((
            ids.next(),
            Parent(group.0),
            Shape::Sphere {
                radius: 0.8,
                width_segments: 16,
                height_segments: 16,
            },
            flat(0x667eea),
            Transform::from_position(Vec3::new(x, 6.5, z)),
        ));
    }
}

/// Skills: spinning wireframe core with orbiting orbs.
fn spawn_skills_zone(world: &mut World, ids: &mut NodeIds, rng: &mut ChaCha8Rng) {
    let group = spawn_zone_group(world, ids, 4);

    world.spawn((
        ids.next(),
        Parent(group.0),
        Shape::Icosahedron {
            radius: 3.0,
            detail: 0,
        },
        Material {
            kind: MaterialKind::Flat,
            color: 0xff006e,
            opacity: 1.0,
            transparent: false,
            wireframe: true,
            double_sided: false,
        },
        Transform::from_position(Vec3::new(0.0, 5.0, 0.0)),
        Spin {
            base: Vec3::ZERO,
            rate: Vec3::new(0.5, 0.3, 0.0),
        },
        Animated,
    ));

    for i in 0..SKILL_ORB_COUNT {
        let base_angle = i as f32 / SKILL_ORB_COUNT as f32 * TAU;
        let speed = 0.5 + rng.gen::<f32>() * 0.5;
        let radius = 5.0 + rng.gen::<f32>() * 2.0;
        world.spawn((
            ids.next(),
            Parent(group.0),
            Shape::Sphere {
                radius: 0.4,
                width_segments: 16,
                height_segments: 16,
            },
            flat(0x764ba2),
            Transform::from_position(Vec3::new(
                base_angle.cos() * radius,
                SKILL_ORB_HEIGHT + (base_angle * 2.0).sin() * SKILL_ORB_BOB,
                base_angle.sin() * radius,
            )),
            Orbiter {
                base_angle,
                speed,
                radius,
            },
            Animated,
        ));
    }
}

/// Education: golden monument flanked by columns, topped with a sphere.
fn spawn_education_zone(world: &mut World, ids: &mut NodeIds) {
    let group = spawn_zone_group(world, ids, 5);

    world.spawn((
        ids.next(),
        Parent(group.0),
        Shape::Cylinder {
            radius_top: 0.5,
            radius_bottom: 2.0,
            height: 8.0,
            radial_segments: 8,
        },
        toon(0xffd700),
        Transform::from_position(Vec3::new(0.0, 4.0, 0.0)),
        Outline(0.03),
        CastsShadow,
    ));

    for i in 0..EDUCATION_COLUMN_COUNT {
        let angle = i as f32 / EDUCATION_COLUMN_COUNT as f32 * TAU;
        world.spawn((
            ids.next(),
            Parent(group.0),
            Shape::Cylinder {
                radius_top: 0.4,
                radius_bottom: 0.4,
                height: 5.0,
                radial_segments: 8,
            },
            toon(0xe0c068),
            Transform::from_position(Vec3::new(angle.cos() * 5.0, 2.5, angle.sin() * 5.0)),
            Outline(0.03),
            CastsShadow,
        ));
    }

    world.spawn((
        ids.next(),
        Parent(group.0),
        Shape::Sphere {
            radius: 1.0,
            width_segments: 16,
            height_segments: 16,
        },
        flat(0xffd700),
        Transform::from_position(Vec3::new(0.0, 8.5, 0.0)),
    ));
}

/// Contact: spinning portal torus surrounded by drifting particles.
fn spawn_contact_zone(world: &mut World, ids: &mut NodeIds, rng: &mut ChaCha8Rng) {
    let group = spawn_zone_group(world, ids, 6);

    world.spawn((
        ids.next(),
        Parent(group.0),
        Shape::Torus {
            radius: 4.0,
            tube: 0.5,
            radial_segments: 16,
            tubular_segments: 32,
        },
        flat(0x4facfe),
        Transform::from_position(Vec3::new(0.0, 5.0, 0.0)),
        Spin {
            base: Vec3::ZERO,
            rate: Vec3::new(0.0, 1.0, 0.0),
        },
        Animated,
    ));

    for i in 0..PORTAL_PARTICLE_COUNT {
        world.spawn((
            ids.next(),
            Parent(group.0),
            Shape::Sphere {
                radius: 0.1,
                width_segments: 8,
                height_segments: 8,
            },
            flat(0x00f2fe),
            Transform::from_position(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 8.0,
                rng.gen::<f32>() * 10.0,
                (rng.gen::<f32>() - 0.5) * 8.0,
            )),
            PortalDrift { phase: i as f32 },
            Animated,
        ));
    }
}

/// Ambient particles: dust motes, falling streamers, and a star field.
fn spawn_particles(world: &mut World, ids: &mut NodeIds, rng: &mut ChaCha8Rng) {
    let dust: Vec<Vec3> = (0..DUST_POINT_COUNT)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 100.0,
                rng.gen::<f32>() * 50.0,
                (rng.gen::<f32>() - 0.5) * 300.0,
            )
        })
        .collect();
    world.spawn((
        ids.next(),
        Shape::Points {
            positions: dust,
            size: 0.1,
        },
        point_cloud(0xffffff),
        Transform::default(),
    ));

    for _ in 0..STREAMER_COUNT {
        world.spawn((
            ids.next(),
            Shape::Sphere {
                radius: 0.05,
                width_segments: 8,
                height_segments: 8,
            },
            flat(0x00f2fe),
            Transform::from_position(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 80.0,
                20.0 + rng.gen::<f32>() * 30.0,
                (rng.gen::<f32>() - 0.5) * 300.0,
            )),
            Streamer,
            Animated,
        ));
    }

    let stars: Vec<Vec3> = (0..STAR_POINT_COUNT)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 200.0,
                20.0 + rng.gen::<f32>() * 80.0,
                (rng.gen::<f32>() - 0.5) * 400.0,
            )
        })
        .collect();
    world.spawn((
        ids.next(),
        Shape::Points {
            positions: stars,
            size: 0.2,
        },
        point_cloud(0xffffff),
        Transform::default(),
    ));
}

//! Tour engine — the core of the walk.
//!
//! `TourEngine` owns the hecs scene-node world, processes viewer commands,
//! runs all per-tick systems, and produces `TourSnapshot`s. Completely
//! headless (no Tauri dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use promenade_core::commands::ViewerCommand;
use promenade_core::constants::{POINTER_GAIN, SCROLL_MAX, SCROLL_MIN, WHEEL_GAIN};
use promenade_core::events::UiEvent;
use promenade_core::state::{SceneManifest, TourSnapshot};
use promenade_core::types::TourTime;
use promenade_core::zones::ZONES;

use crate::locomotion::{CameraRig, LocomotionState};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new tour.
pub struct TourConfig {
    /// RNG seed for decorative placement. Same seed = same scene.
    pub seed: u64,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The tour engine. Owns the scene-node world and all walk state.
pub struct TourEngine {
    world: World,
    time: TourTime,
    locomotion: LocomotionState,
    camera: CameraRig,
    command_queue: VecDeque<ViewerCommand>,
    ui_events: Vec<UiEvent>,
}

impl TourEngine {
    /// Create a new engine with the full static scene already spawned.
    pub fn new(config: TourConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        world_setup::setup_world(&mut world, &mut rng);

        Self {
            world,
            time: TourTime::default(),
            locomotion: LocomotionState::default(),
            camera: CameraRig::default(),
            command_queue: VecDeque::new(),
            ui_events: Vec::new(),
        }
    }

    /// Queue a viewer command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ViewerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ViewerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the walk by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> TourSnapshot {
        self.process_commands();

        if self.locomotion.is_descending {
            // Intro descent: rigid camera, none of the steady-state
            // systems run until the character lands.
            systems::descent::run(
                &mut self.world,
                &mut self.locomotion,
                &mut self.camera,
                &mut self.ui_events,
            );
        } else {
            // 1. Scroll smoothing + character placement along the path
            systems::locomotion::run(&mut self.world, &mut self.locomotion);
            // 2. Walking gait
            systems::gait::run(&mut self.world, &mut self.locomotion);
            // 3. Chase camera
            systems::camera::run(&self.world, &mut self.locomotion, &mut self.camera);
            // 4. Zone crossing detection
            systems::zone_watch::run(&mut self.locomotion, &mut self.ui_events);
            // 5. Decorative animation
            systems::ambient::run(&mut self.world, self.time.elapsed_secs as f32);
        }

        self.time.advance();

        let ui_events = std::mem::take(&mut self.ui_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.locomotion,
            &self.camera,
            ui_events,
        )
    }

    /// Build the one-time scene manifest the renderer constructs from.
    pub fn manifest(&self) -> SceneManifest {
        systems::snapshot::build_manifest(&self.world)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> TourTime {
        self.time
    }

    /// Get a read-only reference to the scene-node world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the locomotion state.
    #[cfg(test)]
    pub fn locomotion(&self) -> &LocomotionState {
        &self.locomotion
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single viewer command. Commands only write target fields.
    fn handle_command(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Scroll { delta } => {
                // Wheel input is dropped until the descent lands.
                if self.locomotion.is_descending {
                    return;
                }
                let target = self.locomotion.target_scroll_position - delta * WHEEL_GAIN;
                self.locomotion.target_scroll_position = target.clamp(SCROLL_MIN, SCROLL_MAX);
            }
            ViewerCommand::PointerMoved { x } => {
                self.locomotion.target_camera_angle = x * POINTER_GAIN;
            }
            ViewerCommand::JumpToZone { index } => {
                if let Some(zone) = ZONES.get(index) {
                    self.locomotion.target_scroll_position = zone.midpoint();
                }
            }
        }
    }
}

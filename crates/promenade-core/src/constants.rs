//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick = one logical animation frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Path ---

/// Primary sine frequency of the winding path (radians per depth unit).
pub const PATH_PRIMARY_FREQ: f32 = 0.05;

/// Primary sine amplitude of the winding path (units).
pub const PATH_PRIMARY_AMP: f32 = 12.0;

/// Secondary sine frequency layered on the path.
pub const PATH_SECONDARY_FREQ: f32 = 0.02;

/// Secondary sine amplitude layered on the path.
pub const PATH_SECONDARY_AMP: f32 = 5.0;

/// Depth distance sampled ahead of the character to derive its heading.
pub const HEADING_LOOK_AHEAD: f32 = 5.0;

// --- Scroll ---

/// Deepest reachable depth along the path.
pub const SCROLL_MIN: f32 = -300.0;

/// Shallowest reachable depth (the walk starts here).
pub const SCROLL_MAX: f32 = 0.0;

/// Fraction of the remaining distance to target closed per tick.
pub const SCROLL_DAMPING: f32 = 0.05;

/// Wheel delta to depth-units conversion factor.
pub const WHEEL_GAIN: f32 = 0.05;

/// Depth span used for the progress fraction (|scroll| / span).
pub const PROGRESS_SPAN: f32 = 300.0;

/// Below this distance to target the character counts as stopped.
pub const MOVING_THRESHOLD: f32 = 0.1;

// --- Gait ---

/// Walk cycle phase advance per tick while moving.
pub const WALK_CYCLE_RATE: f32 = 0.15;

/// Leg swing amplitude (radians).
pub const LEG_SWING_AMPLITUDE: f32 = 0.5;

/// Arm swing amplitude (radians).
pub const ARM_SWING_AMPLITUDE: f32 = 0.3;

// --- Descent ---

/// Height the character starts its descent from.
pub const DESCENT_START_HEIGHT: f32 = 50.0;

/// Height lost per tick during the descent.
pub const DESCENT_STEP: f32 = 0.5;

/// Yaw spin per tick during the descent (radians).
pub const DESCENT_SPIN_STEP: f32 = 0.1;

/// Resting height of the character root above the ground.
pub const CHARACTER_HEIGHT: f32 = 2.0;

/// Delay between descent completion and the UI reveal (milliseconds).
pub const UI_REVEAL_DELAY_MS: u64 = 500;

// --- Camera ---

/// Horizontal trailing distance of the camera behind the character.
pub const CAMERA_DISTANCE: f32 = 15.0;

/// Camera height above the character root.
pub const CAMERA_HEIGHT: f32 = 6.0;

/// Fraction of remaining distance the camera closes per tick, per axis.
pub const CAMERA_DAMPING: f32 = 0.05;

/// Vertical offset above the character the camera looks at.
pub const CAMERA_LOOK_OFFSET: f32 = 1.0;

/// Normalized pointer x to camera orbit angle conversion factor.
pub const POINTER_GAIN: f32 = 0.5;

// --- Decoration animation ---

/// Base height of the orbiting skill orbs.
pub const SKILL_ORB_HEIGHT: f32 = 5.0;

/// Vertical bob amplitude of the orbiting skill orbs.
pub const SKILL_ORB_BOB: f32 = 2.0;

/// Vertical drift step factor for portal particles.
pub const PORTAL_DRIFT_STEP: f32 = 0.02;

/// Height lost per tick by a falling streamer.
pub const STREAMER_FALL_STEP: f32 = 0.05;

/// Height a streamer resets to after falling below zero.
pub const STREAMER_CEILING: f32 = 50.0;

// --- Decoration counts ---

/// Trees ringing the about zone.
pub const ABOUT_TREE_COUNT: usize = 12;

/// Floating orbs in the about zone.
pub const ABOUT_ORB_COUNT: usize = 25;

/// Buildings lining the experience zone.
pub const EXPERIENCE_BUILDING_COUNT: usize = 20;

/// Pillars ringing the projects zone.
pub const PROJECT_PILLAR_COUNT: usize = 6;

/// Orbs orbiting the skills core.
pub const SKILL_ORB_COUNT: usize = 10;

/// Columns around the education monument.
pub const EDUCATION_COLUMN_COUNT: usize = 4;

/// Drifting particles around the contact portal.
pub const PORTAL_PARTICLE_COUNT: usize = 100;

/// Points in the ambient dust cloud.
pub const DUST_POINT_COUNT: usize = 1000;

/// Points in the star field.
pub const STAR_POINT_COUNT: usize = 2000;

/// Falling streamer spheres.
pub const STREAMER_COUNT: usize = 600;

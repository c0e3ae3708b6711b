//! The winding path the walk follows.
//!
//! Both the deformed ground and the character sample the same function,
//! so the character always stays centered on the visible path.

use crate::constants::*;

/// Lateral (x) offset of the path at the given depth (z) coordinate.
///
/// Two layered sines: a tight primary winding plus a slow secondary drift.
/// Pure and total over all reals.
pub fn lateral_offset(depth: f32) -> f32 {
    (depth * PATH_PRIMARY_FREQ).sin() * PATH_PRIMARY_AMP
        + (depth * PATH_SECONDARY_FREQ).sin() * PATH_SECONDARY_AMP
}

/// Yaw the character should face at the given depth.
///
/// Samples the path a fixed distance ahead (toward decreasing depth),
/// takes the arctangent of lateral delta over look-ahead, and adds pi
/// because the walk travels toward -z.
pub fn heading_at(depth: f32) -> f32 {
    let here = lateral_offset(depth);
    let ahead = lateral_offset(depth - HEADING_LOOK_AHEAD);
    std::f32::consts::PI + (ahead - here).atan2(-HEADING_LOOK_AHEAD)
}

//! Zone crossing detection.

use promenade_core::events::UiEvent;
use promenade_core::zones::{self, ZONES};

use crate::locomotion::LocomotionState;

/// Emit a `ZoneChanged` event when the smoothed scroll position crosses
/// into a different zone. A depth outside the table leaves the current
/// zone unchanged.
pub fn run(loco: &mut LocomotionState, ui_events: &mut Vec<UiEvent>) {
    let Some(index) = zones::zone_at(loco.scroll_position) else {
        return;
    };
    if index == loco.current_zone {
        return;
    }

    loco.current_zone = index;
    let zone = &ZONES[index];
    ui_events.push(UiEvent::ZoneChanged {
        index,
        name: zone.name.to_string(),
        description: zone.description.to_string(),
    });
}

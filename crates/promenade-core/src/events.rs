//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

/// One-shot events carried in the snapshot's event list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// The walk crossed into a different zone.
    ZoneChanged {
        index: usize,
        name: String,
        description: String,
    },
    /// The intro descent finished; the shell reveals the UI after a delay.
    DescentComplete,
}

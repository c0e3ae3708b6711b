//! The seven thematic zones along the path.
//!
//! Zones are authored once as a static table and never mutated. Each covers
//! a contiguous depth range with `start > end` (depths run 0 down to -300).

/// A contiguous depth range with its panel content heading.
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub name: &'static str,
    pub description: &'static str,
    /// Shallow edge of the range (closer to 0).
    pub start: f32,
    /// Deep edge of the range (more negative).
    pub end: f32,
}

impl Zone {
    /// Depth at the center of the zone, used as the jump-to target.
    pub fn midpoint(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// The authored zone table, in traversal order.
pub const ZONES: [Zone; 7] = [
    Zone {
        name: "Intro",
        description: "Welcome to my journey",
        start: 0.0,
        end: -25.0,
    },
    Zone {
        name: "About",
        description: "Who I am",
        start: -25.0,
        end: -65.0,
    },
    Zone {
        name: "Experience",
        description: "My professional journey",
        start: -65.0,
        end: -115.0,
    },
    Zone {
        name: "Projects",
        description: "What I've built",
        start: -115.0,
        end: -175.0,
    },
    Zone {
        name: "Skills",
        description: "My expertise",
        start: -175.0,
        end: -225.0,
    },
    Zone {
        name: "Education",
        description: "My academic background",
        start: -225.0,
        end: -265.0,
    },
    Zone {
        name: "Contact",
        description: "Get in touch",
        start: -265.0,
        end: -300.0,
    },
];

/// Index of the zone whose range contains the given depth.
///
/// Linear scan in authored order; on a shared boundary the shallower zone
/// wins. Returns `None` for depths outside [-300, 0].
pub fn zone_at(depth: f32) -> Option<usize> {
    ZONES
        .iter()
        .position(|zone| depth >= zone.end && depth <= zone.start)
}

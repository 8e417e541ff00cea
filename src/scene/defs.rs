//! The fixed scene roster: copy, card layout and depth positions.
//!
//! Fourteen scenes, fixed at build time. Depth runs along -Z at a constant
//! spacing; the camera rests [`REST_OFFSET`](super::camera::REST_OFFSET) in
//! front of the active scene's depth.

/// Number of scenes in the journey.
pub const SCENE_COUNT: usize = 14;

/// Distance between consecutive scenes along the movement axis.
pub const SCENE_SPACING: f32 = 25.0;

/// Depth position of scene `index` (0, -25, -50, ...).
pub fn depth(index: usize) -> f32 {
    -(index as f32) * SCENE_SPACING
}

/// Which side of the screen a scene's card sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSide {
    Left,
    Right,
}

/// Static description of one scene: identity and card copy.
#[derive(Clone, Copy, Debug)]
pub struct SceneSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub side: CardSide,
}

impl SceneSpec {
    /// Card header, e.g. `SCENE_03 // GRID`.
    pub fn number_line(&self, index: usize) -> String {
        format!("SCENE_{:02} // {}", index + 1, self.id.to_uppercase())
    }
}

/// The roster, in presentation order.
pub static SCENES: [SceneSpec; SCENE_COUNT] = [
    SceneSpec {
        id: "nebula",
        title: "NEBULA\nGENESIS",
        description: "ORIGIN POINT. REACTIVE STARDUST FIELD. CURSOR INTERACTION ENABLED.",
        side: CardSide::Left,
    },
    SceneSpec {
        id: "crystal",
        title: "CRYSTAL\nARTIFACT",
        description: "GEOMETRIC STRUCTURE DETECTED. ENERGY SIGNATURE: UNKNOWN. SCANNING.",
        side: CardSide::Right,
    },
    SceneSpec {
        id: "grid",
        title: "DIGITAL\nTERRAIN",
        description: "SYNTHETIC LANDSCAPE. GROUND MATRIX UNSTABLE. PROCEED WITH CAUTION.",
        side: CardSide::Left,
    },
    SceneSpec {
        id: "void",
        title: "EVENT\nHORIZON",
        description: "SIMULATION BOUNDARY REACHED. DATA BEYOND THIS POINT: NULL.",
        side: CardSide::Right,
    },
    SceneSpec {
        id: "aurora",
        title: "AURORA\nVEIL",
        description: "ELECTROMAGNETIC ANOMALY. ANCIENT STELLAR RADIATION DETECTED.",
        side: CardSide::Left,
    },
    SceneSpec {
        id: "solar",
        title: "SOLAR\nFORGE",
        description: "DYING STAR CORE. SOLAR FLARE ACTIVITY: CRITICAL. ENERGY HARVESTABLE.",
        side: CardSide::Right,
    },
    SceneSpec {
        id: "quantum",
        title: "QUANTUM\nREALM",
        description: "REALITY FRAGMENTED. PARTICLES IN SUPERPOSITION. OBSERVATION ALTERS STATE.",
        side: CardSide::Left,
    },
    SceneSpec {
        id: "fractal",
        title: "FRACTAL\nDIMENSION",
        description: "INFINITE RECURSION. PATTERNS WITHIN PATTERNS. ZOOM DEPTH: UNLIMITED.",
        side: CardSide::Right,
    },
    SceneSpec {
        id: "pulse",
        title: "NEURAL\nPULSE",
        description: "COSMIC CONSCIOUSNESS NETWORK. SYNAPTIC CONNECTIONS: 10^82.",
        side: CardSide::Left,
    },
    SceneSpec {
        id: "mirror",
        title: "MIRROR\nREALM",
        description: "DIMENSIONAL REFLECTION. REAL/SIMULATED BOUNDARY: INDETERMINATE.",
        side: CardSide::Right,
    },
    SceneSpec {
        id: "storm",
        title: "COSMIC\nSTORM",
        description: "ELECTROMAGNETIC CHAOS. INTERDIMENSIONAL LIGHTNING. DANGER: EXTREME.",
        side: CardSide::Left,
    },
    SceneSpec {
        id: "constellation",
        title: "STELLAR\nCONSTELLATION",
        description: "STAR MAP INITIALIZED. NODES CONNECTED. ANCIENT NAVIGATION CHART.",
        side: CardSide::Right,
    },
    SceneSpec {
        id: "warp",
        title: "WARP\nTUNNEL",
        description: "FTL TRANSIT INITIATED. DIMENSIONAL PIERCE IN PROGRESS. HOLD.",
        side: CardSide::Left,
    },
    SceneSpec {
        id: "genesis",
        title: "GENESIS\nCORE",
        description: "ORIGIN. TERMINUS. ALL VOYAGES CONVERGE HERE. RESTART AVAILABLE.",
        side: CardSide::Right,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depths_are_strictly_decreasing() {
        for i in 1..SCENE_COUNT {
            assert!(depth(i) < depth(i - 1));
        }
        assert_eq!(depth(0), 0.0);
        assert_eq!(depth(13), -325.0);
    }

    #[test]
    fn test_number_line_format() {
        assert_eq!(SCENES[2].number_line(2), "SCENE_03 // GRID");
    }
}

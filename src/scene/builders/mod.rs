//! Scene content generators - one builder per stage of the journey.
//!
//! Builders are pure construction: they run once at startup, produce a
//! [`GroupNode`] subtree with authored baseline opacities, and are never
//! called again. Scatter uses a seeded RNG so a given seed always produces
//! the same world.
//!
//! Idle motion is declarative: builders set `spin`/`pulse` on sub-groups and
//! the viewport samples them at paint time.

pub mod shapes;

mod fields;
mod structures;
mod tunnels;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::defs::SCENE_COUNT;
use super::node::GroupNode;

/// Shared accent palette (the journey's brutalist scheme).
pub(crate) mod palette {
    pub const ACCENT: u32 = 0xff3c00;
    pub const WHITE: u32 = 0xffffff;
    pub const GREEN: u32 = 0x00ff88;
    pub const VIOLET: u32 = 0x8866ff;
    pub const CYAN: u32 = 0x00ffff;
    pub const EMBER: u32 = 0xff6600;
    pub const AMBER: u32 = 0xff9900;
    pub const GOLD: u32 = 0xffcc00;
    pub const STORM: u32 = 0x8888ff;
    pub const CLOUD: u32 = 0x222233;
}

/// Uniform sample in [0, 1).
pub(crate) fn unit(rng: &mut StdRng) -> f32 {
    rng.gen_range(0.0..1.0)
}

/// Build all scene roots in presentation order.
pub fn build_all(seed: u64) -> Vec<GroupNode> {
    let builders: [fn(&mut StdRng) -> GroupNode; SCENE_COUNT] = [
        fields::particle_field,
        structures::artifact,
        fields::grid_terrain,
        tunnels::void_tunnel,
        fields::aurora,
        structures::solar_forge,
        fields::quantum_realm,
        structures::fractal_dimension,
        structures::neural_pulse,
        structures::mirror_realm,
        fields::cosmic_storm,
        structures::constellation,
        tunnels::warp_tunnel,
        structures::genesis_core,
    ];

    builders
        .iter()
        .enumerate()
        .map(|(i, build)| {
            // Per-scene stream so reordering one builder can't reshuffle the rest
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(0x9e37_79b9 * (i as u64 + 1)));
            build(&mut rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_all_covers_roster() {
        let roots = build_all(1);
        assert_eq!(roots.len(), SCENE_COUNT);
        for (i, root) in roots.iter().enumerate() {
            assert!(!root.children.is_empty(), "scene {i} is empty");
        }
    }
}
